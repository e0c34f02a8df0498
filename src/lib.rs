//! Minimum spanning trees with the Filter-Kruskal family of algorithms.
//!
//! Filter-Kruskal partitions the edge list around a pivot weight like
//! quicksort, solves the light side first, and uses the disjoint set built so
//! far to drop heavy edges whose endpoints are already connected before they
//! are ever sorted. On graphs with many more edges than vertices most edges
//! are discarded this way.
//!
//! All variants (two-way, three-way, sampled and skewed pivots, explicit
//! stack, bucket and sample-sort splits) are one algorithm configured through
//! [`MstConfig`]. Plain Kruskal and Prim are included as baselines.
//!
//! # Example
//!
//! ```
//! use filter_kruskal::{solve, Edge};
//!
//! let mut edges = vec![
//!     Edge::new(0, 1, 1.0),
//!     Edge::new(1, 2, 2.0),
//!     Edge::new(2, 3, 3.0),
//!     Edge::new(0, 3, 10.0),
//!     Edge::new(0, 2, 5.0),
//! ];
//!
//! let output = solve(&mut edges, 4).expect("valid input");
//! assert_eq!(output.cost, 6.0);
//! assert!(output.is_spanning_tree(4));
//! ```

pub mod config;
mod error;
pub mod graph;
pub mod mst;
mod types;
pub mod validation;

pub use config::{
    Algorithm, BucketConfig, FilterKruskalConfig, FilterPolicy, MstConfig, PartitionScheme,
    PivotRule, Quantile, Recursion, SampleSortConfig,
};
pub use error::MstError;
pub use mst::timing::SolveTimings;
pub use types::{sort_by_weight, Edge, VertexId, Weight};

/// Counters collected during a run. Cheap enough to be always on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MstStats {
    /// Pivot or multi-way splits performed.
    pub partitions: usize,
    /// Edges dropped because their endpoints were already connected.
    pub filtered_edges: usize,
    /// Calls to the sorting base case.
    pub base_cases: usize,
    /// Edges handed to the sorting base case, summed over calls.
    pub base_case_edges: usize,
    /// Splits that made no progress and were solved by sorting instead.
    pub degenerate_fallbacks: usize,
    /// Deepest recursion level reached (0 = the whole input).
    pub max_depth: usize,
    /// Ranges the recursive driver moved to the explicit stack for depth.
    pub stack_switches: usize,
}

/// Result of an MST computation.
#[derive(Debug, Clone)]
pub struct MstOutput {
    /// Total weight of the accepted edges, accumulated in `f64`.
    pub cost: f64,
    /// Number of accepted edges.
    pub num_edges: usize,
    /// Accepted edges in acceptance order. Empty if `collect_edges` was off.
    pub edges: Vec<Edge>,
    pub stats: MstStats,
    /// Per-phase wall time (all zero unless built with the `timing` feature).
    pub timings: SolveTimings,
}

impl MstOutput {
    /// Connected components of the input graph on `n` vertices.
    #[inline]
    pub fn num_components(&self, n: usize) -> usize {
        n.saturating_sub(self.num_edges)
    }

    /// True if the accepted edges span all `n` vertices.
    #[inline]
    pub fn is_spanning_tree(&self, n: usize) -> bool {
        n > 0 && self.num_edges == n - 1
    }

    /// Error unless the graph was connected.
    pub fn require_spanning(&self, n: usize) -> Result<(), MstError> {
        if self.is_spanning_tree(n) {
            Ok(())
        } else {
            Err(MstError::Disconnected {
                components: self.num_components(n),
            })
        }
    }
}

/// Compute a minimum spanning forest of `edges` over vertices `0..n` with the
/// default configuration (two-way Filter-Kruskal, random pivot).
///
/// `edges` is permuted in place. Disconnected graphs are not an error: the
/// result is a spanning forest with `n - components` edges.
pub fn solve(edges: &mut [Edge], n: usize) -> Result<MstOutput, MstError> {
    solve_with(edges, n, &MstConfig::default())
}

/// Compute a minimum spanning forest with explicit configuration.
pub fn solve_with(edges: &mut [Edge], n: usize, config: &MstConfig) -> Result<MstOutput, MstError> {
    validate_input(edges, n)?;

    tracing::debug!(
        algorithm = %config.algorithm,
        n,
        m = edges.len(),
        seed = config.seed,
        "mst start"
    );

    let output = mst::run(edges, n, config);

    tracing::debug!(
        algorithm = %config.algorithm,
        cost = output.cost,
        num_edges = output.num_edges,
        partitions = output.stats.partitions,
        filtered = output.stats.filtered_edges,
        "mst done"
    );
    output
        .timings
        .report(config.algorithm.name(), n, edges.len());

    Ok(output)
}

fn validate_input(edges: &[Edge], n: usize) -> Result<(), MstError> {
    if n == 0 || n > VertexId::MAX as usize {
        return Err(MstError::InvalidVertexCount(n));
    }
    for (i, e) in edges.iter().enumerate() {
        for vertex in [e.a, e.b] {
            if vertex as usize >= n {
                return Err(MstError::VertexOutOfRange { edge: i, vertex, n });
            }
        }
        if e.w.is_nan() {
            return Err(MstError::NanWeight { edge: i });
        }
    }
    Ok(())
}
