//! MST solvers: Kruskal, the Filter-Kruskal family, the multi-way variants
//! (bucket-kruskal and sample-sort super-kruskal) and Prim.
//!
//! All Kruskal-style solvers share one [`MstContext`]: the disjoint set used
//! as connectivity oracle, the accepted edges, the random source for pivots
//! and samples, and diagnostics. Solvers work on disjoint sub-slices of one
//! edge buffer, permuting it in place.

pub mod bucket;
pub mod filter_kruskal;
pub mod kruskal;
pub mod partial;
pub mod partition;
pub mod pivot;
pub mod prim;
pub mod sample_sort;
pub mod timing;
pub mod union_find;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{Algorithm, MstConfig};
use crate::types::Edge;
use crate::{MstOutput, MstStats};

use kruskal::SpanningForest;
use timing::SolveTimings;
use union_find::DisjointSet;

/// Per-run solver state.
///
/// Created fresh for every run with each vertex in its own set; the disjoint
/// set only ever merges, so a filter decision stays valid for the rest of the run.
pub struct MstContext<R = ChaCha8Rng> {
    set: DisjointSet,
    forest: SpanningForest,
    pub(crate) rng: R,
    pub(crate) stats: MstStats,
    pub(crate) timings: SolveTimings,
    /// Root-k sample scratch: (weight, index into the current range).
    pub(crate) samples: Vec<(f32, usize)>,
}

impl<R> MstContext<R> {
    pub fn new(n: usize, rng: R, collect_edges: bool) -> Self {
        Self {
            set: DisjointSet::new(n),
            forest: SpanningForest::new(n, collect_edges),
            rng,
            stats: MstStats::default(),
            timings: SolveTimings::default(),
            samples: Vec::new(),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn n(&self) -> usize {
        self.set.len()
    }

    /// Number of accepted edges.
    #[inline]
    pub fn num_accepted(&self) -> usize {
        self.forest.len()
    }

    /// True once `n - 1` edges are accepted.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.forest.is_complete()
    }

    /// Accept `e` if it joins two components.
    #[inline]
    pub fn try_add(&mut self, e: Edge) -> bool {
        self.forest.try_add(&mut self.set, e)
    }

    /// "Are `a` and `b` already connected", i.e. the filter predicate.
    #[inline]
    pub fn connected(&mut self, a: u32, b: u32) -> bool {
        self.set.compare(a, b)
    }

    pub fn set_mut(&mut self) -> &mut DisjointSet {
        &mut self.set
    }

    pub fn forest(&self) -> &SpanningForest {
        &self.forest
    }

    pub fn stats(&self) -> &MstStats {
        &self.stats
    }

    pub fn timings(&self) -> &SolveTimings {
        &self.timings
    }

    /// Drop already-connected edges from `edges`, returning the surviving length.
    pub(crate) fn filter(&mut self, edges: &mut [Edge]) -> usize {
        let t = timing::Timer::start();
        let len = kruskal::filter_all(&mut self.set, edges);
        self.stats.filtered_edges += edges.len() - len;
        self.timings.add(timing::Phase::Filter, t.elapsed());
        len
    }

    pub fn finish(self) -> MstOutput {
        let (edges, num_edges, cost) = self.forest.into_parts();
        MstOutput {
            cost,
            num_edges,
            edges,
            stats: self.stats,
            timings: self.timings,
        }
    }
}

/// Run the configured algorithm on already-validated input.
pub(crate) fn run(edges: &mut [Edge], n: usize, config: &MstConfig) -> MstOutput {
    let rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut ctx = MstContext::new(n, rng, config.collect_edges);

    let len = if config.partial_mst && !matches!(config.algorithm, Algorithm::Prim) {
        partial::partial_mst(&mut ctx, edges)
    } else {
        edges.len()
    };
    let edges = &mut edges[..len];

    match &config.algorithm {
        Algorithm::Kruskal => kruskal::kruskal(&mut ctx, edges, true),
        Algorithm::FilterKruskal(cfg) => filter_kruskal::filter_kruskal(&mut ctx, edges, cfg),
        Algorithm::BucketKruskal(cfg) => bucket::bucket_kruskal(&mut ctx, edges, cfg),
        Algorithm::SuperKruskal(cfg) => sample_sort::super_kruskal(&mut ctx, edges, cfg),
        Algorithm::Prim => prim::prim(&mut ctx, edges),
    }

    ctx.finish()
}
