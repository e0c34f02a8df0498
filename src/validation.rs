//! Validation of MST results against the input graph.
//!
//! Checks that the accepted edges come from the input, form a forest with
//! one tree per connected component, and that the cost matches plain Kruskal.
//! Useful for debugging, testing, and the benchmark's `--validate` mode.

use rustc_hash::FxHashMap;

use crate::mst::union_find::DisjointSet;
use crate::{sort_by_weight, Edge, MstOutput};

/// Relative tolerance when comparing costs summed in different orders.
const COST_RTOL: f64 = 1e-9;

/// Detailed validation report for an MST result.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Number of vertices.
    pub n: usize,
    /// Edges the solver reported accepting.
    pub num_edges: usize,
    /// Edges actually present in the output (0 in cost-only mode).
    pub collected_edges: usize,

    /// Connected components of the input graph.
    pub components: usize,
    /// `n - components`: size of every minimum spanning forest.
    pub expected_edges: usize,

    /// Output edges that close a cycle with earlier output edges.
    pub cycle_edges: usize,
    /// Output edges not present in the input (matched by endpoints and weight).
    pub foreign_edges: usize,

    /// Cost reported by the solver.
    pub reported_cost: f64,
    /// Sum of the collected edge weights (`NaN` in cost-only mode).
    pub recomputed_cost: f64,
    /// Cost from sorting Kruskal on the input.
    pub reference_cost: f64,
}

impl ValidationReport {
    fn cost_close(a: f64, b: f64) -> bool {
        a == b || (a - b).abs() <= COST_RTOL * a.abs().max(b.abs()).max(1.0)
    }

    fn has_edges(&self) -> bool {
        self.collected_edges > 0 || self.num_edges == 0
    }

    /// Result is a minimum spanning forest, up to rounding in the cost sum.
    pub fn is_valid(&self) -> bool {
        let count_ok = self.num_edges == self.expected_edges;
        let cost_ok = Self::cost_close(self.reported_cost, self.reference_cost);
        let edges_ok = !self.has_edges()
            || (self.collected_edges == self.num_edges
                && self.cycle_edges == 0
                && self.foreign_edges == 0
                && Self::cost_close(self.recomputed_cost, self.reported_cost));
        count_ok && cost_ok && edges_ok
    }

    /// Valid, edges collected, and all three costs bit-identical.
    pub fn is_perfect(&self) -> bool {
        self.is_valid()
            && self.has_edges()
            && self.reported_cost == self.reference_cost
            && (self.num_edges == 0 || self.recomputed_cost == self.reported_cost)
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_perfect() {
            return "Perfect".to_string();
        }

        let mut issues = Vec::new();
        if self.num_edges != self.expected_edges {
            issues.push(format!(
                "{} edges (expected {} for {} components)",
                self.num_edges, self.expected_edges, self.components
            ));
        }
        if self.has_edges() && self.collected_edges != self.num_edges {
            issues.push(format!(
                "{} edges collected but {} reported",
                self.collected_edges, self.num_edges
            ));
        }
        if self.cycle_edges > 0 {
            issues.push(format!("{} cycle edges", self.cycle_edges));
        }
        if self.foreign_edges > 0 {
            issues.push(format!("{} edges not in input", self.foreign_edges));
        }
        if !Self::cost_close(self.reported_cost, self.reference_cost) {
            issues.push(format!(
                "cost {} (reference {})",
                self.reported_cost, self.reference_cost
            ));
        }
        if self.has_edges()
            && self.num_edges > 0
            && !Self::cost_close(self.recomputed_cost, self.reported_cost)
        {
            issues.push(format!(
                "edge weights sum to {} but cost is {}",
                self.recomputed_cost, self.reported_cost
            ));
        }

        if issues.is_empty() {
            if self.has_edges() {
                "Valid (cost rounding differs)".to_string()
            } else {
                "Valid (cost only)".to_string()
            }
        } else {
            issues.join(", ")
        }
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ValidationReport {{ n={}, edges={}/{}, cost={}, {} }}",
            self.n,
            self.num_edges,
            self.expected_edges,
            self.reported_cost,
            self.summary()
        )
    }
}

/// Number of accepted edges and cost of a minimum spanning forest, by
/// sorting a copy of `edges` and scanning it.
pub fn reference_mst(edges: &[Edge], n: usize) -> (usize, f64) {
    let mut sorted = edges.to_vec();
    sort_by_weight(&mut sorted);
    let mut set = DisjointSet::new(n);
    let mut count = 0;
    let mut cost = 0.0;
    for e in &sorted {
        if count + 1 >= n {
            break;
        }
        if set.check_merge(e.a, e.b) {
            count += 1;
            cost += e.w as f64;
        }
    }
    (count, cost)
}

/// Multiset key: normalized endpoints and the weight's bit pattern.
#[inline]
fn edge_key(e: &Edge) -> (u32, u32, u32) {
    let e = e.normalized();
    (e.a, e.b, e.w.to_bits())
}

/// Validate `output` as a minimum spanning forest of `input` on `n` vertices.
pub fn validate(input: &[Edge], n: usize, output: &MstOutput) -> ValidationReport {
    let (expected_edges, reference_cost) = reference_mst(input, n);
    let components = n - expected_edges;

    let mut cycle_edges = 0;
    let mut foreign_edges = 0;
    let mut recomputed_cost = f64::NAN;

    if !output.edges.is_empty() {
        let mut available: FxHashMap<(u32, u32, u32), usize> = FxHashMap::default();
        for e in input {
            *available.entry(edge_key(e)).or_insert(0) += 1;
        }

        let mut set = DisjointSet::new(n);
        recomputed_cost = 0.0;
        for e in &output.edges {
            recomputed_cost += e.w as f64;
            match available.get_mut(&edge_key(e)) {
                Some(count) if *count > 0 => *count -= 1,
                _ => foreign_edges += 1,
            }
            let in_range = (e.a as usize) < n && (e.b as usize) < n;
            if !in_range || !set.check_merge(e.a, e.b) {
                cycle_edges += 1;
            }
        }
    }

    ValidationReport {
        n,
        num_edges: output.num_edges,
        collected_edges: output.edges.len(),
        components,
        expected_edges,
        cycle_edges,
        foreign_edges,
        reported_cost: output.cost,
        recomputed_cost,
        reference_cost,
    }
}
