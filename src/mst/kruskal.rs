//! Kruskal base case, the accepted-edge accumulator and the standalone filter pass.

use super::timing::{Phase, Timer};
use super::union_find::DisjointSet;
use super::MstContext;
use crate::types::{sort_by_weight, Edge};

/// Edges accepted so far, plus their count and total weight.
///
/// At most `n - 1` edges are ever accepted; once that many are in,
/// [`SpanningForest::is_complete`] turns true and every solver stops.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    collect: bool,
    len: usize,
    cost: f64,
    target: usize,
}

impl SpanningForest {
    pub fn new(n: usize, collect: bool) -> Self {
        let target = n.saturating_sub(1);
        Self {
            edges: if collect {
                Vec::with_capacity(target)
            } else {
                Vec::new()
            },
            collect,
            len: 0,
            cost: 0.0,
            target,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.len >= self.target
    }

    /// Accepted edges in acceptance order (empty in cost-only mode).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Accept `e` if its endpoints are in different components.
    #[inline]
    pub fn try_add(&mut self, set: &mut DisjointSet, e: Edge) -> bool {
        debug_assert!(!self.is_complete());
        if !set.check_merge(e.a, e.b) {
            return false;
        }
        self.len += 1;
        self.cost += e.w as f64;
        if self.collect {
            self.edges.push(e);
        }
        true
    }

    pub(crate) fn into_parts(self) -> (Vec<Edge>, usize, f64) {
        (self.edges, self.len, self.cost)
    }
}

/// Kruskal on one range: optionally sort by weight, then scan ascending and
/// accept every edge that joins two components, stopping at `n - 1` edges.
pub fn kruskal<R>(ctx: &mut MstContext<R>, edges: &mut [Edge], sort: bool) {
    if ctx.is_complete() || edges.is_empty() {
        return;
    }
    let t = Timer::start();
    ctx.stats.base_cases += 1;
    ctx.stats.base_case_edges += edges.len();

    if sort {
        sort_by_weight(edges);
    }
    for &e in edges.iter() {
        if ctx.try_add(e) && ctx.is_complete() {
            break;
        }
    }
    ctx.timings.add(Phase::BaseCase, t.elapsed());
}

/// Drop every edge whose endpoints are already connected.
///
/// Dropped edges are swapped to the tail, so survivors end up in
/// `edges[..len]` in arbitrary order and the slice stays a permutation.
/// Returns the new length.
pub fn filter_all(set: &mut DisjointSet, edges: &mut [Edge]) -> usize {
    let mut i = 0;
    let mut end = edges.len();
    while i < end {
        let e = edges[i];
        if set.compare(e.a, e.b) {
            end -= 1;
            edges.swap(i, end);
        } else {
            i += 1;
        }
    }
    end
}
