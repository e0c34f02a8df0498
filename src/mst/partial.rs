//! Partial-MST seeding: the lightest edge incident to a vertex is a tree edge
//! (cut property), so those edges are accepted up front and everything they
//! make redundant is filtered before the main solver runs.
//!
//! "Lightest" is taken in `(weight, position)` order. With weights alone, two
//! vertices joined by several equal-weight paths could pick edges that close a
//! cycle; a strict total order makes every pick part of the same minimum
//! spanning forest.

use std::cmp::Ordering;

use super::timing::{Phase, Timer};
use super::MstContext;
use crate::types::Edge;

#[inline]
fn lighter(edges: &[Edge], i: usize, j: usize) -> bool {
    match edges[i].w.total_cmp(&edges[j].w) {
        Ordering::Less => true,
        Ordering::Equal => i < j,
        Ordering::Greater => false,
    }
}

/// Index of the lightest non-loop edge at every vertex, `None` for vertices
/// without one.
pub(crate) fn lightest_incident(edges: &[Edge], n: usize) -> Vec<Option<usize>> {
    let mut best: Vec<Option<usize>> = vec![None; n];
    for (i, e) in edges.iter().enumerate() {
        if e.a == e.b {
            continue;
        }
        for v in [e.a, e.b] {
            let slot = &mut best[v as usize];
            match *slot {
                Some(j) if !lighter(edges, i, j) => {}
                _ => *slot = Some(i),
            }
        }
    }
    best
}

/// Accept every vertex's lightest incident edge, then filter `edges`.
/// Returns the number of surviving edges, which end up in `edges[..len]`.
pub fn partial_mst<R>(ctx: &mut MstContext<R>, edges: &mut [Edge]) -> usize {
    if ctx.is_complete() || edges.is_empty() {
        return edges.len();
    }
    let t = Timer::start();
    let view: &[Edge] = edges;
    let mut picks: Vec<usize> = lightest_incident(view, ctx.n()).into_iter().flatten().collect();
    picks.sort_unstable_by(|&i, &j| {
        if lighter(view, i, j) {
            Ordering::Less
        } else if i == j {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    });
    picks.dedup();

    let before = ctx.num_accepted();
    for i in picks {
        if ctx.is_complete() {
            break;
        }
        ctx.try_add(edges[i]);
    }
    ctx.timings.add(Phase::BaseCase, t.elapsed());

    let len = ctx.filter(edges);
    tracing::debug!(
        accepted = ctx.num_accepted() - before,
        remaining = len,
        "partial mst seeding"
    );
    len
}
