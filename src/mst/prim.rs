//! Prim's algorithm with a lazy binary heap. Used to cross-check the
//! Kruskal family; grows one tree per component, so the result is a minimum
//! spanning forest like theirs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::MstContext;
use crate::graph::Adjacency;
use crate::types::{Edge, OrdF32};

pub fn prim<R>(ctx: &mut MstContext<R>, edges: &[Edge]) {
    let n = ctx.n();
    let adj = Adjacency::from_edges(n, edges);
    let mut visited = vec![false; n];
    // (weight, tree vertex, candidate)
    let mut heap: BinaryHeap<Reverse<(OrdF32, u32, u32)>> = BinaryHeap::new();

    for root in 0..n as u32 {
        if ctx.is_complete() {
            break;
        }
        if visited[root as usize] {
            continue;
        }
        visited[root as usize] = true;
        push_neighbors(&mut heap, &adj, &visited, root);

        while let Some(Reverse((w, from, to))) = heap.pop() {
            if visited[to as usize] {
                continue;
            }
            visited[to as usize] = true;
            ctx.try_add(Edge::new(from, to, w.get()));
            if ctx.is_complete() {
                return;
            }
            push_neighbors(&mut heap, &adj, &visited, to);
        }
    }
}

#[inline]
fn push_neighbors(
    heap: &mut BinaryHeap<Reverse<(OrdF32, u32, u32)>>,
    adj: &Adjacency,
    visited: &[bool],
    v: u32,
) {
    for &(u, w) in adj.neighbors(v) {
        if !visited[u as usize] {
            heap.push(Reverse((OrdF32::new(w), v, u)));
        }
    }
}
