#![allow(dead_code)]

use filter_kruskal::{solve_with, Algorithm, Edge, MstConfig, MstOutput};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// `m` random edges on `n` vertices with integer weights in `0..levels`.
/// Self-loops and parallel edges are allowed.
pub fn random_multigraph(n: usize, m: usize, levels: u32, seed: u64) -> Vec<Edge> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..m)
        .map(|_| {
            Edge::new(
                rng.gen_range(0..n as u32),
                rng.gen_range(0..n as u32),
                rng.gen_range(0..levels) as f32,
            )
        })
        .collect()
}

/// Random weights in `[0, 1)`, no self-loops.
pub fn random_uniform(n: usize, m: usize, seed: u64) -> Vec<Edge> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(m);
    while edges.len() < m {
        let a = rng.gen_range(0..n as u32);
        let b = rng.gen_range(0..n as u32);
        if a != b {
            edges.push(Edge::new(a, b, rng.gen::<f32>()));
        }
    }
    edges
}

/// A path 0-1-...-(n-1) of weight-1 edges followed by `extra` random heavier
/// edges, so the graph is connected and the tree cost is `n - 1`.
pub fn path_plus_noise(n: usize, extra: usize, seed: u64) -> Vec<Edge> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges: Vec<Edge> = (1..n as u32).map(|v| Edge::new(v - 1, v, 1.0)).collect();
    for _ in 0..extra {
        let a = rng.gen_range(0..n as u32);
        let b = rng.gen_range(0..n as u32);
        edges.push(Edge::new(a, b, rng.gen_range(2.0..100.0)));
    }
    edges
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

/// Edge count and cost of a minimum spanning forest by trying every edge
/// subset. Only for tiny graphs.
pub fn brute_force_msf(edges: &[Edge], n: usize) -> (usize, f64) {
    assert!(edges.len() <= 16, "brute force is exponential in m");
    let mut best: Option<(usize, f64)> = None;
    for mask in 0u32..(1 << edges.len()) {
        let mut parent: Vec<usize> = (0..n).collect();
        let mut count = 0;
        let mut cost = 0.0;
        let mut acyclic = true;
        for (i, e) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let ra = find(&mut parent, e.a as usize);
            let rb = find(&mut parent, e.b as usize);
            if ra == rb {
                acyclic = false;
                break;
            }
            parent[ra] = rb;
            count += 1;
            cost += e.w as f64;
        }
        if !acyclic {
            continue;
        }
        best = match best {
            Some((c, w)) if c > count || (c == count && w <= cost) => Some((c, w)),
            _ => Some((count, cost)),
        };
    }
    best.unwrap_or((0, 0.0))
}

/// Costs equal up to summation-order rounding.
pub fn assert_cost_eq(actual: f64, expected: f64, context: &str) {
    let tol = 1e-9 * actual.abs().max(expected.abs()).max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "{}: cost {} != expected {}",
        context,
        actual,
        expected
    );
}

/// Solve a copy of `edges`, collecting the tree.
pub fn run(edges: &[Edge], n: usize, algorithm: Algorithm, seed: u64) -> MstOutput {
    run_config(edges, n, &MstConfig::new(algorithm).with_seed(seed))
}

pub fn run_config(edges: &[Edge], n: usize, config: &MstConfig) -> MstOutput {
    let mut work = edges.to_vec();
    solve_with(&mut work, n, config)
        .unwrap_or_else(|e| panic!("{} failed: {}", config.algorithm, e))
}

/// Sorted `(a, b, weight bits)` keys: equal iff two edge lists are
/// permutations of each other.
pub fn edge_keys(edges: &[Edge]) -> Vec<(u32, u32, u32)> {
    let mut keys: Vec<_> = edges.iter().map(|e| (e.a, e.b, e.w.to_bits())).collect();
    keys.sort_unstable();
    keys
}
