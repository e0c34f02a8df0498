//! Random instance generators.

use glam::Vec2;
use kiddo::{ImmutableKdTree, SquaredEuclidean};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Edge;

/// Neighbours per point in the geometric graph are `ceil(factor * m / n)`.
/// Slightly below 2 because mutual neighbours produce the same edge twice.
pub const GEOMETRIC_DEGREE_FACTOR: f64 = 1.82;

/// Number of distinct weights in the duplicate-heavy generator.
pub const QUANTIZED_LEVELS: u32 = 16;

#[inline]
fn max_edges(n: usize) -> usize {
    let n = n as u64;
    (n * n.saturating_sub(1) / 2).min(usize::MAX as u64) as usize
}

/// Every pair `a < b` once, uniform weights in `[0, max_w)`.
pub fn complete_graph<R: Rng + ?Sized>(rng: &mut R, n: usize, max_w: f32) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(max_edges(n));
    for a in 0..n as u32 {
        for b in a + 1..n as u32 {
            edges.push(Edge::new(a, b, rng.gen::<f32>() * max_w));
        }
    }
    edges
}

/// Uniform random graph with about `m` distinct edges, weights uniform in
/// `[0, max_w)`.
///
/// Walks the upper triangle in row-major order, jumping ahead by geometric
/// gaps with success probability `m / (n(n-1)/2)`, so each pair is included
/// independently and no pair twice. Asking for at least every pair returns
/// the complete graph.
pub fn random_graph<R: Rng + ?Sized>(rng: &mut R, n: usize, m: usize, max_w: f32) -> Vec<Edge> {
    let maxm = max_edges(n);
    if n < 2 || m == 0 {
        return Vec::new();
    }
    if m >= maxm {
        return complete_graph(rng, n, max_w);
    }

    // Inverse log of the probability of skipping a pair.
    let ilogp = 1.0 / (1.0 - m as f64 / maxm as f64).ln();
    let mut edges = Vec::with_capacity(m + m / 1000 + 1);
    let (mut a, mut b) = (0usize, 0usize);

    'walk: loop {
        let p0 = 1.0 - rng.gen::<f64>();
        let skip = ((p0.ln() * ilogp) as usize).saturating_add(1).min(maxm);
        b += skip;
        while b >= n {
            a += 1;
            if a >= n - 1 {
                break 'walk;
            }
            b = b - n + a + 1;
        }
        edges.push(Edge::new(a as u32, b as u32, rng.gen::<f32>() * max_w));
    }
    edges
}

/// Random graph on vertices `0..n-1` with weights below `max_w / 2`, plus one
/// edge `(0, n-1)` of weight `max_w`. The heavy edge is the only one touching
/// the last vertex, so every spanning tree contains it.
pub fn random_graph_one_long<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    m: usize,
    max_w: f32,
) -> Vec<Edge> {
    if n < 2 {
        return Vec::new();
    }
    let mut edges = random_graph(rng, n - 1, m.saturating_sub(1), max_w / 2.0);
    edges.push(Edge::new(0, n as u32 - 1, max_w));
    edges
}

/// Uniform random graph whose weights are integers in `0..levels`, so most
/// weights repeat many times.
pub fn random_graph_quantized<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    m: usize,
    levels: u32,
) -> Vec<Edge> {
    let levels = levels.max(1);
    let mut edges = random_graph(rng, n, m, 1.0);
    for e in &mut edges {
        e.w = rng.gen_range(0..levels) as f32;
    }
    edges
}

/// Random points in `[0, max_coord)^2`, each joined to its nearest
/// neighbours, weighted by Euclidean distance.
///
/// Edges are normalized (`a < b`), deduplicated and shuffled. Asking for at
/// least every pair returns the complete Euclidean graph.
pub fn random_geometric_graph<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    m: usize,
    max_coord: f32,
) -> Vec<Edge> {
    if n < 2 || m == 0 {
        return Vec::new();
    }
    let points: Vec<Vec2> = (0..n)
        .map(|_| Vec2::new(rng.gen::<f32>() * max_coord, rng.gen::<f32>() * max_coord))
        .collect();

    if m >= max_edges(n) {
        let mut edges = Vec::with_capacity(max_edges(n));
        for (a, pa) in points.iter().enumerate() {
            for (b, pb) in points.iter().enumerate().skip(a + 1) {
                edges.push(Edge::new(a as u32, b as u32, pa.distance(*pb)));
            }
        }
        return edges;
    }

    let k = ((GEOMETRIC_DEGREE_FACTOR * m as f64 / n as f64).ceil() as usize).clamp(1, n - 1);
    let entries: Vec<[f32; 2]> = points.iter().map(|p| p.to_array()).collect();
    let tree: ImmutableKdTree<f32, 2> = ImmutableKdTree::new_from_slice(&entries);

    let mut edges = Vec::with_capacity(n * k);
    for (i, query) in entries.iter().enumerate() {
        // k + 1: the query point is its own nearest neighbour.
        for nearest in tree.nearest_n::<SquaredEuclidean>(query, k + 1) {
            let j = nearest.item as usize;
            if j == i {
                continue;
            }
            let w = points[i].distance(points[j]);
            edges.push(Edge::new(i as u32, j as u32, w).normalized());
        }
    }

    edges.sort_unstable_by(Edge::cmp_nodes);
    edges.dedup_by(|x, y| x.same_nodes(y));
    edges.shuffle(rng);
    edges
}
