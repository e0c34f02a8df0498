//! Graph instances: random generators, adjacency view and edge-list files.

mod generate;
pub mod io;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::types::{Edge, VertexId, Weight};
use crate::MstError;

pub use generate::{
    complete_graph, random_geometric_graph, random_graph, random_graph_one_long,
    random_graph_quantized, GEOMETRIC_DEGREE_FACTOR, QUANTIZED_LEVELS,
};

/// Which generator [`generate`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// Uniform random graph with uniform weights in `[0, 1)`.
    Random,
    /// Random graph on `n - 1` vertices plus one heavy edge to the last vertex.
    OneLong,
    /// k-nearest-neighbour graph of random points, Euclidean weights.
    Geometric,
    /// Uniform random graph with weights from a handful of integer levels.
    Duplicates,
}

impl GraphKind {
    pub const ALL: [GraphKind; 4] = [
        GraphKind::Random,
        GraphKind::OneLong,
        GraphKind::Geometric,
        GraphKind::Duplicates,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GraphKind::Random => "randgraph",
            GraphKind::OneLong => "hardgraph",
            GraphKind::Geometric => "geomgraph",
            GraphKind::Duplicates => "dupgraph",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphKind {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "randgraph" | "random" => Ok(GraphKind::Random),
            "hardgraph" | "onelong" => Ok(GraphKind::OneLong),
            "geomgraph" | "geometric" => Ok(GraphKind::Geometric),
            "dupgraph" | "duplicates" => Ok(GraphKind::Duplicates),
            _ => Err(MstError::UnknownName {
                kind: "graph",
                name: s.to_string(),
            }),
        }
    }
}

/// Generate an instance with `n` vertices and about `m` edges.
pub fn generate<R: Rng + ?Sized>(kind: GraphKind, n: usize, m: usize, rng: &mut R) -> Vec<Edge> {
    match kind {
        GraphKind::Random => random_graph(rng, n, m, 1.0),
        GraphKind::OneLong => random_graph_one_long(rng, n, m, 1.0),
        GraphKind::Geometric => random_geometric_graph(rng, n, m, 1.0),
        GraphKind::Duplicates => random_graph_quantized(rng, n, m, QUANTIZED_LEVELS),
    }
}

/// Smallest vertex count that covers every endpoint (0 for no edges).
pub fn vertex_count(edges: &[Edge]) -> usize {
    Edge::max_vertex(edges).map_or(0, |v| v as usize + 1)
}

/// Compressed (CSR) undirected adjacency: every edge appears in the lists of
/// both endpoints.
#[derive(Debug, Clone)]
pub struct Adjacency {
    offsets: Vec<usize>,
    targets: Vec<(VertexId, Weight)>,
}

impl Adjacency {
    pub fn from_edges(n: usize, edges: &[Edge]) -> Self {
        let mut offsets = vec![0usize; n + 1];
        for e in edges {
            offsets[e.a as usize + 1] += 1;
            offsets[e.b as usize + 1] += 1;
        }
        for v in 0..n {
            offsets[v + 1] += offsets[v];
        }

        let mut fill = offsets.clone();
        let mut targets = vec![(0, 0.0); offsets[n]];
        for e in edges {
            targets[fill[e.a as usize]] = (e.b, e.w);
            fill[e.a as usize] += 1;
            targets[fill[e.b as usize]] = (e.a, e.w);
            fill[e.b as usize] += 1;
        }

        Self { offsets, targets }
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[(VertexId, Weight)] {
        let v = v as usize;
        &self.targets[self.offsets[v]..self.offsets[v + 1]]
    }

    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        let v = v as usize;
        self.offsets[v + 1] - self.offsets[v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_kind_names() {
        for kind in GraphKind::ALL {
            assert_eq!(kind.name().parse::<GraphKind>().unwrap(), kind);
        }
        assert!("torus".parse::<GraphKind>().is_err());
    }

    #[test]
    fn test_adjacency() {
        let edges = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0), Edge::new(2, 2, 3.0)];
        let adj = Adjacency::from_edges(4, &edges);
        assert_eq!(adj.num_vertices(), 4);
        assert_eq!(adj.neighbors(0), &[(1u32, 1.0f32)]);
        assert_eq!(adj.degree(1), 2);
        // Self loop listed twice at its vertex.
        assert_eq!(adj.degree(2), 3);
        assert!(adj.neighbors(3).is_empty());
    }

    #[test]
    fn test_generate_every_kind() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for kind in GraphKind::ALL {
            let edges = generate(kind, 100, 400, &mut rng);
            assert!(!edges.is_empty(), "{}", kind);
            assert!(vertex_count(&edges) <= 100, "{}", kind);
            assert!(edges.iter().all(|e| e.a != e.b && e.w >= 0.0), "{}", kind);
        }
    }

    #[test]
    fn test_vertex_count() {
        assert_eq!(vertex_count(&[]), 0);
        assert_eq!(vertex_count(&[Edge::new(3, 7, 0.0)]), 8);
    }
}
