//! Core types for minimum spanning tree computation.

use bytemuck::{Pod, Zeroable};
use std::cmp::Ordering;

/// Vertex identifier. Valid ids are `0..n` for a graph with `n` vertices.
pub type VertexId = u32;

/// Edge weight. Weights must not be NaN; everything else is totally ordered.
pub type Weight = f32;

/// An undirected weighted edge.
///
/// `a` and `b` are stored as a fixed pair but carry no orientation. The struct
/// has a stable `#[repr(C)]` layout (12 bytes, no padding) so edge lists can be
/// reinterpreted as raw bytes for binary IO.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub w: Weight,
}

impl Edge {
    #[inline]
    pub const fn new(a: VertexId, b: VertexId, w: Weight) -> Self {
        Self { a, b, w }
    }

    /// Total order on weights (`f32::total_cmp`).
    #[inline]
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.w.total_cmp(&other.w)
    }

    /// Order by endpoints, used to deduplicate generated edge lists.
    #[inline]
    pub fn cmp_nodes(&self, other: &Self) -> Ordering {
        (self.a, self.b).cmp(&(other.a, other.b))
    }

    /// True if both edges connect the same endpoints in the same stored order.
    #[inline]
    pub fn same_nodes(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }

    /// Return the edge with `a <= b`.
    #[inline]
    pub fn normalized(self) -> Self {
        if self.a <= self.b {
            self
        } else {
            Self::new(self.b, self.a, self.w)
        }
    }

    /// Largest endpoint id, or `None` for an empty slice.
    pub fn max_vertex(edges: &[Edge]) -> Option<VertexId> {
        edges.iter().map(|e| e.a.max(e.b)).max()
    }
}

impl From<(VertexId, VertexId, Weight)> for Edge {
    #[inline]
    fn from((a, b, w): (VertexId, VertexId, Weight)) -> Self {
        Self::new(a, b, w)
    }
}

impl From<Edge> for (VertexId, VertexId, Weight) {
    #[inline]
    fn from(e: Edge) -> Self {
        (e.a, e.b, e.w)
    }
}

/// Sort edges by ascending weight.
#[inline]
pub fn sort_by_weight(edges: &mut [Edge]) {
    edges.sort_unstable_by(Edge::cmp_weight);
}

/// `f32` wrapper with a total order, for heaps keyed by weight.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OrdF32(f32);

impl OrdF32 {
    #[inline]
    pub(crate) fn new(v: f32) -> Self {
        OrdF32(v)
    }

    #[inline]
    pub(crate) fn get(self) -> f32 {
        self.0
    }
}

impl PartialEq for OrdF32 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrdF32 {}

impl PartialOrd for OrdF32 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF32 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
