//! In-place partitioning of an edge range around a pivot, optionally dropping
//! already-connected edges during the same scan.

use std::ops::Range;

use super::union_find::DisjointSet;
use crate::types::Edge;

/// Result of one partition scan. Ranges index into the partitioned slice.
///
/// Edges dropped by the filter sit in the gap before `right.start` (after
/// `left` for two-way, after `middle` for three-way) and are no longer part of
/// the problem. The slice as a whole is a permutation of its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Edges lighter than the pivot (two-way: not heavier, pivot edge excluded).
    pub left: Range<usize>,
    /// Two-way: the pivot edge alone. Three-way: every edge equal to the pivot.
    pub middle: Range<usize>,
    /// Edges heavier than the pivot.
    pub right: Range<usize>,
    /// Edges dropped because their endpoints were already connected.
    pub filtered: usize,
}

impl Split {
    /// Size of the larger sub-range that would be recursed into.
    #[inline]
    pub fn largest_child(&self) -> usize {
        self.left.len().max(self.right.len())
    }
}

/// Two-way split around the edge at `pivot`.
///
/// The pivot edge moves to index 0 and forms the middle. The rest is scanned:
/// `w <= pivot` goes left, `w > pivot` right. Equal weights therefore always
/// go left; the pivot edge itself being set aside guarantees both children
/// are strictly smaller than the range.
///
/// During the scan the slice is laid out as
/// `[pivot | left | filtered | unscanned | right]`; a light edge swaps with the
/// first filtered one, so the slice stays a permutation of its input.
pub fn two_way(edges: &mut [Edge], pivot: usize, mut filter: Option<&mut DisjointSet>) -> Split {
    debug_assert!(pivot < edges.len());
    edges.swap(0, pivot);
    let p = edges[0].w;

    let mut write = 1;
    let mut read = 1;
    let mut hi = edges.len();

    while read < hi {
        let e = edges[read];
        if let Some(set) = filter.as_deref_mut() {
            if set.compare(e.a, e.b) {
                read += 1;
                continue;
            }
        }
        if e.w <= p {
            edges.swap(write, read);
            write += 1;
            read += 1;
        } else {
            hi -= 1;
            edges.swap(read, hi);
        }
    }

    Split {
        left: 1..write,
        middle: 0..1,
        right: hi..edges.len(),
        filtered: hi - write,
    }
}

/// Three-way split around the weight of the edge at `pivot`.
///
/// Dutch-flag scan over `[less | equal | filtered | unscanned | greater]`.
/// A lighter edge rotates through the first equal and first filtered slots,
/// an equal edge swaps with the first filtered one, a heavier edge swaps to
/// the back.
pub fn three_way(edges: &mut [Edge], pivot: usize, mut filter: Option<&mut DisjointSet>) -> Split {
    debug_assert!(pivot < edges.len());
    let p = edges[pivot].w;

    let mut lt = 0;
    let mut eq = 0;
    let mut read = 0;
    let mut hi = edges.len();

    while read < hi {
        let e = edges[read];
        if let Some(set) = filter.as_deref_mut() {
            if set.compare(e.a, e.b) {
                read += 1;
                continue;
            }
        }
        if e.w < p {
            edges[read] = edges[eq];
            edges[eq] = edges[lt];
            edges[lt] = e;
            lt += 1;
            eq += 1;
            read += 1;
        } else if e.w > p {
            hi -= 1;
            edges.swap(read, hi);
        } else {
            edges.swap(eq, read);
            eq += 1;
            read += 1;
        }
    }

    Split {
        left: 0..lt,
        middle: lt..eq,
        right: hi..edges.len(),
        filtered: hi - eq,
    }
}
