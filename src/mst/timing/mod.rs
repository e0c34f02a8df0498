//! Zero-cost phase timing for the MST solvers.
//!
//! With the `timing` feature, solvers accumulate wall time per phase and
//! [`SolveTimings::report`] prints a breakdown to stderr. Without it, all
//! types are zero-sized and every method compiles away.

/// Phase of a solver run, used as the key for accumulated time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pivot or sample selection.
    Pivot,
    /// Partition scans, including filtering done during the scan.
    Partition,
    /// Standalone filter passes over a range.
    Filter,
    /// Sorting and scanning in the Kruskal base case.
    BaseCase,
    /// Splitter-tree or bucket classification and distribution.
    Classify,
}

#[cfg(feature = "timing")]
mod real;
#[cfg(not(feature = "timing"))]
mod stub;

#[cfg(feature = "timing")]
pub use real::*;
#[cfg(not(feature = "timing"))]
pub use stub::*;
