//! Filter-Kruskal: quicksort-style divide and conquer over the edge range,
//! using the disjoint set to drop edges that can no longer join two components.
//!
//! Per range:
//! 1. at or below the threshold, sort and scan (Kruskal base case);
//! 2. otherwise pick a pivot and partition, filtering during the scan if the
//!    caller asked for it;
//! 3. solve the light side (never re-filtered: nothing merged since the scan
//!    looked at it);
//! 4. scan the pivot edge(s);
//! 5. solve the heavy side, filtered according to [`FilterPolicy`].
//!
//! Every step returns as soon as `n - 1` edges are accepted.

use std::ops::Range;

use rand::Rng;

use super::kruskal::kruskal;
use super::partition::{self, Split};
use super::pivot::select_pivot;
use super::timing::{Phase, Timer};
use super::MstContext;
use crate::config::{FilterKruskalConfig, FilterPolicy, PartitionScheme, Recursion};
use crate::types::Edge;

/// Solve `edges` with the configured driver. Nothing in the range is assumed
/// filtered, and nothing is filtered before the first partition scan.
pub fn filter_kruskal<R: Rng>(
    ctx: &mut MstContext<R>,
    edges: &mut [Edge],
    cfg: &FilterKruskalConfig,
) {
    match cfg.recursion {
        Recursion::Recursive => solve_recursive(ctx, edges, cfg, false, 0),
        Recursion::Iterative => solve_iterative(ctx, edges, cfg, false, 0),
    }
}

/// Recursion depth past which the recursive driver continues on the explicit
/// stack. Only pivots that peel a few edges per level get here.
pub const MAX_RECURSION_DEPTH: usize = 512;

#[inline]
fn refilter(policy: FilterPolicy, mark: usize, accepted: usize) -> bool {
    match policy {
        FilterPolicy::Adaptive => accepted > mark,
        FilterPolicy::Eager => true,
        FilterPolicy::Off => false,
    }
}

/// Pivot selection plus one partition scan.
fn split_range<R: Rng>(
    ctx: &mut MstContext<R>,
    edges: &mut [Edge],
    cfg: &FilterKruskalConfig,
    filter: bool,
) -> Split {
    let t = Timer::start();
    let n = ctx.n();
    let pivot = select_pivot(&cfg.pivot, edges, n, &mut ctx.rng, &mut ctx.samples);
    ctx.timings.add(Phase::Pivot, t.elapsed());

    let t = Timer::start();
    let set = if filter && cfg.filter != FilterPolicy::Off {
        Some(&mut ctx.set)
    } else {
        None
    };
    let split = match cfg.partition {
        PartitionScheme::TwoWay => partition::two_way(edges, pivot, set),
        PartitionScheme::ThreeWay => partition::three_way(edges, pivot, set),
    };
    ctx.timings.add(Phase::Partition, t.elapsed());

    ctx.stats.partitions += 1;
    ctx.stats.filtered_edges += split.filtered;
    split
}

/// True if a child would be no more than one edge smaller than its parent.
#[inline]
fn is_degenerate(split: &Split, len: usize) -> bool {
    split.largest_child() + 1 >= len
}

/// Base case on every part of a split that made no progress. Left, middle and
/// right are already in weight order relative to each other.
fn fallback<R>(ctx: &mut MstContext<R>, edges: &mut [Edge], split: &Split) {
    ctx.stats.degenerate_fallbacks += 1;
    tracing::debug!(
        len = edges.len(),
        left = split.left.len(),
        right = split.right.len(),
        "degenerate pivot, sorting range"
    );
    kruskal(ctx, &mut edges[split.left.clone()], true);
    scan_middle(ctx, &edges[split.middle.clone()]);
    kruskal(ctx, &mut edges[split.right.clone()], true);
}

#[inline]
fn scan_middle<R>(ctx: &mut MstContext<R>, middle: &[Edge]) {
    for &e in middle {
        if ctx.is_complete() {
            break;
        }
        ctx.try_add(e);
    }
}

fn solve_recursive<R: Rng>(
    ctx: &mut MstContext<R>,
    edges: &mut [Edge],
    cfg: &FilterKruskalConfig,
    filter: bool,
    depth: usize,
) {
    if ctx.is_complete() || edges.is_empty() {
        return;
    }
    if depth >= MAX_RECURSION_DEPTH {
        ctx.stats.stack_switches += 1;
        tracing::debug!(depth, len = edges.len(), "recursion too deep, switching to work stack");
        solve_iterative(ctx, edges, cfg, filter, depth);
        return;
    }
    ctx.stats.max_depth = ctx.stats.max_depth.max(depth);

    if edges.len() <= cfg.threshold {
        kruskal(ctx, edges, true);
        return;
    }

    let split = split_range(ctx, edges, cfg, filter);
    if is_degenerate(&split, edges.len()) {
        fallback(ctx, edges, &split);
        return;
    }

    let mark = ctx.num_accepted();
    solve_recursive(ctx, &mut edges[split.left.clone()], cfg, false, depth + 1);
    scan_middle(ctx, &edges[split.middle.clone()]);
    let filter_right = refilter(cfg.filter, mark, ctx.num_accepted());
    solve_recursive(ctx, &mut edges[split.right], cfg, filter_right, depth + 1);
}

/// Work item for the explicit-stack driver. Ranges are absolute.
enum Task {
    Solve {
        range: Range<usize>,
        filter: bool,
        depth: usize,
    },
    Middle(Range<usize>),
    /// Heavy side; `mark` is the accepted count right after its partition scan.
    Right {
        range: Range<usize>,
        mark: usize,
        depth: usize,
    },
}

#[inline]
fn shift(r: Range<usize>, offset: usize) -> Range<usize> {
    r.start + offset..r.end + offset
}

/// Same visiting order, filter decisions and random draws as
/// [`solve_recursive`], with the call stack replaced by a `Vec`. `filter` and
/// `depth` describe the whole of `edges`.
fn solve_iterative<R: Rng>(
    ctx: &mut MstContext<R>,
    edges: &mut [Edge],
    cfg: &FilterKruskalConfig,
    filter: bool,
    depth: usize,
) {
    let mut stack = vec![Task::Solve {
        range: 0..edges.len(),
        filter,
        depth,
    }];

    while let Some(task) = stack.pop() {
        if ctx.is_complete() {
            break;
        }
        match task {
            Task::Solve {
                range,
                filter,
                depth,
            } => {
                if range.is_empty() {
                    continue;
                }
                ctx.stats.max_depth = ctx.stats.max_depth.max(depth);
                let offset = range.start;
                let sub = &mut edges[range];

                if sub.len() <= cfg.threshold {
                    kruskal(ctx, sub, true);
                    continue;
                }

                let split = split_range(ctx, sub, cfg, filter);
                if is_degenerate(&split, sub.len()) {
                    fallback(ctx, sub, &split);
                    continue;
                }

                // Pushed in reverse: left is popped first.
                stack.push(Task::Right {
                    range: shift(split.right, offset),
                    mark: ctx.num_accepted(),
                    depth: depth + 1,
                });
                stack.push(Task::Middle(shift(split.middle, offset)));
                stack.push(Task::Solve {
                    range: shift(split.left, offset),
                    filter: false,
                    depth: depth + 1,
                });
            }
            Task::Middle(range) => scan_middle(ctx, &edges[range]),
            Task::Right { range, mark, depth } => stack.push(Task::Solve {
                range,
                filter: refilter(cfg.filter, mark, ctx.num_accepted()),
                depth,
            }),
        }
    }
}
