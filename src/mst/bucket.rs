//! Bucket-kruskal: one multi-way split on equal-width weight intervals, each
//! bucket then solved by Filter-Kruskal.

use rand::Rng;

use super::filter_kruskal::filter_kruskal;
use super::kruskal::kruskal;
use super::timing::{Phase, Timer};
use super::MstContext;
use crate::config::BucketConfig;
use crate::types::Edge;

/// Smallest and largest weight, `None` for an empty slice.
fn weight_range(edges: &[Edge]) -> Option<(f32, f32)> {
    let first = edges.first()?.w;
    Some(
        edges
            .iter()
            .fold((first, first), |(lo, hi), e| (lo.min(e.w), hi.max(e.w))),
    )
}

pub fn bucket_kruskal<R: Rng>(ctx: &mut MstContext<R>, edges: &mut [Edge], cfg: &BucketConfig) {
    let Some((min, max)) = weight_range(edges) else {
        return;
    };
    let num_buckets = cfg.num_buckets.max(1);
    if edges.len() <= cfg.base_case || max <= min || !(max - min).is_finite() {
        kruskal(ctx, edges, true);
        return;
    }

    let t = Timer::start();
    let step = (max as f64 - min as f64) / num_buckets as f64;
    let bucket = |w: f32| (((w as f64 - min as f64) / step) as usize).min(num_buckets - 1);

    let mut ends = vec![0usize; num_buckets];
    for e in edges.iter() {
        ends[bucket(e.w)] += 1;
    }
    let mut sum = 0;
    for s in ends.iter_mut() {
        let size = *s;
        *s = sum;
        sum += size;
    }
    let mut out = vec![Edge::default(); edges.len()];
    for &e in edges.iter() {
        let slot = &mut ends[bucket(e.w)];
        out[*slot] = e;
        *slot += 1;
    }
    ctx.timings.add(Phase::Classify, t.elapsed());
    ctx.stats.partitions += 1;
    tracing::trace!(len = edges.len(), num_buckets, step, "weight buckets");

    let mark = ctx.num_accepted();
    let mut start = 0;
    for &end in &ends {
        if ctx.is_complete() {
            break;
        }
        let len = if ctx.num_accepted() > mark {
            ctx.filter(&mut out[start..end])
        } else {
            end - start
        };
        filter_kruskal(ctx, &mut out[start..start + len], &cfg.inner);
        start = end;
    }
}
