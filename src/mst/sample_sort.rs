//! Super-kruskal: Filter-Kruskal with a sample-sort style multi-way split.
//!
//! A random sample of the range is sorted and turned into a perfectly
//! balanced splitter tree of depth `log_buckets`. Every edge is classified by
//! walking that tree (`log_buckets` branch-free comparisons), then distributed
//! into an auxiliary buffer bucket by bucket. Buckets are solved in weight
//! order; each one is filtered first if an edge was accepted since the range
//! was classified, and most buckets of a dense graph are filtered away before
//! they are ever sorted.

use rand::Rng;

use super::kruskal::kruskal;
use super::timing::{Phase, Timer};
use super::MstContext;
use crate::config::SampleSortConfig;
use crate::types::Edge;

/// Samples drawn per bucket for a range of `n` edges:
/// `max(sqrt(n / (2 * buckets * (log_buckets + 4))), 1)`.
pub fn oversampling_factor(n: usize, log_buckets: u32) -> usize {
    let buckets = (1usize << log_buckets) as f64;
    let r = (n as f64 / (2.0 * buckets * (log_buckets as f64 + 4.0))).sqrt();
    (r as usize).max(1)
}

/// Splitter tree in implicit (Eytzinger) layout: node `i` has children
/// `2i` and `2i + 1`, the root is node 1 and node 0 is unused.
pub(crate) struct Classifier {
    tree: Vec<f32>,
    log_buckets: u32,
}

impl Classifier {
    /// Build from a sorted, non-empty sample. The `2^log_buckets - 1` splitters
    /// are equidistant sample elements.
    pub(crate) fn new(sorted_sample: &[f32], log_buckets: u32) -> Self {
        debug_assert!(!sorted_sample.is_empty());
        let buckets = 1usize << log_buckets;
        let s = sorted_sample.len();
        let splitters: Vec<f32> = (1..buckets).map(|j| sorted_sample[j * s / buckets]).collect();

        let mut tree = vec![0.0; buckets];
        Self::build(&mut tree, &splitters, 1);
        Self { tree, log_buckets }
    }

    fn build(tree: &mut [f32], sorted: &[f32], pos: usize) {
        let mid = sorted.len() / 2;
        tree[pos] = sorted[mid];
        if 2 * pos < tree.len() {
            Self::build(tree, &sorted[..mid], 2 * pos);
            Self::build(tree, &sorted[mid + 1..], 2 * pos + 1);
        }
    }

    #[inline]
    pub(crate) fn num_buckets(&self) -> usize {
        self.tree.len()
    }

    /// Bucket of weight `w`. A weight equal to a splitter goes left.
    #[inline]
    pub(crate) fn find_bucket(&self, w: f32) -> usize {
        let mut i = 1;
        for _ in 0..self.log_buckets {
            i = 2 * i + (self.tree[i] < w) as usize;
        }
        i - self.tree.len()
    }

    /// Write the bucket of every edge to `bucket_of` and return bucket sizes.
    pub(crate) fn classify(&self, edges: &[Edge], bucket_of: &mut [u8]) -> Vec<usize> {
        debug_assert_eq!(edges.len(), bucket_of.len());
        let mut sizes = vec![0usize; self.num_buckets()];
        for (e, out) in edges.iter().zip(bucket_of.iter_mut()) {
            let b = self.find_bucket(e.w);
            *out = b as u8;
            sizes[b] += 1;
        }
        sizes
    }
}

/// Stable scatter of `edges` into `out` by bucket. `sizes` becomes the
/// exclusive end offset of every bucket.
pub(crate) fn distribute(edges: &[Edge], bucket_of: &[u8], sizes: &mut [usize], out: &mut [Edge]) {
    let mut sum = 0;
    for s in sizes.iter_mut() {
        let size = *s;
        *s = sum;
        sum += size;
    }
    for (&e, &b) in edges.iter().zip(bucket_of) {
        let slot = &mut sizes[b as usize];
        out[*slot] = e;
        *slot += 1;
    }
}

/// Solve `edges` with super-kruskal.
pub fn super_kruskal<R: Rng>(ctx: &mut MstContext<R>, edges: &mut [Edge], cfg: &SampleSortConfig) {
    if edges.len() < cfg.base_case.max(1) {
        kruskal(ctx, edges, true);
        return;
    }
    let mut aux = vec![Edge::default(); edges.len()];
    let mut bucket_of = vec![0u8; edges.len()];
    sample_sort(ctx, edges, &mut aux, &mut bucket_of, cfg, 0);
}

/// Sample of `size` weights drawn without replacement by swapping into the
/// suffix of `edges`, returned sorted.
fn draw_sample<R: Rng>(rng: &mut R, edges: &mut [Edge], size: usize) -> Vec<f32> {
    let n = edges.len();
    let mut sample = Vec::with_capacity(size);
    for i in 0..size {
        let end = n - i;
        let j = rng.gen_range(0..end);
        edges.swap(j, end - 1);
        sample.push(edges[end - 1].w);
    }
    sample.sort_unstable_by(f32::total_cmp);
    sample
}

/// One level: classify `edges` into `aux`, then solve bucket by bucket.
/// A recursive call on a bucket swaps the roles of the two buffers. On return
/// `edges` is a permutation of what it held on entry.
fn sample_sort<R: Rng>(
    ctx: &mut MstContext<R>,
    edges: &mut [Edge],
    aux: &mut [Edge],
    bucket_of: &mut [u8],
    cfg: &SampleSortConfig,
    depth: usize,
) {
    let n = edges.len();
    if n == 0 || ctx.is_complete() {
        return;
    }
    ctx.stats.max_depth = ctx.stats.max_depth.max(depth);
    let mark = ctx.num_accepted();
    let log_buckets = cfg.log_buckets();

    let t = Timer::start();
    let size = (oversampling_factor(n, log_buckets) * cfg.num_buckets()).min(n);
    let sample = draw_sample(&mut ctx.rng, edges, size);
    ctx.timings.add(Phase::Pivot, t.elapsed());

    if sample[0] == sample[size - 1] {
        // No usable splitters; the range is (mostly) one weight.
        tracing::debug!(len = n, weight = sample[0], "constant sample, sorting range");
        ctx.stats.degenerate_fallbacks += 1;
        kruskal(ctx, edges, true);
        return;
    }

    let t = Timer::start();
    let classifier = Classifier::new(&sample, log_buckets);
    let mut ends = classifier.classify(edges, bucket_of);
    distribute(edges, bucket_of, &mut ends, aux);
    ctx.timings.add(Phase::Classify, t.elapsed());
    ctx.stats.partitions += 1;

    let mut start = 0;
    for &end in &ends {
        if ctx.is_complete() {
            break;
        }
        let len = if ctx.num_accepted() > mark {
            ctx.filter(&mut aux[start..end])
        } else {
            end - start
        };
        let bucket = start..start + len;
        if len > 0 {
            if len <= cfg.base_case || n / len < 2 {
                kruskal(ctx, &mut aux[bucket], true);
            } else {
                sample_sort(
                    ctx,
                    &mut aux[bucket.clone()],
                    &mut edges[bucket.clone()],
                    &mut bucket_of[bucket],
                    cfg,
                    depth + 1,
                );
            }
        }
        start = end;
    }

    // Buckets were solved in `aux`, and deeper levels used `edges` as scratch.
    edges.copy_from_slice(aux);
}
