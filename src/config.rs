//! Algorithm selection and tuning knobs.
//!
//! All Filter-Kruskal variants are one algorithm parameterized by
//! [`FilterKruskalConfig`]; the multi-way variants wrap it. None of the
//! numeric knobs affect the result, only the running time.

use std::fmt;
use std::str::FromStr;

use crate::MstError;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 31;

/// Ranges at or below this size are sorted directly.
pub const DEFAULT_THRESHOLD: usize = 32;

/// Multiplier in the skewed quantile `min(0.5, factor * n * log2(n) / m)`.
pub const DEFAULT_SKEW_FACTOR: f64 = 1.01;

/// How the pivot weight of a range is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PivotRule {
    /// The first edge of the range. Degrades on sorted input.
    First,
    /// One uniformly random edge.
    Random,
    /// Median of the first, middle and last edges.
    MedianOf3,
    /// Median of three random edges.
    RandomMedianOf3,
    /// Sort `max(sqrt(len), 1)` random edges and take the given quantile.
    RootK(Quantile),
}

/// Quantile of the root-k sample used as pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantile {
    Median,
    /// Fixed fraction in `[0, 1]`.
    Fixed(f64),
    /// `min(0.5, factor * n * log2(n) / m)` for `n` vertices and a range of
    /// `m` edges. Keeps the light side close to the expected number of
    /// tree edges when `m` is much larger than `n`.
    Skewed { factor: f64 },
}

impl Quantile {
    /// Resolve to a fraction in `[0, 1]` for a range of `m` edges.
    pub fn resolve(&self, n: usize, m: usize) -> f64 {
        match *self {
            Quantile::Median => 0.5,
            Quantile::Fixed(q) => q.clamp(0.0, 1.0),
            Quantile::Skewed { factor } => {
                if m == 0 || n < 2 {
                    return 0.5;
                }
                let n = n as f64;
                (factor * n * n.log2() / m as f64).clamp(0.0, 0.5)
            }
        }
    }
}

/// Number of parts a range is split into around the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionScheme {
    /// `w <= pivot` and `w > pivot`; the pivot edge itself is a singleton.
    TwoWay,
    /// `w < pivot`, `w == pivot` and `w > pivot`. Suited to duplicate-heavy weights.
    ThreeWay,
}

/// When the heavy side of a split is filtered again before it is solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Only if an edge was accepted after the partition scan that last saw it.
    Adaptive,
    /// Always.
    Eager,
    /// Never; `check_merge` alone rejects cycle edges.
    Off,
}

/// Driver for the Filter-Kruskal divide and conquer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recursion {
    /// Call stack. Ranges deeper than
    /// [`MAX_RECURSION_DEPTH`](crate::mst::filter_kruskal::MAX_RECURSION_DEPTH)
    /// continue on the explicit stack, so pivots that only peel a few edges
    /// per level cannot overflow it.
    Recursive,
    /// Explicit work stack. Visits ranges in the same order as `Recursive`.
    Iterative,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterKruskalConfig {
    /// Ranges of at most this many edges go to the sorting base case.
    pub threshold: usize,
    pub pivot: PivotRule,
    pub partition: PartitionScheme,
    pub filter: FilterPolicy,
    pub recursion: Recursion,
}

impl Default for FilterKruskalConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            pivot: PivotRule::Random,
            partition: PartitionScheme::TwoWay,
            filter: FilterPolicy::Adaptive,
            recursion: Recursion::Recursive,
        }
    }
}

/// Super-kruskal: sample-sort style classification into `2^log_buckets` buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSortConfig {
    /// Depth of the splitter tree, `1..=8`.
    pub log_buckets: u32,
    /// Buckets of at most this many edges are sorted directly.
    pub base_case: usize,
}

impl SampleSortConfig {
    pub const MAX_LOG_BUCKETS: u32 = 8;

    #[inline]
    pub fn log_buckets(&self) -> u32 {
        self.log_buckets.clamp(1, Self::MAX_LOG_BUCKETS)
    }

    #[inline]
    pub fn num_buckets(&self) -> usize {
        1 << self.log_buckets()
    }
}

impl Default for SampleSortConfig {
    fn default() -> Self {
        Self {
            log_buckets: 8,
            base_case: 1024,
        }
    }
}

/// Bucket-kruskal: equal-width weight intervals, each solved with Filter-Kruskal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketConfig {
    pub num_buckets: usize,
    pub base_case: usize,
    pub inner: FilterKruskalConfig,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            num_buckets: 256,
            base_case: 1024,
            inner: FilterKruskalConfig::default(),
        }
    }
}

/// Top-level MST algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Algorithm {
    /// Sort everything, then scan.
    Kruskal,
    FilterKruskal(FilterKruskalConfig),
    BucketKruskal(BucketConfig),
    SuperKruskal(SampleSortConfig),
    /// Binary-heap Prim over an adjacency list. Not part of the Filter-Kruskal family.
    Prim,
}

impl Algorithm {
    /// Names accepted by [`FromStr`].
    pub const NAMES: &'static [&'static str] = &[
        "kruskal",
        "filterkruskal",
        "filterkruskal3",
        "filterkruskalskewed",
        "filterkruskaliter",
        "bucketkruskal",
        "superkruskal",
        "prim",
    ];

    /// Two-way Filter-Kruskal with a random pivot.
    pub fn filter_kruskal() -> Self {
        Algorithm::FilterKruskal(FilterKruskalConfig::default())
    }

    /// Duplicate-aware three-way Filter-Kruskal.
    pub fn three_way() -> Self {
        Algorithm::FilterKruskal(FilterKruskalConfig {
            partition: PartitionScheme::ThreeWay,
            ..Default::default()
        })
    }

    /// Root-k sampled pivot at the skewed quantile.
    pub fn skewed(factor: f64) -> Self {
        Algorithm::FilterKruskal(FilterKruskalConfig {
            pivot: PivotRule::RootK(Quantile::Skewed { factor }),
            ..Default::default()
        })
    }

    /// Three-way Filter-Kruskal driven by an explicit stack.
    pub fn iterative() -> Self {
        Algorithm::FilterKruskal(FilterKruskalConfig {
            partition: PartitionScheme::ThreeWay,
            recursion: Recursion::Iterative,
            ..Default::default()
        })
    }

    pub fn bucket() -> Self {
        Algorithm::BucketKruskal(BucketConfig::default())
    }

    pub fn super_kruskal() -> Self {
        Algorithm::SuperKruskal(SampleSortConfig::default())
    }

    /// Every named algorithm, in [`Algorithm::NAMES`] order.
    pub fn all() -> Vec<Algorithm> {
        vec![
            Algorithm::Kruskal,
            Algorithm::filter_kruskal(),
            Algorithm::three_way(),
            Algorithm::skewed(DEFAULT_SKEW_FACTOR),
            Algorithm::iterative(),
            Algorithm::bucket(),
            Algorithm::super_kruskal(),
            Algorithm::Prim,
        ]
    }

    /// Short name, matching [`Algorithm::NAMES`] for the named presets.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Kruskal => "kruskal",
            Algorithm::FilterKruskal(cfg) => {
                if let PivotRule::RootK(Quantile::Skewed { .. }) = cfg.pivot {
                    "filterkruskalskewed"
                } else if cfg.recursion == Recursion::Iterative {
                    "filterkruskaliter"
                } else if cfg.partition == PartitionScheme::ThreeWay {
                    "filterkruskal3"
                } else {
                    "filterkruskal"
                }
            }
            Algorithm::BucketKruskal(_) => "bucketkruskal",
            Algorithm::SuperKruskal(_) => "superkruskal",
            Algorithm::Prim => "prim",
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::filter_kruskal()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Algorithm::Kruskal),
            "filterkruskal" | "filterkruskalrec" => Ok(Algorithm::filter_kruskal()),
            "filterkruskal3" | "filterkruskalrec2" => Ok(Algorithm::three_way()),
            "filterkruskalskewed" => Ok(Algorithm::skewed(DEFAULT_SKEW_FACTOR)),
            "filterkruskaliter" => Ok(Algorithm::iterative()),
            "bucketkruskal" => Ok(Algorithm::bucket()),
            "superkruskal" => Ok(Algorithm::super_kruskal()),
            "prim" => Ok(Algorithm::Prim),
            _ => Err(MstError::UnknownName {
                kind: "algorithm",
                name: s.to_string(),
            }),
        }
    }
}

fn unknown(kind: &'static str, s: &str) -> MstError {
    MstError::UnknownName {
        kind,
        name: s.to_string(),
    }
}

impl FromStr for PivotRule {
    type Err = MstError;

    /// `first`, `random`, `median3`, `randommedian3`, `rootk`, `rootk:<q>`,
    /// `skewed` or `skewed:<factor>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (head, arg) = match lower.split_once(':') {
            Some((h, a)) => (h, Some(a)),
            None => (lower.as_str(), None),
        };
        let number = |a: &str| a.parse::<f64>().map_err(|_| unknown("pivot rule", s));
        match (head, arg) {
            ("first", None) => Ok(PivotRule::First),
            ("random", None) => Ok(PivotRule::Random),
            ("median3", None) => Ok(PivotRule::MedianOf3),
            ("randommedian3", None) => Ok(PivotRule::RandomMedianOf3),
            ("rootk", None) => Ok(PivotRule::RootK(Quantile::Median)),
            ("rootk", Some(q)) => Ok(PivotRule::RootK(Quantile::Fixed(number(q)?))),
            ("skewed", None) => Ok(PivotRule::RootK(Quantile::Skewed {
                factor: DEFAULT_SKEW_FACTOR,
            })),
            ("skewed", Some(f)) => Ok(PivotRule::RootK(Quantile::Skewed { factor: number(f)? })),
            _ => Err(unknown("pivot rule", s)),
        }
    }
}

impl FromStr for PartitionScheme {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2" | "twoway" => Ok(PartitionScheme::TwoWay),
            "3" | "threeway" => Ok(PartitionScheme::ThreeWay),
            _ => Err(unknown("partition scheme", s)),
        }
    }
}

impl FromStr for FilterPolicy {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adaptive" => Ok(FilterPolicy::Adaptive),
            "eager" => Ok(FilterPolicy::Eager),
            "off" => Ok(FilterPolicy::Off),
            _ => Err(unknown("filter policy", s)),
        }
    }
}

impl FromStr for Recursion {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" | "rec" => Ok(Recursion::Recursive),
            "iterative" | "iter" => Ok(Recursion::Iterative),
            _ => Err(unknown("recursion", s)),
        }
    }
}

/// Full configuration for [`crate::solve_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct MstConfig {
    pub algorithm: Algorithm,
    /// Seed for pivot and sample selection. Same seed, same input: same result.
    pub seed: u64,
    /// Keep the accepted edges. When false only the cost and count are kept.
    pub collect_edges: bool,
    /// Seed the forest with every vertex's lightest incident edge and filter
    /// before running the algorithm. Ignored by [`Algorithm::Prim`].
    pub partial_mst: bool,
}

impl MstConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn cost_only(mut self) -> Self {
        self.collect_edges = false;
        self
    }

    pub fn with_partial_mst(mut self, enabled: bool) -> Self {
        self.partial_mst = enabled;
        self
    }
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            seed: DEFAULT_SEED,
            collect_edges: true,
            partial_mst: false,
        }
    }
}
