use super::Phase;
use std::time::{Duration, Instant};

/// Timer that tracks elapsed time when timing is enabled.
pub struct Timer(Instant);

impl Timer {
    #[inline]
    pub fn start() -> Self {
        Self(Instant::now())
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Accumulated wall time per solver phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveTimings {
    pivot: Duration,
    partition: Duration,
    filter: Duration,
    base_case: Duration,
    classify: Duration,
}

impl SolveTimings {
    #[inline]
    pub fn add(&mut self, phase: Phase, d: Duration) {
        match phase {
            Phase::Pivot => self.pivot += d,
            Phase::Partition => self.partition += d,
            Phase::Filter => self.filter += d,
            Phase::BaseCase => self.base_case += d,
            Phase::Classify => self.classify += d,
        }
    }

    #[inline]
    pub fn get(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Pivot => self.pivot,
            Phase::Partition => self.partition,
            Phase::Filter => self.filter,
            Phase::BaseCase => self.base_case,
            Phase::Classify => self.classify,
        }
    }

    pub fn total(&self) -> Duration {
        self.pivot + self.partition + self.filter + self.base_case + self.classify
    }

    pub fn report(&self, algorithm: &str, n: usize, m: usize) {
        let total = self.total().as_secs_f64();
        let ms = |d: Duration| d.as_secs_f64() * 1000.0;
        let pct = |d: Duration| {
            if total > 0.0 {
                d.as_secs_f64() / total * 100.0
            } else {
                0.0
            }
        };

        eprintln!("timing {} n={} m={}", algorithm, n, m);
        eprintln!("  pivot:       {:7.1}ms ({:4.1}%)", ms(self.pivot), pct(self.pivot));
        eprintln!("  partition:   {:7.1}ms ({:4.1}%)", ms(self.partition), pct(self.partition));
        eprintln!("  filter:      {:7.1}ms ({:4.1}%)", ms(self.filter), pct(self.filter));
        eprintln!("  base_case:   {:7.1}ms ({:4.1}%)", ms(self.base_case), pct(self.base_case));
        eprintln!("  classify:    {:7.1}ms ({:4.1}%)", ms(self.classify), pct(self.classify));
        eprintln!("  total:       {:7.1}ms", total * 1000.0);
    }
}
