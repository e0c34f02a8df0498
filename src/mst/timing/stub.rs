use super::Phase;
use std::time::Duration;

/// Dummy timer when `timing` is disabled (zero-sized).
pub struct Timer;

impl Timer {
    #[inline(always)]
    pub fn start() -> Self {
        Self
    }

    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        Duration::ZERO
    }
}

/// Dummy phase totals when `timing` is disabled (zero-sized).
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveTimings;

impl SolveTimings {
    #[inline(always)]
    pub fn add(&mut self, _phase: Phase, _d: Duration) {}

    #[inline(always)]
    pub fn get(&self, _phase: Phase) -> Duration {
        Duration::ZERO
    }

    #[inline(always)]
    pub fn total(&self) -> Duration {
        Duration::ZERO
    }

    #[inline(always)]
    pub fn report(&self, _algorithm: &str, _n: usize, _m: usize) {}
}
