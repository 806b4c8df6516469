//! Monotonic time primitives for pulse timing and timeout bounds.
//!
//! `embedded-hal` 1.0 has no clock trait, so the ranger's timing needs are
//! expressed through [`MonotonicClock`] and the small [`ElapsedTimer`]
//! helper. The production implementation is
//! [`SystemClock`](crate::adapters::time::SystemClock).

/// Monotonic microsecond counter. Must never go backwards; wrap at
/// `u64::MAX` is beyond device lifetime.
pub trait MonotonicClock {
    fn now_us(&self) -> u64;
}

/// Stopwatch over a [`MonotonicClock`], equivalent to a hardware timer's
/// reset/start + elapsed read. The ranger keeps two of these per shot: one
/// measuring the echo pulse, one bounding the busy-wait.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimer {
    started_at_us: u64,
}

impl ElapsedTimer {
    pub fn start(clock: &impl MonotonicClock) -> Self {
        Self {
            started_at_us: clock.now_us(),
        }
    }

    pub fn elapsed_us(&self, clock: &impl MonotonicClock) -> u64 {
        clock.now_us().saturating_sub(self.started_at_us)
    }
}
