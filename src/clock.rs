//! Frame timing from a monotonic tick counter and its frequency.

use std::cell::Cell;
use std::time::Instant;

/// A monotonic counter that converts to seconds via `frequency()`.
pub trait TickSource {
    /// Current counter value.
    fn now(&self) -> u64;

    /// Ticks per second.
    fn frequency(&self) -> u64;
}

/// Nanosecond ticks from `std::time::Instant`.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTicks {
    origin: Instant,
}

impl MonotonicTicks {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MonotonicTicks {
    fn now(&self) -> u64 {
        // u64 nanoseconds covers ~584 years of uptime
        self.origin.elapsed().as_nanos() as u64
    }

    fn frequency(&self) -> u64 {
        1_000_000_000
    }
}

/// Deterministic ticks for headless runs: each read advances by `step`.
#[derive(Debug)]
pub struct FixedStepTicks {
    next: Cell<u64>,
    step: u64,
    frequency: u64,
}

impl FixedStepTicks {
    pub fn new(start: u64, step: u64, frequency: u64) -> Self {
        Self {
            next: Cell::new(start),
            step,
            frequency,
        }
    }
}

impl TickSource for FixedStepTicks {
    fn now(&self) -> u64 {
        let t = self.next.get();
        self.next.set(t.wrapping_add(self.step));
        t
    }

    fn frequency(&self) -> u64 {
        self.frequency
    }
}

/// Seconds between two tick samples.
///
/// A reading that went backwards is clamped to zero; a zero frequency
/// also yields zero.
pub fn delta_seconds(prev_tick: u64, tick: u64, frequency: u64) -> f64 {
    if frequency == 0 {
        tracing::warn!("tick frequency is zero, reporting dt = 0");
        return 0.0;
    }
    match tick.checked_sub(prev_tick) {
        Some(elapsed) => elapsed as f64 / frequency as f64,
        None => {
            tracing::warn!(prev_tick, tick, "non-monotonic tick, clamping dt to 0");
            0.0
        }
    }
}

/// Holds the last tick and turns each new sample into a delta time.
#[derive(Debug)]
pub struct Clock<T = MonotonicTicks> {
    source: T,
    last_tick: u64,
}

impl<T: TickSource> Clock<T> {
    /// Start timing from the source's current reading.
    pub fn new(source: T) -> Self {
        let last_tick = source.now();
        Self { source, last_tick }
    }

    /// Sample the counter, returning seconds since the previous sample.
    pub fn tick(&mut self) -> f64 {
        let now = self.source.now();
        let dt = delta_seconds(self.last_tick, now, self.source.frequency());
        self.last_tick = now;
        dt
    }

    pub fn last_tick(&self) -> u64 {
        self.last_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_from_ticks_and_frequency() {
        assert_eq!(delta_seconds(1000, 1100, 1000), 0.1);
        assert_eq!(delta_seconds(5, 5, 60), 0.0);
    }

    #[test]
    fn backwards_tick_clamps_to_zero() {
        assert_eq!(delta_seconds(1100, 1000, 1000), 0.0);
    }

    #[test]
    fn zero_frequency_is_zero_dt() {
        assert_eq!(delta_seconds(0, 100, 0), 0.0);
    }

    #[test]
    fn clock_advances_last_tick() {
        let mut clock = Clock::new(FixedStepTicks::new(1000, 100, 1000));
        assert_eq!(clock.last_tick(), 1000);
        assert_eq!(clock.tick(), 0.1);
        assert_eq!(clock.last_tick(), 1100);
        assert_eq!(clock.tick(), 0.1);
        assert_eq!(clock.last_tick(), 1200);
    }

    #[test]
    fn monotonic_ticks_never_go_backwards() {
        let mut clock = Clock::new(MonotonicTicks::new());
        let mut prev = clock.last_tick();
        for _ in 0..100 {
            let dt = clock.tick();
            assert!(dt >= 0.0);
            assert!(clock.last_tick() >= prev);
            prev = clock.last_tick();
        }
    }
}
