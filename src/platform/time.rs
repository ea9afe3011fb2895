//! Clocks and frame pacing

use std::cell::Cell;
use std::time::{Duration, Instant};

use super::{Clock, FrameLimiter};

/// Monotonic clock counting from construction
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Sleeps so consecutive `wait` calls are at least one frame apart
#[derive(Debug)]
pub struct FixedRateLimiter {
    frame: Duration,
    last: Option<Instant>,
}

impl FixedRateLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            last: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

impl FrameLimiter for FixedRateLimiter {
    fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.frame {
                std::thread::sleep(self.frame - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Limiter that never sleeps (tests, fast headless runs)
#[derive(Debug, Default)]
pub struct Unlimited;

impl FrameLimiter for Unlimited {
    fn wait(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(10.0);
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.now(), 10.75);
    }

    #[test]
    fn test_limiter_paces_ticks() {
        let mut limiter = FixedRateLimiter::new(100);
        assert_eq!(limiter.frame_duration(), Duration::from_millis(10));
        let start = Instant::now();
        for _ in 0..4 {
            limiter.wait();
        }
        // First wait is immediate, the next three each take a frame
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
