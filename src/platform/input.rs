//! Input sources that need no keyboard

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::InputSource;
use crate::sim::{Controls, TickInput};

/// Idle/demo driver: mostly throttle, wandering steering.
///
/// Presses "start" every tick so levels begin as soon as they are offered.
#[derive(Debug, Clone)]
pub struct IdleDriver {
    rng: Pcg32,
    /// Current steering intent and how many more ticks to hold it
    steer: Option<bool>,
    hold: u32,
}

impl IdleDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            steer: None,
            hold: 0,
        }
    }
}

impl InputSource for IdleDriver {
    fn poll(&mut self) -> TickInput {
        if self.hold == 0 {
            self.steer = match self.rng.random_range(0..4) {
                0 => Some(true),
                1 => Some(false),
                _ => None,
            };
            self.hold = self.rng.random_range(5..40);
        }
        self.hold -= 1;

        let throttle = self.rng.random_bool(0.85);
        let brake = !throttle && self.rng.random_bool(0.2);

        TickInput {
            controls: Controls {
                left: self.steer == Some(true),
                right: self.steer == Some(false),
                throttle,
                brake,
            },
            start: true,
            quit: false,
        }
    }
}

/// Replays a fixed list of inputs, then requests quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.queue.pop_front().unwrap_or(TickInput {
            quit: true,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_driver_is_deterministic() {
        let mut a = IdleDriver::new(42);
        let mut b = IdleDriver::new(42);
        for _ in 0..200 {
            let (x, y) = (a.poll(), b.poll());
            assert_eq!(x.controls, y.controls);
            assert!(x.start && !x.quit);
        }
    }

    #[test]
    fn test_idle_driver_never_steers_both_ways() {
        let mut driver = IdleDriver::new(7);
        let mut throttled = 0;
        for _ in 0..500 {
            let input = driver.poll();
            assert!(!(input.controls.left && input.controls.right));
            assert!(!(input.controls.throttle && input.controls.brake));
            throttled += usize::from(input.controls.throttle);
        }
        assert!(throttled > 250);
    }

    #[test]
    fn test_scripted_input_quits_when_exhausted() {
        let mut input = ScriptedInput::new([TickInput {
            start: true,
            ..Default::default()
        }]);
        assert!(input.poll().start);
        assert!(input.poll().quit);
        assert!(input.poll().quit);
    }
}
