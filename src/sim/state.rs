//! Level progression and race timing
//!
//! Time is never read here; callers pass the current wall-clock time in
//! seconds so the state stays deterministic under test.

use serde::{Deserialize, Serialize};

use crate::consts::LEVELS;

/// Current level, whether its timer is running, and when it started
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelState {
    /// 1-based
    pub level: u32,
    pub started: bool,
    /// Seconds, as reported by the clock at `start_level`
    pub level_start_time: f64,
}

impl Default for LevelState {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelState {
    pub fn new() -> Self {
        Self {
            level: 1,
            started: false,
            level_start_time: 0.0,
        }
    }

    /// Move to the next level; the timer stays stopped until `start_level`
    pub fn next_level(&mut self) {
        self.level += 1;
        self.started = false;
    }

    /// Back to level 1, not started
    pub fn reset(&mut self) {
        self.level = 1;
        self.started = false;
        self.level_start_time = 0.0;
    }

    /// True once the last level has been cleared
    pub fn is_finished(&self) -> bool {
        self.level > LEVELS
    }

    pub fn start_level(&mut self, now: f64) {
        self.started = true;
        self.level_start_time = now;
    }

    /// Whole seconds since the level started, 0 while not started.
    /// Halves round to even.
    pub fn elapsed(&self, now: f64) -> u64 {
        if !self.started {
            return 0;
        }
        (now - self.level_start_time).max(0.0).round_ties_even() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_is_level_one_unstarted() {
        let state = LevelState::new();
        assert_eq!(state.level, 1);
        assert!(!state.started);
        assert_eq!(state.elapsed(1234.0), 0);
    }

    #[test]
    fn test_elapsed_rounds_to_whole_seconds() {
        let mut state = LevelState::new();
        state.start_level(100.0);
        assert_eq!(state.elapsed(100.4), 0);
        assert_eq!(state.elapsed(101.6), 2);
        assert_eq!(state.elapsed(102.5), 2);
        assert_eq!(state.elapsed(103.5), 4);
    }

    #[test]
    fn test_elapsed_is_recomputed_each_query() {
        let mut state = LevelState::new();
        state.start_level(10.0);
        assert_eq!(state.elapsed(15.0), 5);
        assert_eq!(state.elapsed(20.0), 10);
        assert_eq!(state.elapsed(15.0), 5);
    }

    #[test]
    fn test_next_level_stops_timer() {
        let mut state = LevelState::new();
        state.start_level(5.0);
        state.next_level();
        assert_eq!(state.level, 2);
        assert!(!state.started);
        assert_eq!(state.elapsed(50.0), 0);
    }

    #[test]
    fn test_finished_after_last_level() {
        let mut state = LevelState::new();
        for _ in 1..LEVELS {
            state.next_level();
            assert!(!state.is_finished());
        }
        assert_eq!(state.level, 7);
        state.next_level();
        assert!(state.is_finished());
    }

    proptest! {
        #[test]
        fn prop_reset_always_returns_to_start(levels in 0u32..20, started in any::<bool>(), t in 0.0f64..1e6) {
            let mut state = LevelState::new();
            for _ in 0..levels {
                state.next_level();
            }
            if started {
                state.start_level(t);
            }
            state.reset();
            prop_assert_eq!(state.level, 1);
            prop_assert!(!state.started);
            prop_assert_eq!(state.elapsed(t + 100.0), 0);
        }

        #[test]
        fn prop_next_level_increments(level in 1u32..50) {
            let mut state = LevelState { level, started: true, level_start_time: 1.0 };
            state.next_level();
            prop_assert_eq!(state.level, level + 1);
            prop_assert!(!state.started);
            prop_assert_eq!(state.is_finished(), level + 1 > LEVELS);
        }
    }
}
