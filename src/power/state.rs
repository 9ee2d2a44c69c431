// src/power/state.rs
//! Playback state and progress snapshots.

use serde::Serialize;
use std::time::Duration;

/// Whether timed playback is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// Progress as shown next to the play controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub current_step: usize,
    pub max_iter: usize,
    pub state: RunState,
}

impl Progress {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.current_step >= self.max_iter
    }

    /// Fraction of `max_iter` reached, capped at 1.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.max_iter == 0 {
            return 1.0;
        }
        (self.current_step as f64 / self.max_iter as f64).min(1.0)
    }
}

/// Tick period for a playback speed given in iterations per second.
///
/// Non-positive or non-finite speeds fall back to one iteration per second.
#[must_use]
pub fn period_for(iter_speed: f64) -> Duration {
    if iter_speed.is_finite() && iter_speed > 0.0 {
        Duration::from_secs_f64(1.0 / iter_speed)
    } else {
        log::warn!("iteration speed {iter_speed} is not positive; using 1/s");
        Duration::from_secs(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_per_second_is_half_a_second() {
        assert_eq!(period_for(2.0), Duration::from_millis(500));
    }

    #[test]
    fn bad_speed_falls_back() {
        assert_eq!(period_for(0.0), Duration::from_secs(1));
        assert_eq!(period_for(f64::NAN), Duration::from_secs(1));
    }

    #[test]
    fn fraction_caps_at_one() {
        let p = Progress {
            current_step: 12,
            max_iter: 10,
            state: RunState::Paused,
        };
        assert!(p.is_completed());
        assert!((p.fraction() - 1.0).abs() < f64::EPSILON);
    }
}
