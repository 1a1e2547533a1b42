//! Smoothed animation intensity.
//!
//! While the interviewer speaks, energy chases a target that oscillates with
//! time plus a little noise. Otherwise it decays geometrically and snaps to
//! zero once it drops below [`ENERGY_FLOOR`], so a silent orb always comes to
//! rest within [`crate::consts::ENERGY_SETTLE_FRAMES`] frames.

#[cfg(test)]
#[path = "energy_test.rs"]
mod energy_test;

use crate::consts::{ENERGY_DECAY, ENERGY_FLOOR, ENERGY_SMOOTHING};

/// Intensity scalar in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Energy {
    level: f64,
}

impl Energy {
    #[must_use]
    pub fn level(self) -> f64 {
        self.level
    }

    /// True once a silent orb has fully decayed.
    #[must_use]
    pub fn is_settled(self) -> bool {
        self.level == 0.0
    }

    /// Target level while speaking at simulation time `time`.
    ///
    /// `jitter` is a uniform sample in `[0, 1)`; out-of-range input is clamped.
    #[must_use]
    pub fn speaking_target(time: f64, jitter: f64) -> f64 {
        0.5 + (time * 4.0).sin() * 0.2 + jitter.clamp(0.0, 1.0) * 0.3
    }

    /// Advance one frame and return the new level.
    pub fn step(&mut self, speaking: bool, time: f64, jitter: f64) -> f64 {
        if speaking {
            let target = Self::speaking_target(time, jitter);
            self.level += (target - self.level) * ENERGY_SMOOTHING;
        } else {
            self.level *= ENERGY_DECAY;
            if self.level < ENERGY_FLOOR {
                self.level = 0.0;
            }
        }
        self.level = self.level.max(0.0);
        self.level
    }
}
