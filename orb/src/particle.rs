//! Orbiting particles.
//!
//! Particles are regenerated whenever the canvas radius changes and carry no
//! identity beyond their index. They are stored sorted by layer so the
//! renderer can paint back-to-front without sorting every frame.

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::consts::{PARTICLE_COUNT, PARTICLE_LAYERS};

/// One orbiting dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Current polar angle in radians.
    pub angle: f64,
    /// Orbit radius before layer and expansion scaling.
    pub base_radius: f64,
    /// Signed angular velocity per frame.
    pub orbit_speed: f64,
    /// Frequency of the radial wobble.
    pub pulse_speed: f64,
    /// Dot radius in CSS pixels before scaling.
    pub size: f64,
    /// Base opacity before layer and energy scaling.
    pub opacity: f64,
    /// Depth layer in `0..PARTICLE_LAYERS`.
    pub layer: u8,
    /// Additional orbit direction, `1.0` or `-1.0`.
    pub direction: f64,
}

impl Particle {
    /// `0.2` per layer; deeper layers orbit wider and fade.
    #[must_use]
    pub fn layer_offset(&self) -> f64 {
        f64::from(self.layer) * 0.2
    }
}

/// Spawn [`PARTICLE_COUNT`] particles for an orb of the given `radius`,
/// evenly spaced in angle and sorted by layer.
pub fn spawn<R: Rng>(radius: f64, rng: &mut R) -> Vec<Particle> {
    let mut particles = (0..PARTICLE_COUNT)
        .map(|i| spawn_one(i, radius, rng))
        .collect::<Vec<_>>();
    particles.sort_by_key(|p| p.layer);
    particles
}

#[allow(clippy::cast_precision_loss)]
fn spawn_one<R: Rng>(index: usize, radius: f64, rng: &mut R) -> Particle {
    let angle = (index as f64 / PARTICLE_COUNT as f64) * TAU;
    let speed_sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    Particle {
        angle,
        base_radius: radius * (0.3 + rng.random::<f64>() * 0.5),
        orbit_speed: (0.0003 + rng.random::<f64>() * 0.0007) * speed_sign,
        pulse_speed: 0.01 + rng.random::<f64>() * 0.02,
        size: 0.8 + rng.random::<f64>() * 2.2,
        opacity: 0.2 + rng.random::<f64>() * 0.5,
        layer: rng.random_range(0..PARTICLE_LAYERS),
        direction: if rng.random_bool(0.5) { 1.0 } else { -1.0 },
    }
}
