#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn particles(radius: f64) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(7);
    spawn(radius, &mut rng)
}

#[test]
fn spawn_produces_full_count() {
    assert_eq!(particles(144.0).len(), PARTICLE_COUNT);
}

#[test]
fn spawn_sorts_by_layer() {
    let ps = particles(144.0);
    assert!(ps.windows(2).all(|w| w[0].layer <= w[1].layer));
}

#[test]
fn spawn_respects_value_ranges() {
    let radius = 144.0;
    for p in particles(radius) {
        assert!(p.base_radius >= radius * 0.3 && p.base_radius <= radius * 0.8);
        assert!(p.orbit_speed.abs() >= 0.0003 && p.orbit_speed.abs() <= 0.001);
        assert!(p.pulse_speed >= 0.01 && p.pulse_speed <= 0.03);
        assert!(p.size >= 0.8 && p.size <= 3.0);
        assert!(p.opacity >= 0.2 && p.opacity <= 0.7);
        assert!(p.layer < PARTICLE_LAYERS);
        assert!(p.direction == 1.0 || p.direction == -1.0);
        assert!((0.0..TAU).contains(&p.angle));
    }
}

#[test]
fn spawn_is_deterministic_for_a_seed() {
    assert_eq!(particles(100.0), particles(100.0));
}

#[test]
fn spawn_scales_with_radius() {
    let small = particles(50.0);
    let large = particles(100.0);
    for (a, b) in small.iter().zip(&large) {
        assert!((b.base_radius - a.base_radius * 2.0).abs() < 1e-9);
    }
}

#[test]
fn layer_offset_is_fifth_per_layer() {
    let mut p = particles(10.0).remove(0);
    p.layer = 3;
    assert!((p.layer_offset() - 0.6).abs() < 1e-12);
}
