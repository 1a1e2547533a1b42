use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Rgb;
use crate::consts::{CORE_BASE_POINTS, CORE_LAYERS, RING_COUNT, RING_SEGMENTS, TIME_STEP, TRAIL_LAYER, TRAIL_LENGTH, WOBBLE_PX};
use crate::energy::Energy;
use crate::particle::{self, Particle};
use crate::render;
use crate::scene::{Link, Point, Polygon, Ring, Scene, Sprite, Trail};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Inputs the host page controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbProps {
    /// Canvas edge length in CSS pixels.
    pub size: f64,
    pub color: Rgb,
    /// Particles orbit and trail only while active.
    pub active: bool,
    pub speaking: bool,
}

impl Default for OrbProps {
    fn default() -> Self {
        Self { size: 288.0, color: Rgb::FALLBACK, active: false, speaking: false }
    }
}

/// Core orb state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Orb` so it can be tested without WASM/browser dependencies.
pub struct OrbCore {
    props: OrbProps,
    particles: Vec<Particle>,
    energy: Energy,
    time: f64,
    rng: SmallRng,
}

impl OrbCore {
    #[must_use]
    pub fn new(props: OrbProps, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = particle::spawn(props.size / 2.0, &mut rng);
        Self { props, particles, energy: Energy::default(), time: 0.0, rng }
    }

    // --- Inputs ---

    /// Replace the host props. Particles are respawned when the size changes;
    /// energy and time carry over.
    pub fn set_props(&mut self, props: OrbProps) {
        let resized = (props.size - self.props.size).abs() > f64::EPSILON;
        self.props = props;
        if resized {
            self.particles = particle::spawn(self.radius(), &mut self.rng);
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn props(&self) -> OrbProps {
        self.props
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.props.size / 2.0
    }

    #[must_use]
    pub fn energy(&self) -> f64 {
        self.energy.level()
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // --- Simulation ---

    /// Advance one frame and return the geometry to paint.
    pub fn tick(&mut self) -> Scene {
        self.time += TIME_STEP;
        let jitter = self.rng.random::<f64>();
        let energy = self.energy.step(self.props.speaking, self.time, jitter);
        let expansion = self.expansion(energy);

        if self.props.active {
            for p in &mut self.particles {
                p.angle = (p.angle + p.orbit_speed * (1.0 + energy * 2.0) * p.direction).rem_euclid(TAU);
            }
        }

        let radius = self.radius();
        let center = Point::new(radius, radius);
        let sprites = self.sprites(center, expansion, energy);
        let links = links(&self.particles, &sprites, radius, energy);

        Scene {
            size: self.props.size,
            center,
            radius,
            color: self.props.color,
            energy,
            rings: (0..RING_COUNT)
                .map(|i| ring(center, radius, expansion, energy, self.time, i))
                .collect(),
            sprites,
            links,
            core: core_polygons(center, radius, energy, self.time),
        }
    }

    fn expansion(&self, energy: f64) -> f64 {
        let gain = if self.props.speaking { 0.4 } else { 0.1 };
        1.0 + energy * gain + (self.time * 2.0).sin() * 0.05
    }

    #[allow(clippy::cast_precision_loss)]
    fn sprites(&self, center: Point, expansion: f64, energy: f64) -> Vec<Sprite> {
        self.particles
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let layer_offset = p.layer_offset();
                let orbit = p.base_radius * (1.0 + layer_offset) * expansion;
                let wobble = (self.time * p.pulse_speed + p.angle).sin() * WOBBLE_PX;
                let pos = center.polar(p.angle, orbit + wobble);

                let size = p.size * (1.0 + layer_offset * 0.5) * (1.0 + energy * 0.5);
                let base_opacity = p.opacity * (1.0 - layer_offset * 0.3) * (1.0 + energy * 0.3);
                let opacity = base_opacity * (0.7 + (self.time * 2.0 + i as f64).sin() * 0.3);

                let trail = (self.props.active && p.layer == TRAIL_LAYER).then(|| Trail {
                    tail: Point::new(pos.x - p.angle.cos() * TRAIL_LENGTH, pos.y - p.angle.sin() * TRAIL_LENGTH),
                    width: size * 2.0,
                    opacity: opacity * 0.5,
                });

                Sprite { pos, size, opacity, layer: p.layer, trail }
            })
            .collect()
    }
}

/// Even-indexed particles link to their successor when both share a layer
/// and sit within half the orb radius of each other.
fn links(particles: &[Particle], sprites: &[Sprite], radius: f64, energy: f64) -> Vec<Link> {
    let max_distance = radius * 0.5;
    let n = sprites.len();
    (0..n)
        .step_by(2)
        .filter_map(|i| {
            let a = &sprites[i];
            let b = &sprites[(i + 1) % n];
            if a.layer != b.layer {
                return None;
            }
            let distance = a.pos.distance(b.pos);
            if distance >= max_distance {
                return None;
            }
            Some(Link {
                from: a.pos,
                to: b.pos,
                width: 0.5 * (1.0 + energy * 0.5) * (1.0 - particles[i].layer_offset()),
                opacity: (1.0 - distance / max_distance) * 0.3 * (1.0 + energy),
            })
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn ring(center: Point, radius: f64, expansion: f64, energy: f64, time: f64, index: usize) -> Ring {
    let i = index as f64;
    let ring_radius = radius * (0.65 + i * 0.09) * expansion;
    let points = (0..RING_SEGMENTS)
        .map(|s| {
            let angle = (s as f64 / RING_SEGMENTS as f64) * TAU;
            center.polar(angle, ring_radius + (angle * 8.0 + time).sin() * 2.0)
        })
        .collect();
    Ring {
        points,
        width: if index == 0 { 2.0 } else { 1.0 },
        opacity: (0.12 - i * 0.02) * (1.0 + energy),
        blur: 8.0 + i * 2.0,
    }
}

#[allow(clippy::cast_precision_loss)]
fn core_polygons(center: Point, radius: f64, energy: f64, time: f64) -> Vec<Polygon> {
    let core_size = radius * 0.15 * (1.0 + energy * 0.3);
    let spin = time * 0.2;
    (0..CORE_LAYERS)
        .map(|layer| {
            let i = layer as f64;
            let rotation = spin + time * (0.1 + i * 0.1);
            let count = CORE_BASE_POINTS + layer;
            let dist = core_size * (1.0 - i * 0.15) * (1.0 + (time * 2.0 + i).sin() * 0.1);
            let points = (0..count)
                .map(|j| center.polar((j as f64 / count as f64) * TAU + rotation, dist))
                .collect();
            Polygon { points, opacity: 0.3 - i * 0.05 }
        })
        .collect()
}

/// The full orb engine. Wraps `OrbCore` and owns the 2D context.
pub struct Orb {
    ctx: CanvasRenderingContext2d,
    dpr: f64,
    pub core: OrbCore,
}

impl Orb {
    /// Bind a new orb to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D context.
    pub fn new(canvas: &HtmlCanvasElement, props: OrbProps, dpr: f64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let seed = js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits();
        Ok(Self { ctx, dpr: dpr.max(1.0), core: OrbCore::new(props, seed) })
    }

    pub fn set_props(&mut self, props: OrbProps) {
        self.core.set_props(props);
    }

    /// Advance one frame and paint it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        let scene = self.core.tick();
        render::draw(&self.ctx, &scene, self.dpr)
    }
}
