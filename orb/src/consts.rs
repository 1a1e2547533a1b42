//! Shared numeric constants for the orb crate.

// ── Timing ──────────────────────────────────────────────────────

/// Simulation time advanced per rendered frame.
pub const TIME_STEP: f64 = 0.016;

// ── Energy ──────────────────────────────────────────────────────

/// Geometric decay applied per frame while nobody is speaking.
pub const ENERGY_DECAY: f64 = 0.93;

/// Fraction of the gap to the target closed per frame while speaking.
pub const ENERGY_SMOOTHING: f64 = 0.15;

/// Below this level a silent orb snaps to zero.
pub const ENERGY_FLOOR: f64 = 1e-4;

/// Upper bound on frames for energy to reach zero from its maximum (1.0).
pub const ENERGY_SETTLE_FRAMES: u32 = 128;

// ── Particles ───────────────────────────────────────────────────

/// Number of particles spawned per canvas size.
pub const PARTICLE_COUNT: usize = 180;

/// Number of depth layers particles are spread across.
pub const PARTICLE_LAYERS: u8 = 4;

/// Layer that draws motion trails while the orb is active.
pub const TRAIL_LAYER: u8 = 2;

/// Trail length in CSS pixels.
pub const TRAIL_LENGTH: f64 = 5.0;

/// Radial wobble amplitude in CSS pixels.
pub const WOBBLE_PX: f64 = 5.0;

// ── Rings ───────────────────────────────────────────────────────

/// Number of concentric glow rings.
pub const RING_COUNT: usize = 5;

/// Vertices per ring outline.
pub const RING_SEGMENTS: usize = 180;

// ── Core ────────────────────────────────────────────────────────

/// Number of stacked polygons in the core ornament.
pub const CORE_LAYERS: usize = 4;

/// Vertex count of the innermost core polygon; each layer adds one.
pub const CORE_BASE_POINTS: usize = 6;
