//! Canvas engine for the assessment page's ambient "orb" visualization.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! per-frame simulation of the orb (energy smoothing, particle orbits, glow
//! rings, core ornament) and paints the result to a 2D canvas. The host
//! Leptos component is responsible only for scheduling frames and passing the
//! current page flags in.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Orb`] and the testable [`engine::OrbCore`] |
//! | [`energy`] | Smoothed intensity scalar driven by the speaking flag |
//! | [`particle`] | Particle model and seeded spawning |
//! | [`scene`] | Per-frame geometry produced by the core and consumed by the renderer |
//! | [`render`] | Draws a [`scene::Scene`] to a `CanvasRenderingContext2d` |
//! | [`color`] | Hex parsing and `rgba()` formatting |
//! | [`consts`] | Shared numeric constants (particle count, decay rates, ring layout) |

pub mod color;
pub mod consts;
pub mod energy;
pub mod engine;
pub mod particle;
pub mod render;
pub mod scene;
