//! Per-frame geometry.
//!
//! [`crate::engine::OrbCore::tick`] produces a [`Scene`] in CSS-pixel
//! coordinates; [`crate::render::draw`] turns it into canvas calls. Keeping
//! the geometry as plain data lets the simulation be tested without a browser.

use crate::color::Rgb;

/// A 2D point in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along `angle` from `self`.
    #[must_use]
    pub fn polar(self, angle: f64, radius: f64) -> Self {
        Self::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A closed, slightly wavy glow ring.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub points: Vec<Point>,
    pub width: f64,
    pub opacity: f64,
    pub blur: f64,
}

/// Short fading stroke behind a moving particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trail {
    pub tail: Point,
    pub width: f64,
    pub opacity: f64,
}

/// One particle as it should be painted this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub pos: Point,
    pub size: f64,
    pub opacity: f64,
    pub layer: u8,
    pub trail: Option<Trail>,
}

/// Line connecting two nearby same-layer particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub opacity: f64,
}

/// One outline of the rotating core ornament.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub opacity: f64,
}

/// Everything drawn in one frame, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Canvas edge length in CSS pixels.
    pub size: f64,
    pub center: Point,
    pub radius: f64,
    pub color: Rgb,
    pub energy: f64,
    pub rings: Vec<Ring>,
    pub sprites: Vec<Sprite>,
    pub links: Vec<Link>,
    pub core: Vec<Polygon>,
}
