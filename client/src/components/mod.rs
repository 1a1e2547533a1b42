//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the assessment surfaces. The page passes derived props
//! into `circle_animation`; `floating_camera` is self-contained.

pub mod assessment_layout;
pub mod circle_animation;
pub mod floating_camera;
pub mod icons;
