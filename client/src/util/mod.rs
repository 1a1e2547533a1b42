//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (media devices, animation frames)
//! from page and component logic to improve reuse and testability.

#[cfg(feature = "hydrate")]
pub mod frame_loop;
pub mod media;
