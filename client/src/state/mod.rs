//! Client-side state models.
//!
//! ARCHITECTURE
//! ============
//! Plain structs with pure transition methods. Pages and components wrap them
//! in `RwSignal`s; nothing here touches the DOM, so every rule is tested
//! natively.

pub mod assessment;
pub mod camera;
