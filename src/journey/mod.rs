//! Deterministic journey logic
//!
//! All zoom/scene/audio state lives here. This module must be pure:
//! - Fixed per-frame increments only
//! - No rendering or platform dependencies
//! - Scene selection is a total function of zoom

pub mod state;
pub mod tick;

pub use state::{AudioState, JourneyState, SceneKind};
pub use tick::tick;
