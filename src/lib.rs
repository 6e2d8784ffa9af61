//! Cosmic Zoom - a looping journey from a soap bubble to infinity
//!
//! Core modules:
//! - `journey`: Deterministic zoom state (scene selection, drone pitch mapping)
//! - `scenes`: Procedural geometry for the six scales of reality
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Web Audio drone driver (wasm only)
//! - `settings`: User preferences persisted to LocalStorage

pub mod journey;
pub mod renderer;
pub mod scenes;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod audio;

pub use journey::{AudioState, JourneyState, SceneKind};
pub use settings::Settings;

use glam::Vec2;

/// Journey configuration constants
pub mod consts {
    /// Closest zoom level (start of the loop)
    pub const ZOOM_MIN: f32 = 1.0;
    /// Zoom level at which the journey wraps back to the start
    pub const ZOOM_MAX: f32 = 12.0;
    /// Zoom increment per frame - slow, steady pace for a ~7 minute loop
    pub const ZOOM_SPEED: f32 = 0.005;

    /// Animation clock increment per frame
    pub const TIME_STEP: f32 = 0.01;

    /// Scene switch thresholds (half-open intervals over zoom)
    pub const SOAP_END: f32 = 2.0;
    pub const MOLECULES_END: f32 = 4.0;
    pub const ATOMS_END: f32 = 6.0;
    pub const QUANTUM_FOAM_END: f32 = 8.0;
    pub const GALAXY_END: f32 = 10.0;

    /// Drone pitch at the closest zoom
    pub const DRONE_LO_HZ: f32 = 100.0;
    /// Drone pitch just before the wrap
    pub const DRONE_HI_HZ: f32 = 800.0;
    /// Fixed drone amplitude (fraction of full scale)
    pub const DRONE_LEVEL: f32 = 0.2;
}

/// Linearly map `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`,
/// clamping to the output range when the input leaves its domain.
#[inline]
pub fn map_range(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + t * (out_hi - out_lo)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_endpoints() {
        assert_eq!(map_range(1.0, 1.0, 12.0, 100.0, 800.0), 100.0);
        assert_eq!(map_range(12.0, 1.0, 12.0, 100.0, 800.0), 800.0);
    }

    #[test]
    fn test_map_range_clamps() {
        assert_eq!(map_range(0.0, 1.0, 12.0, 100.0, 800.0), 100.0);
        assert_eq!(map_range(99.0, 1.0, 12.0, 100.0, 800.0), 800.0);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, 0.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);

        let p = polar_to_cartesian(10.0, std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-4);
        assert!((p.y - 10.0).abs() < 1e-5);
    }
}
