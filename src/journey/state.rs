//! Journey state and scene selection
//!
//! One session object replaces the sketch-style globals: zoom level,
//! animation clock, and drone state, constructed once at startup and
//! passed by reference into the frame loop.

use crate::consts::*;
use crate::map_range;

/// The six conceptual scales of the journey, in zoom order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Iridescent soap bubbles, zoom [1, 2)
    Soap,
    /// Jittering molecular lattice, zoom [2, 4)
    Molecules,
    /// Nuclei with orbiting electrons, zoom [4, 6)
    Atoms,
    /// Flickering noise field, zoom [6, 8)
    QuantumFoam,
    /// Rotating spiral of stars, zoom [8, 10)
    Galaxy,
    /// Tunnel of ellipses and stars, zoom [10, ..)
    Infinity,
}

impl SceneKind {
    /// Select the scene for a zoom level. Half-open intervals, the last
    /// one open-ended, so every zoom value maps to exactly one scene.
    pub fn for_zoom(zoom: f32) -> Self {
        if zoom < SOAP_END {
            SceneKind::Soap
        } else if zoom < MOLECULES_END {
            SceneKind::Molecules
        } else if zoom < ATOMS_END {
            SceneKind::Atoms
        } else if zoom < QUANTUM_FOAM_END {
            SceneKind::QuantumFoam
        } else if zoom < GALAXY_END {
            SceneKind::Galaxy
        } else {
            SceneKind::Infinity
        }
    }

    /// Overlay label shown at the bottom of the screen
    pub fn label(&self) -> &'static str {
        match self {
            SceneKind::Soap => "\u{1F9FC} Soap Bubble",
            SceneKind::Molecules => "\u{1F9EA} Molecules",
            SceneKind::Atoms => "\u{269B}\u{FE0F} Atoms",
            SceneKind::QuantumFoam => "\u{1F30C} Quantum Foam",
            SceneKind::Galaxy => "\u{1F320} Galaxy",
            SceneKind::Infinity => "\u{267E}\u{FE0F} Infinity",
        }
    }
}

/// Drone audio state. `frequency` is meaningful only once `started`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioState {
    /// Flips false -> true exactly once, on the first user gesture
    pub started: bool,
    /// Current drone pitch in Hz
    pub frequency: f32,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            started: false,
            frequency: DRONE_LO_HZ,
        }
    }
}

/// Complete journey state for one session
#[derive(Debug, Clone)]
pub struct JourneyState {
    /// Current zoom level, always in [ZOOM_MIN, ZOOM_MAX] between ticks
    pub zoom: f32,
    /// Animation clock, unbounded
    pub time: f32,
    /// Drone state
    pub audio: AudioState,
}

impl Default for JourneyState {
    fn default() -> Self {
        Self::new()
    }
}

impl JourneyState {
    pub fn new() -> Self {
        Self {
            zoom: ZOOM_MIN,
            time: 0.0,
            audio: AudioState::default(),
        }
    }

    /// Inverse-zoom camera factor: larger zoom recedes the camera
    pub fn scale(&self) -> f32 {
        1.0 / self.zoom
    }

    /// Scene selected by the current zoom level
    pub fn scene(&self) -> SceneKind {
        SceneKind::for_zoom(self.zoom)
    }

    /// Drone pitch for the current zoom level, clamped to the journey range
    pub fn drone_frequency(&self) -> f32 {
        map_range(self.zoom, ZOOM_MIN, ZOOM_MAX, DRONE_LO_HZ, DRONE_HI_HZ)
    }

    /// Mark the drone as started (from a genuine user gesture only).
    /// Idempotent; returns true on the single false -> true transition so
    /// the platform driver knows to start its oscillator.
    pub fn begin_drone(&mut self) -> bool {
        if self.audio.started {
            return false;
        }
        self.audio.started = true;
        self.audio.frequency = DRONE_LO_HZ;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_intervals() {
        assert_eq!(SceneKind::for_zoom(1.0), SceneKind::Soap);
        assert_eq!(SceneKind::for_zoom(1.999), SceneKind::Soap);
        assert_eq!(SceneKind::for_zoom(2.0), SceneKind::Molecules);
        assert_eq!(SceneKind::for_zoom(3.999), SceneKind::Molecules);
        assert_eq!(SceneKind::for_zoom(4.0), SceneKind::Atoms);
        assert_eq!(SceneKind::for_zoom(6.0), SceneKind::QuantumFoam);
        assert_eq!(SceneKind::for_zoom(8.0), SceneKind::Galaxy);
        assert_eq!(SceneKind::for_zoom(10.0), SceneKind::Infinity);
        assert_eq!(SceneKind::for_zoom(12.0), SceneKind::Infinity);
    }

    #[test]
    fn test_scale_is_inverse_zoom() {
        let mut state = JourneyState::new();
        assert_eq!(state.scale(), 1.0);
        state.zoom = 4.0;
        assert_eq!(state.scale(), 0.25);
    }

    #[test]
    fn test_drone_frequency_endpoints() {
        let mut state = JourneyState::new();
        assert_eq!(state.drone_frequency(), 100.0);
        state.zoom = 12.0;
        assert_eq!(state.drone_frequency(), 800.0);
        // Midpoint of the zoom range lands at the midpoint of the pitch range
        state.zoom = 6.5;
        assert!((state.drone_frequency() - 450.0).abs() < 0.01);
    }

    #[test]
    fn test_drone_frequency_clamps_outside_domain() {
        let mut state = JourneyState::new();
        state.zoom = 0.5;
        assert_eq!(state.drone_frequency(), 100.0);
        state.zoom = 20.0;
        assert_eq!(state.drone_frequency(), 800.0);
    }

    #[test]
    fn test_begin_drone_transitions_once() {
        let mut state = JourneyState::new();
        assert!(!state.audio.started);
        assert!(state.begin_drone());
        assert!(state.audio.started);
        assert_eq!(state.audio.frequency, 100.0);

        // Subsequent gestures are no-ops
        assert!(!state.begin_drone());
        assert!(!state.begin_drone());
        assert!(state.audio.started);
    }
}
