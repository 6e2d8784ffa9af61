//! Per-frame journey advance
//!
//! One call per display refresh. Order matters: the drone pitch is taken
//! from the zoom level that was just rendered, then zoom and the clock
//! advance for the next frame.

use crate::consts::*;

use super::state::JourneyState;

/// Advance the journey by one frame
pub fn tick(state: &mut JourneyState) {
    if state.audio.started {
        state.audio.frequency = state.drone_frequency();
    }

    state.zoom += ZOOM_SPEED;
    if state.zoom > ZOOM_MAX {
        // Exact reset, no remainder carry - the loop restarts at the bubble
        state.zoom = ZOOM_MIN;
    }

    state.time += TIME_STEP;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::SceneKind;
    use proptest::prelude::*;

    #[test]
    fn test_zoom_progression() {
        let mut state = JourneyState::new();
        for n in 1..=100u32 {
            tick(&mut state);
            let expected = ZOOM_MIN + n as f32 * ZOOM_SPEED;
            assert!(
                (state.zoom - expected).abs() < 1e-4,
                "after {n} ticks: {} vs {}",
                state.zoom,
                expected
            );
        }
    }

    #[test]
    fn test_clock_advances_unbounded() {
        let mut state = JourneyState::new();
        for _ in 0..3000 {
            tick(&mut state);
        }
        assert!((state.time - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_wrap_is_exact() {
        let mut state = JourneyState::new();
        state.zoom = ZOOM_MAX - ZOOM_SPEED / 2.0;
        tick(&mut state);
        assert_eq!(state.zoom, ZOOM_MIN);
    }

    #[test]
    fn test_full_loop_scenario() {
        // 2200 advances at 0.005 from 1.0 lands just at the wrap threshold
        let mut state = JourneyState::new();
        for _ in 0..2200 {
            tick(&mut state);
        }
        assert!(
            (state.zoom - ZOOM_MAX).abs() < 0.01,
            "zoom after 2200 ticks: {}",
            state.zoom
        );
        assert_eq!(state.scene(), SceneKind::Infinity);

        // The next few ticks push past MAX_ZOOM and wrap to the bubble
        for _ in 0..3 {
            tick(&mut state);
            if state.zoom == ZOOM_MIN {
                break;
            }
        }
        assert_eq!(state.zoom, ZOOM_MIN);
        assert_eq!(state.scene(), SceneKind::Soap);
    }

    #[test]
    fn test_frequency_untouched_without_gesture() {
        let mut state = JourneyState::new();
        let idle_freq = state.audio.frequency;
        for _ in 0..5000 {
            tick(&mut state);
        }
        assert!(!state.audio.started);
        assert_eq!(state.audio.frequency, idle_freq);
    }

    #[test]
    fn test_frequency_follows_zoom_once_started() {
        let mut state = JourneyState::new();
        assert!(state.begin_drone());
        let mut last = state.audio.frequency;
        for _ in 0..500 {
            tick(&mut state);
            assert!(state.audio.frequency >= last, "pitch rises as we zoom out");
            last = state.audio.frequency;
        }
    }

    proptest! {
        #[test]
        fn prop_zoom_stays_in_range(ticks in 0usize..10_000) {
            let mut state = JourneyState::new();
            for _ in 0..ticks {
                tick(&mut state);
            }
            prop_assert!(state.zoom >= ZOOM_MIN);
            prop_assert!(state.zoom <= ZOOM_MAX);
        }

        #[test]
        fn prop_scene_covers_all_zoom(zoom in 1.0f32..100.0) {
            // Threshold chain is total: every zoom maps to exactly one scene,
            // and the mapping agrees with the interval table.
            let scene = SceneKind::for_zoom(zoom);
            let expected = match zoom {
                z if z < 2.0 => SceneKind::Soap,
                z if z < 4.0 => SceneKind::Molecules,
                z if z < 6.0 => SceneKind::Atoms,
                z if z < 8.0 => SceneKind::QuantumFoam,
                z if z < 10.0 => SceneKind::Galaxy,
                _ => SceneKind::Infinity,
            };
            prop_assert_eq!(scene, expected);
        }

        #[test]
        fn prop_frequency_monotone_in_zoom(a in 1.0f32..12.0, b in 1.0f32..12.0) {
            let mut sa = JourneyState::new();
            let mut sb = JourneyState::new();
            sa.zoom = a.min(b);
            sb.zoom = a.max(b);
            prop_assert!(sa.drone_frequency() <= sb.drone_frequency());
            prop_assert!(sa.drone_frequency() >= DRONE_LO_HZ);
            prop_assert!(sb.drone_frequency() <= DRONE_HI_HZ);
        }
    }
}
