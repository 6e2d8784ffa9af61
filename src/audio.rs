//! Drone audio using the Web Audio API
//!
//! One persistent sine oscillator through a gain node. Browsers only allow
//! audio after a user gesture, so `start` must be called from an interaction
//! callback, never from the frame loop.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::consts::DRONE_LEVEL;

/// Driver for the cosmic drone
pub struct DroneAudio {
    ctx: Option<AudioContext>,
    /// The running voice, created on the first gesture
    voice: Option<(OscillatorNode, GainNode)>,
    master_volume: f32,
    muted: bool,
}

impl Default for DroneAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl DroneAudio {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - drone disabled");
        }
        Self {
            ctx,
            voice: None,
            master_volume: 1.0,
            muted: false,
        }
    }

    /// Whether the oscillator is running
    pub fn started(&self) -> bool {
        self.voice.is_some()
    }

    /// Start the drone at the given pitch. Idempotent; must only be called
    /// from a genuine user-gesture callback.
    pub fn start(&mut self, freq: f32) {
        if self.voice.is_some() {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Contexts created before the first gesture start suspended
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Some((osc, gain)) = self.create_drone_voice(ctx, freq) else {
            log::warn!("Failed to build drone voice");
            return;
        };
        if osc.start().is_err() {
            log::warn!("Oscillator refused to start");
            return;
        }

        log::info!("Drone started at {freq:.0} Hz");
        self.voice = Some((osc, gain));
    }

    /// Retune the running drone; no-op before the first gesture
    pub fn set_frequency(&self, freq: f32) {
        if let Some((osc, _)) = &self.voice {
            osc.frequency().set_value(freq);
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
        self.apply_gain();
    }

    /// Mute/unmute without stopping the oscillator
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply_gain();
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    fn effective_level(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            DRONE_LEVEL * self.master_volume
        }
    }

    fn apply_gain(&self) {
        if let Some((_, gain)) = &self.voice {
            gain.gain().set_value(self.effective_level());
        }
    }

    /// Build the sine oscillator -> gain -> destination chain
    fn create_drone_voice(
        &self,
        ctx: &AudioContext,
        freq: f32,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(OscillatorType::Sine);
        osc.frequency().set_value(freq);
        gain.gain().set_value(self.effective_level());
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }
}
