//! Gesture thresholds and refractory periods.
//!
//! Distances are in normalized image units, times in milliseconds.

use serde::Deserialize;

use crate::error::GameError;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    /// Max hand-to-nose distance that counts as covering the face
    pub block_distance: f32,
    /// Max hand-to-hand distance that counts as a clap
    pub clap_distance: f32,
    /// Minimum time between two clap (ultimate) events
    pub clap_refractory_ms: f64,
    /// Horizontal per-frame displacement needed for a slap
    pub slap_threshold: f32,
    /// Minimum time between two slaps of the same hand
    pub slap_refractory_ms: f64,
    /// Horizontal per-frame displacement for the cosmetic whoosh cue
    pub whoosh_threshold: f32,
    pub whoosh_refractory_ms: f64,
    /// Downward per-frame displacement that counts as a down-swipe
    pub swipe_down_threshold: f32,
    /// Max gap between left and right down-swipes for a hurricane
    pub hurricane_window_ms: f64,
    pub hurricane_cooldown_ms: f64,
    /// How long trail samples are kept for drawing
    pub trail_window_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            block_distance: 0.15,
            clap_distance: 0.08,
            clap_refractory_ms: 2000.0,
            slap_threshold: 0.05,
            slap_refractory_ms: 150.0,
            whoosh_threshold: 0.03,
            whoosh_refractory_ms: 200.0,
            swipe_down_threshold: 0.1,
            hurricane_window_ms: 200.0,
            hurricane_cooldown_ms: 3000.0,
            trail_window_ms: 500.0,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        let distances = [
            ("gestures.block_distance", self.block_distance),
            ("gestures.clap_distance", self.clap_distance),
            ("gestures.slap_threshold", self.slap_threshold),
            ("gestures.whoosh_threshold", self.whoosh_threshold),
            ("gestures.swipe_down_threshold", self.swipe_down_threshold),
        ];
        for (field, value) in distances {
            if !(value > 0.0) {
                return Err(GameError::invalid(field, format!("{value} must be positive")));
            }
        }

        let periods = [
            ("gestures.clap_refractory_ms", self.clap_refractory_ms),
            ("gestures.slap_refractory_ms", self.slap_refractory_ms),
            ("gestures.whoosh_refractory_ms", self.whoosh_refractory_ms),
            ("gestures.hurricane_window_ms", self.hurricane_window_ms),
            ("gestures.hurricane_cooldown_ms", self.hurricane_cooldown_ms),
            ("gestures.trail_window_ms", self.trail_window_ms),
        ];
        for (field, value) in periods {
            if !(value >= 0.0) {
                return Err(GameError::invalid(field, format!("{value} must not be negative")));
            }
        }
        Ok(())
    }
}
