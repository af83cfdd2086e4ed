//! Per-hand detection history
//!
//! Keeps only the immediately preceding sample for gesture math, plus a
//! short trail of recent positions that the page draws as a motion streak.

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::tracking::Landmark;

/// One trail point with its capture time (ms)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSample {
    pub position: Landmark,
    pub time: f64,
}

/// Detection state for a single hand
#[derive(Clone, Debug, Default)]
pub struct HandTracker {
    /// Last seen reference position
    previous: Option<Landmark>,
    /// Recent positions, oldest first
    trail: VecDeque<TrailSample>,
    /// Time of this hand's last slap event
    pub(crate) last_slap: Option<f64>,
    /// Time of this hand's last down-swipe
    pub(crate) last_down_swipe: Option<f64>,
}

impl HandTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new sample.
    ///
    /// Returns the displacement since the previous sample, or None on the
    /// first sighting. A hand that went missing for a few frames is compared
    /// against its last known position.
    pub fn observe(&mut self, position: Landmark, now: f64, trail_window_ms: f64) -> Option<Vector2<f32>> {
        self.trail.push_back(TrailSample { position, time: now });
        while let Some(oldest) = self.trail.front() {
            if now - oldest.time < trail_window_ms {
                break;
            }
            self.trail.pop_front();
        }

        let delta = self.previous.map(|prev| position - prev);
        self.previous = Some(position);
        delta
    }

    pub fn previous(&self) -> Option<Landmark> {
        self.previous
    }

    pub fn trail(&self) -> impl ExactSizeIterator<Item = &TrailSample> {
        self.trail.iter()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
