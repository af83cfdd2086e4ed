//! Gesture classifier - turns per-frame landmarks into combat events
//!
//! Works on raw frame-to-frame displacement of each hand's reference point.
//! Every detector has its own refractory period, independent of any combat
//! cooldowns, so a jittery tracker cannot spam events.

use nalgebra::distance;
use tracing::debug;

use super::config::GestureConfig;
use super::hand::{HandTracker, TrailSample};
use crate::tracking::{FrameSnapshot, Hand, Landmark, Side};

/// Discrete events produced from one frame, in detection order
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Whether any hand currently covers the face
    Block(bool),
    /// Both hands brought together
    Ultimate,
    /// Fast horizontal swing of one hand
    Slap { hand: Hand, direction: Side },
    /// Both hands swiped down at nearly the same time
    Hurricane,
    /// Cosmetic swing cue, no gameplay effect
    Whoosh,
}

/// True if `period_ms` has fully elapsed since `last` (or nothing happened yet)
fn elapsed(last: Option<f64>, now: f64, period_ms: f64) -> bool {
    last.map_or(true, |t| now - t > period_ms)
}

pub struct GestureClassifier {
    config: GestureConfig,
    left: HandTracker,
    right: HandTracker,
    last_ultimate: Option<f64>,
    last_hurricane: Option<f64>,
    last_whoosh: Option<f64>,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            left: HandTracker::new(),
            right: HandTracker::new(),
            last_ultimate: None,
            last_hurricane: None,
            last_whoosh: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    fn tracker(&self, hand: Hand) -> &HandTracker {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }

    fn tracker_mut(&mut self, hand: Hand) -> &mut HandTracker {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }

    /// Recent positions of one hand, oldest first
    pub fn trail(&self, hand: Hand) -> impl ExactSizeIterator<Item = &TrailSample> {
        self.tracker(hand).trail()
    }

    /// Classify one frame. Missing body parts are skipped without
    /// touching their history.
    pub fn process(&mut self, frame: &FrameSnapshot, now: f64) -> Vec<GestureEvent> {
        let mut events = Vec::new();

        let left = frame.hand(Hand::Left).and_then(|h| h.hand_reference());
        let right = frame.hand(Hand::Right).and_then(|h| h.hand_reference());

        // Block: any hand near the nose
        if let Some(nose) = frame.face.as_ref().and_then(|f| f.nose()) {
            let blocking = [left, right]
                .into_iter()
                .flatten()
                .any(|hand| distance(&hand, &nose) < self.config.block_distance);
            events.push(GestureEvent::Block(blocking));
        }

        // Clap: both hands touching
        if let (Some(l), Some(r)) = (left, right) {
            if distance(&l, &r) < self.config.clap_distance
                && elapsed(self.last_ultimate, now, self.config.clap_refractory_ms)
            {
                debug!("clap detected");
                events.push(GestureEvent::Ultimate);
                self.last_ultimate = Some(now);
            }
        }

        for (hand, position) in [(Hand::Left, left), (Hand::Right, right)] {
            if let Some(position) = position {
                self.detect_hand(hand, position, now, &mut events);
            }
        }

        events
    }

    fn detect_hand(&mut self, hand: Hand, position: Landmark, now: f64, events: &mut Vec<GestureEvent>) {
        let config = self.config;
        let other_swipe = self.tracker(hand.other()).last_down_swipe;

        let Some(delta) = self.tracker_mut(hand).observe(position, now, config.trail_window_ms) else {
            return;
        };

        if delta.x.abs() > config.whoosh_threshold
            && elapsed(self.last_whoosh, now, config.whoosh_refractory_ms)
        {
            events.push(GestureEvent::Whoosh);
            self.last_whoosh = Some(now);
        }

        let tracker = self.tracker_mut(hand);
        if delta.x.abs() > config.slap_threshold
            && elapsed(tracker.last_slap, now, config.slap_refractory_ms)
        {
            let direction = Side::from_dx(delta.x);
            debug!(hand = hand.as_str(), direction = direction.as_str(), dx = delta.x, "slap detected");
            events.push(GestureEvent::Slap { hand, direction });
            tracker.last_slap = Some(now);
        }

        // Image y grows downward
        if delta.y > config.swipe_down_threshold {
            tracker.last_down_swipe = Some(now);

            let paired = other_swipe.is_some_and(|t| now - t < config.hurricane_window_ms);
            if paired && elapsed(self.last_hurricane, now, config.hurricane_cooldown_ms) {
                debug!("hurricane detected");
                events.push(GestureEvent::Hurricane);
                self.last_hurricane = Some(now);
            }
        }
    }

    /// Forget all history; used when a new battle starts
    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
        self.last_ultimate = None;
        self.last_hurricane = None;
        self.last_whoosh = None;
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
