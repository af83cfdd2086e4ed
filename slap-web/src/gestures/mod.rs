//! Gestures module - landmark motion to combat events
//!
//! Re-exports only. All logic in submodules.

mod classifier;
mod config;
mod hand;

pub use classifier::{GestureClassifier, GestureEvent};
pub use config::GestureConfig;
pub use hand::{HandTracker, TrailSample};
