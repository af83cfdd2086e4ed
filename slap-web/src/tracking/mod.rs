//! Tracking module - landmark data coming from the camera tracker
//!
//! Re-exports only. All logic in submodules.

mod landmarks;

pub use landmarks::{
    FrameSnapshot, Hand, Landmark, LandmarkSet, Side, HAND_REFERENCE, MIDDLE_MCP, NOSE,
};
