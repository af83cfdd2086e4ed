//! Slap Web - gesture-driven slap battle core
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod battle;
mod bridge;
pub mod config;
pub mod error;
pub mod gestures;
pub mod music;
pub mod session;
pub mod tracking;

#[cfg(test)]
mod testing;

use wasm_bindgen::prelude::*;

pub use bridge::{snapshot_from_buffers, JsMusic, JsPresenter, SlapGame};
pub use config::GameConfig;
pub use error::GameError;
pub use session::Session;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    bridge::init_logging();
    tracing::info!("slap-web loaded");
}
