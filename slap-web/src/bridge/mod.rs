//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod frames;
mod game;
mod logging;
mod sinks;

pub use frames::snapshot_from_buffers;
pub use game::SlapGame;
pub use logging::init_logging;
pub use sinks::{JsMusic, JsPresenter};
