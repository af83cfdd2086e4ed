//! Battle module - combat state machine and its deferred effects
//!
//! Re-exports only. All logic in submodules.

mod assets;
mod config;
mod presenter;
mod system;
mod timeline;
mod types;


pub use assets::BossAssets;
pub use config::BattleConfig;
pub use presenter::{Presenter, ScreenPoint, Tint};
pub use system::BattleSystem;
pub use timeline::{Effect, Timeline};
pub use types::{BattleOutcome, Difficulty, GameMode, Level, Phase};
