//! Errors raised at the crate boundary.
//!
//! The combat core itself never fails: out-of-phase calls and missing
//! landmarks are silently ignored. Only name parsing and config loading
//! can go wrong, and those are reported back to JavaScript.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown game mode '{0}' (expected STORY)")]
    UnknownMode(String),

    #[error("unknown level '{0}' (expected STREET or OFFICE)")]
    UnknownLevel(String),

    #[error("unknown difficulty '{0}' (expected EASY or HARD)")]
    UnknownDifficulty(String),

    #[error("unknown hand '{0}' (expected left or right)")]
    UnknownHand(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
}

impl GameError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GameError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
