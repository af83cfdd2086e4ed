//! `SlapGame` - the class the page drives
//!
//! One instance per page. It owns the whole session; the page calls
//! `process_frame` from its MediaPipe callback and the menu methods
//! from its buttons.

use wasm_bindgen::prelude::*;

use super::frames::snapshot_from_buffers;
use super::sinks::{JsMusic, JsPresenter};
use crate::battle::{Difficulty, GameMode, Level};
use crate::config::GameConfig;
use crate::session::Session;
use crate::tracking::Hand;

fn now() -> f64 {
    js_sys::Date::now()
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

#[wasm_bindgen]
pub struct SlapGame {
    session: Session<JsPresenter, JsMusic>,
}

#[wasm_bindgen]
impl SlapGame {
    /// Default tuning
    #[wasm_bindgen(constructor)]
    pub fn new(presenter: JsPresenter, music: JsMusic) -> SlapGame {
        SlapGame {
            session: Session::new(GameConfig::default(), presenter, music, random_seed()),
        }
    }

    /// Tuning from a JSON document; omitted fields keep their defaults
    pub fn with_config(presenter: JsPresenter, music: JsMusic, json: &str) -> Result<SlapGame, JsValue> {
        let config = GameConfig::from_json(json)?;
        Ok(SlapGame {
            session: Session::new(config, presenter, music, random_seed()),
        })
    }

    pub fn set_difficulty(&mut self, name: &str) -> Result<(), JsValue> {
        let difficulty: Difficulty = name.parse()?;
        self.session.set_difficulty(difficulty);
        Ok(())
    }

    pub fn enter_prep(&mut self, level: &str) -> Result<(), JsValue> {
        let level: Level = level.parse()?;
        self.session.enter_prep(level);
        Ok(())
    }

    pub fn start_battle(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: GameMode = mode.parse()?;
        self.session.start_battle(mode);
        Ok(())
    }

    pub fn return_to_menu(&mut self) {
        self.session.return_to_menu();
    }

    /// One tracker result: flat x,y,z buffers, any of which may be absent
    pub fn process_frame(
        &mut self,
        face: Option<Vec<f32>>,
        left_hand: Option<Vec<f32>>,
        right_hand: Option<Vec<f32>>,
    ) {
        let frame = snapshot_from_buffers(
            face.as_deref(),
            left_hand.as_deref(),
            right_hand.as_deref(),
        );
        self.session.process_frame(&frame, now());
    }

    pub fn phase(&self) -> String {
        self.session.battle().phase().name().to_string()
    }

    pub fn player_hp(&self) -> i32 {
        self.session.battle().player_hp()
    }

    pub fn enemy_hp(&self) -> i32 {
        self.session.battle().enemy_hp()
    }

    pub fn combo(&self) -> u32 {
        self.session.battle().combo_count()
    }

    /// Recent positions of one hand as flat x,y pairs, oldest first
    pub fn hand_trail(&self, hand: &str) -> Result<Vec<f32>, JsValue> {
        let hand: Hand = hand.parse()?;
        Ok(self
            .session
            .classifier()
            .trail(hand)
            .flat_map(|s| [s.position.x, s.position.y])
            .collect())
    }
}
