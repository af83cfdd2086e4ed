//! JS-side presentation and music objects
//!
//! The page passes in plain objects with camelCase methods; these
//! bindings adapt them to the core's `Presenter` and `MusicPlayer`.

use wasm_bindgen::prelude::*;

use crate::battle::{Presenter, ScreenPoint, Tint};
use crate::music::{MusicMode, MusicPlayer};
use crate::tracking::Side;

#[wasm_bindgen]
extern "C" {
    /// UI, audio and effects of the page
    pub type JsPresenter;

    #[wasm_bindgen(method, js_name = updateHealth)]
    fn js_update_health(this: &JsPresenter, player: i32, enemy: i32, enemy_max: i32);
    #[wasm_bindgen(method, js_name = updateCombo)]
    fn js_update_combo(this: &JsPresenter, count: u32);
    #[wasm_bindgen(method, js_name = updateBossName)]
    fn js_update_boss_name(this: &JsPresenter, name: &str);
    #[wasm_bindgen(method, js_name = setBossImage)]
    fn js_set_boss_image(this: &JsPresenter, id: &str);
    #[wasm_bindgen(method, js_name = showFeedback)]
    fn js_show_feedback(this: &JsPresenter, text: &str, color: &str);
    #[wasm_bindgen(method, js_name = showDamageText)]
    fn js_show_damage_text(this: &JsPresenter, text: &str, x: f32, y: f32, color: &str);
    #[wasm_bindgen(method, js_name = playSlapSound)]
    fn js_play_slap_sound(this: &JsPresenter, pitch: f32);
    #[wasm_bindgen(method, js_name = playWhooshSound)]
    fn js_play_whoosh_sound(this: &JsPresenter);
    #[wasm_bindgen(method, js_name = triggerFlash)]
    fn js_trigger_flash(this: &JsPresenter);
    #[wasm_bindgen(method, js_name = triggerScreenShake)]
    fn js_trigger_screen_shake(this: &JsPresenter);
    #[wasm_bindgen(method, js_name = spawnParticles)]
    fn js_spawn_particles(this: &JsPresenter, x: f32, y: f32, color: &str);
    #[wasm_bindgen(method, js_name = spawnShockwave)]
    fn js_spawn_shockwave(this: &JsPresenter, x: f32, y: f32);
    #[wasm_bindgen(method, js_name = spawnTyphoon)]
    fn js_spawn_typhoon(this: &JsPresenter);
    #[wasm_bindgen(method, js_name = triggerUltimateVisuals)]
    fn js_trigger_ultimate_visuals(this: &JsPresenter);
    #[wasm_bindgen(method, js_name = playBossSlapAnimation)]
    fn js_play_boss_slap_animation(this: &JsPresenter, show_hand: bool);
    #[wasm_bindgen(method, js_name = playBossDodgeAnimation)]
    fn js_play_boss_dodge_animation(this: &JsPresenter, side: &str);
    #[wasm_bindgen(method, js_name = showVictoryScreen)]
    fn js_show_victory_screen(this: &JsPresenter);
    #[wasm_bindgen(method, js_name = showDefeatScreen)]
    fn js_show_defeat_screen(this: &JsPresenter);
    #[wasm_bindgen(method, js_name = cameraReady)]
    fn js_camera_ready(this: &JsPresenter);

    /// Background music controller
    pub type JsMusic;

    #[wasm_bindgen(method, js_name = start)]
    fn js_start(this: &JsMusic, mode: &str);
    #[wasm_bindgen(method, js_name = stop)]
    fn js_stop(this: &JsMusic);
}

impl Presenter for JsPresenter {
    fn update_health(&mut self, player: i32, enemy: i32, enemy_max: i32) {
        self.js_update_health(player, enemy, enemy_max);
    }

    fn update_combo(&mut self, count: u32) {
        self.js_update_combo(count);
    }

    fn update_boss_name(&mut self, name: &str) {
        self.js_update_boss_name(name);
    }

    fn set_boss_image(&mut self, id: &str) {
        self.js_set_boss_image(id);
    }

    fn show_feedback(&mut self, text: &str, tint: Tint) {
        self.js_show_feedback(text, tint.as_css());
    }

    fn show_damage_text(&mut self, text: &str, at: ScreenPoint, tint: Tint) {
        self.js_show_damage_text(text, at.x, at.y, tint.as_css());
    }

    fn play_slap_sound(&mut self, pitch: f32) {
        self.js_play_slap_sound(pitch);
    }

    fn play_whoosh_sound(&mut self) {
        self.js_play_whoosh_sound();
    }

    fn trigger_flash(&mut self) {
        self.js_trigger_flash();
    }

    fn trigger_screen_shake(&mut self) {
        self.js_trigger_screen_shake();
    }

    fn spawn_particles(&mut self, at: ScreenPoint, tint: Tint) {
        self.js_spawn_particles(at.x, at.y, tint.as_css());
    }

    fn spawn_shockwave(&mut self, at: ScreenPoint) {
        self.js_spawn_shockwave(at.x, at.y);
    }

    fn spawn_typhoon(&mut self) {
        self.js_spawn_typhoon();
    }

    fn trigger_ultimate_visuals(&mut self) {
        self.js_trigger_ultimate_visuals();
    }

    fn play_boss_slap_animation(&mut self, show_hand: bool) {
        self.js_play_boss_slap_animation(show_hand);
    }

    fn play_boss_dodge_animation(&mut self, side: Side) {
        self.js_play_boss_dodge_animation(side.as_str());
    }

    fn show_victory_screen(&mut self) {
        self.js_show_victory_screen();
    }

    fn show_defeat_screen(&mut self) {
        self.js_show_defeat_screen();
    }

    fn camera_ready(&mut self) {
        self.js_camera_ready();
    }
}

impl MusicPlayer for JsMusic {
    fn start(&mut self, mode: MusicMode) {
        self.js_start(mode.as_str());
    }

    fn stop(&mut self) {
        self.js_stop();
    }
}
