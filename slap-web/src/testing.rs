//! Recording fakes for the presentation and music sinks.

use crate::battle::{Presenter, ScreenPoint, Tint};
use crate::music::{MusicMode, MusicPlayer};
use crate::tracking::Side;

#[derive(Clone, Debug, PartialEq)]
pub enum UiCall {
    Health { player: i32, enemy: i32, enemy_max: i32 },
    Combo(u32),
    BossName(String),
    BossImage(String),
    Feedback(String, Tint),
    DamageText(String, ScreenPoint, Tint),
    SlapSound(f32),
    Whoosh,
    Flash,
    Shake,
    Particles(ScreenPoint, Tint),
    Shockwave(ScreenPoint),
    Typhoon,
    UltimateVisuals,
    BossSlap { show_hand: bool },
    BossDodge(Side),
    VictoryScreen,
    DefeatScreen,
    CameraReady,
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<UiCall>,
}

impl RecordingPresenter {
    pub fn count(&self, f: impl Fn(&UiCall) -> bool) -> usize {
        self.calls.iter().filter(|c| f(c)).count()
    }

    pub fn has_feedback(&self, text: &str) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, UiCall::Feedback(t, _) if t == text))
    }

    pub fn last_image(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            UiCall::BossImage(id) => Some(id.as_str()),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn update_health(&mut self, player: i32, enemy: i32, enemy_max: i32) {
        self.calls.push(UiCall::Health { player, enemy, enemy_max });
    }

    fn update_combo(&mut self, count: u32) {
        self.calls.push(UiCall::Combo(count));
    }

    fn update_boss_name(&mut self, name: &str) {
        self.calls.push(UiCall::BossName(name.to_string()));
    }

    fn set_boss_image(&mut self, id: &str) {
        self.calls.push(UiCall::BossImage(id.to_string()));
    }

    fn show_feedback(&mut self, text: &str, tint: Tint) {
        self.calls.push(UiCall::Feedback(text.to_string(), tint));
    }

    fn show_damage_text(&mut self, text: &str, at: ScreenPoint, tint: Tint) {
        self.calls.push(UiCall::DamageText(text.to_string(), at, tint));
    }

    fn play_slap_sound(&mut self, pitch: f32) {
        self.calls.push(UiCall::SlapSound(pitch));
    }

    fn play_whoosh_sound(&mut self) {
        self.calls.push(UiCall::Whoosh);
    }

    fn trigger_flash(&mut self) {
        self.calls.push(UiCall::Flash);
    }

    fn trigger_screen_shake(&mut self) {
        self.calls.push(UiCall::Shake);
    }

    fn spawn_particles(&mut self, at: ScreenPoint, tint: Tint) {
        self.calls.push(UiCall::Particles(at, tint));
    }

    fn spawn_shockwave(&mut self, at: ScreenPoint) {
        self.calls.push(UiCall::Shockwave(at));
    }

    fn spawn_typhoon(&mut self) {
        self.calls.push(UiCall::Typhoon);
    }

    fn trigger_ultimate_visuals(&mut self) {
        self.calls.push(UiCall::UltimateVisuals);
    }

    fn play_boss_slap_animation(&mut self, show_hand: bool) {
        self.calls.push(UiCall::BossSlap { show_hand });
    }

    fn play_boss_dodge_animation(&mut self, side: Side) {
        self.calls.push(UiCall::BossDodge(side));
    }

    fn show_victory_screen(&mut self) {
        self.calls.push(UiCall::VictoryScreen);
    }

    fn show_defeat_screen(&mut self) {
        self.calls.push(UiCall::DefeatScreen);
    }

    fn camera_ready(&mut self) {
        self.calls.push(UiCall::CameraReady);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicCall {
    Start(MusicMode),
    Stop,
}

#[derive(Debug, Default)]
pub struct RecordingMusic {
    pub calls: Vec<MusicCall>,
}

impl MusicPlayer for RecordingMusic {
    fn start(&mut self, mode: MusicMode) {
        self.calls.push(MusicCall::Start(mode));
    }

    fn stop(&mut self) {
        self.calls.push(MusicCall::Stop);
    }
}
