//! Session - one player's game, from menu to end screen
//!
//! Owns the classifier, the battle and the music. The page feeds it one
//! landmark frame per camera callback plus the menu choices.

use tracing::info;

use crate::battle::{BattleSystem, Difficulty, GameMode, Level, Phase, Presenter};
use crate::config::GameConfig;
use crate::gestures::{GestureClassifier, GestureEvent};
use crate::music::{MusicMode, MusicPlayer};
use crate::tracking::FrameSnapshot;

pub struct Session<P: Presenter, M: MusicPlayer> {
    battle: BattleSystem<P>,
    classifier: GestureClassifier,
    music: M,
    level: Level,
    difficulty: Difficulty,
    /// Set once the first face shows up during prep
    camera_ready: bool,
}

impl<P: Presenter, M: MusicPlayer> Session<P, M> {
    pub fn new(config: GameConfig, presenter: P, music: M, seed: u64) -> Self {
        Self {
            battle: BattleSystem::new(config.battle, presenter, seed),
            classifier: GestureClassifier::new(config.gestures),
            music,
            level: Level::default(),
            difficulty: Difficulty::default(),
            camera_ready: false,
        }
    }

    pub fn battle(&self) -> &BattleSystem<P> {
        &self.battle
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    pub fn music(&self) -> &M {
        &self.music
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Takes effect on the next `start_battle`
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn enter_prep(&mut self, level: Level) {
        self.level = level;
        self.camera_ready = false;
        self.battle.enter_prep();
        self.music.start(MusicMode::Prep);
        info!(?level, "preparing");
    }

    /// First start, retry and restart all go through here
    pub fn start_battle(&mut self, mode: GameMode) {
        self.music.start(MusicMode::Battle);
        self.classifier.reset();
        self.battle.start(mode, self.level, self.difficulty);
    }

    pub fn return_to_menu(&mut self) {
        self.music.stop();
        self.battle.return_to_menu();
    }

    pub fn process_frame(&mut self, frame: &FrameSnapshot, now: f64) {
        let mut revealed = self.battle.advance(now);

        if self.battle.phase() == Phase::Prep && !self.camera_ready && frame.face.is_some() {
            self.camera_ready = true;
            self.battle.presenter_mut().camera_ready();
        }

        if self.battle.is_active() {
            for event in self.classifier.process(frame, now) {
                self.dispatch(event, now);
            }
        }

        revealed = self.battle.update(now).or(revealed);
        if let Some(outcome) = revealed {
            info!(?outcome, "end screen shown");
            self.music.stop();
        }
    }

    fn dispatch(&mut self, event: GestureEvent, now: f64) {
        match event {
            GestureEvent::Block(active) => self.battle.set_blocking(active, now),
            GestureEvent::Ultimate => self.battle.on_ultimate(now),
            GestureEvent::Slap { direction, .. } => self.battle.on_slap(direction, now),
            GestureEvent::Hurricane => self.battle.on_hurricane(now),
            GestureEvent::Whoosh => self.battle.presenter_mut().play_whoosh_sound(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::BattleConfig;
    use crate::testing::{MusicCall, RecordingMusic, RecordingPresenter, UiCall};
    use crate::tracking::{Hand, Landmark, LandmarkSet, HAND_REFERENCE, NOSE};

    fn session(battle: BattleConfig) -> Session<RecordingPresenter, RecordingMusic> {
        let config = GameConfig {
            battle: BattleConfig {
                evasion_chance: 0.0,
                special_skill_chance: 0.0,
                ..battle
            },
            ..Default::default()
        };
        Session::new(config, RecordingPresenter::default(), RecordingMusic::default(), 11)
    }

    fn face() -> LandmarkSet {
        let mut points = vec![Landmark::new(0.5, 0.3); 468];
        points[NOSE] = Landmark::new(0.5, 0.3);
        LandmarkSet::new(points)
    }

    fn hand_at(x: f32, y: f32) -> LandmarkSet {
        let mut points = vec![Landmark::new(x, y); 21];
        points[HAND_REFERENCE] = Landmark::new(x, y);
        LandmarkSet::new(points)
    }

    fn right_hand(x: f32, y: f32) -> FrameSnapshot {
        FrameSnapshot {
            face: Some(face()),
            left_hand: None,
            right_hand: Some(hand_at(x, y)),
        }
    }

    #[test]
    fn test_prep_signals_camera_once() {
        let mut session = session(BattleConfig::default());
        session.enter_prep(Level::Office);
        assert_eq!(session.music().calls, vec![MusicCall::Start(MusicMode::Prep)]);
        assert_eq!(session.battle().phase(), Phase::Prep);

        session.process_frame(&FrameSnapshot::default(), 0.0);
        let presenter = session.battle().presenter();
        assert_eq!(presenter.count(|c| matches!(c, UiCall::CameraReady)), 0);

        for i in 1..4 {
            session.process_frame(&right_hand(0.5, 0.5), i as f64 * 33.0);
        }
        let presenter = session.battle().presenter();
        assert_eq!(presenter.count(|c| matches!(c, UiCall::CameraReady)), 1);
    }

    #[test]
    fn test_start_uses_chosen_level_and_difficulty() {
        let mut session = session(BattleConfig::default());
        session.set_difficulty(Difficulty::Hard);
        session.enter_prep(Level::Office);
        session.start_battle(GameMode::Story);

        assert_eq!(session.battle().phase(), Phase::Idle);
        assert_eq!(session.battle().enemy_hp(), 1000);
        assert_eq!(session.battle().boss_assets().name, "ANNOYING BOSS");
        assert_eq!(
            session.music().calls.last(),
            Some(&MusicCall::Start(MusicMode::Battle))
        );
    }

    #[test]
    fn test_swing_frames_slap_enemy() {
        let mut session = session(BattleConfig::default());
        session.enter_prep(Level::Street);
        session.start_battle(GameMode::Story);

        session.process_frame(&right_hand(0.3, 0.5), 1000.0);
        session.process_frame(&right_hand(0.4, 0.5), 1033.0);

        assert_eq!(session.battle().enemy_hp(), 495);
        assert_eq!(session.battle().combo_count(), 1);
        let presenter = session.battle().presenter();
        assert_eq!(presenter.count(|c| matches!(c, UiCall::Whoosh)), 1);
    }

    #[test]
    fn test_frames_ignored_in_menu() {
        let mut session = session(BattleConfig::default());
        session.process_frame(&right_hand(0.3, 0.5), 1000.0);
        session.process_frame(&right_hand(0.4, 0.5), 1033.0);

        assert!(session.battle().presenter().calls.is_empty());
        assert_eq!(session.classifier().trail(Hand::Right).len(), 0);
    }

    #[test]
    fn test_reveal_stops_music() {
        let mut session = session(BattleConfig {
            enemy_max_hp_easy: 5,
            ..Default::default()
        });
        session.enter_prep(Level::Street);
        session.start_battle(GameMode::Story);

        session.process_frame(&right_hand(0.3, 0.5), 1000.0);
        session.process_frame(&right_hand(0.4, 0.5), 1033.0);
        assert_eq!(session.battle().phase(), Phase::Victory);
        assert_ne!(session.music().calls.last(), Some(&MusicCall::Stop));

        session.process_frame(&right_hand(0.4, 0.5), 3033.0);
        assert_eq!(session.music().calls.last(), Some(&MusicCall::Stop));
        let presenter = session.battle().presenter();
        assert_eq!(presenter.count(|c| matches!(c, UiCall::VictoryScreen)), 1);
    }

    #[test]
    fn test_return_to_menu_stops_music() {
        let mut session = session(BattleConfig::default());
        session.enter_prep(Level::Street);
        session.start_battle(GameMode::Story);
        session.return_to_menu();

        assert_eq!(session.battle().phase(), Phase::Menu);
        assert_eq!(session.music().calls.last(), Some(&MusicCall::Stop));
    }
}
