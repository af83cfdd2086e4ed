//! Battle state machine
//!
//! Owns all combat state for one play session. Gesture events arrive as
//! method calls; the enemy acts on its own schedule driven by `update`.
//! Anything delayed goes through the [`Timeline`] and is re-validated
//! against the current generation and phase before it touches state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::assets::BossAssets;
use super::config::BattleConfig;
use super::presenter::{Presenter, ScreenPoint, Tint};
use super::timeline::{Effect, Timeline};
use super::types::{BattleOutcome, Difficulty, GameMode, Level, Phase};
use crate::tracking::Side;

// ============================================================================
// SCREEN ANCHORS (viewport fractions)
// ============================================================================

const CENTER: (f32, f32) = (0.5, 0.5);
const SLAP_SPARKS: (f32, f32) = (0.5, 0.45);
const SLAP_TEXT: (f32, f32) = (0.5, 0.35);
const HURRICANE_TEXT: (f32, f32) = (0.5, 0.45);
const PLAYER_TEXT: (f32, f32) = (0.25, 0.5);

fn at((x, y): (f32, f32)) -> ScreenPoint {
    ScreenPoint::new(x, y)
}

pub struct BattleSystem<P: Presenter> {
    config: BattleConfig,
    presenter: P,
    rng: ChaCha8Rng,
    timeline: Timeline,

    phase: Phase,
    difficulty: Difficulty,
    assets: BossAssets,

    player_hp: i32,
    enemy_hp: i32,
    enemy_max_hp: i32,

    combo_count: u32,
    last_hit_time: Option<f64>,

    is_blocking: bool,
    block_start_time: f64,

    last_ultimate_time: Option<f64>,
    next_attack_time: Option<f64>,
}

impl<P: Presenter> BattleSystem<P> {
    /// `config` is expected to be validated already.
    pub fn new(config: BattleConfig, presenter: P, seed: u64) -> Self {
        let player_hp = config.player_max_hp;
        let enemy_max_hp = config.enemy_max_hp(Difficulty::Easy);
        Self {
            config,
            presenter,
            rng: ChaCha8Rng::seed_from_u64(seed),
            timeline: Timeline::new(),
            phase: Phase::Menu,
            difficulty: Difficulty::Easy,
            assets: BossAssets::for_level(Level::Street),
            player_hp,
            enemy_hp: enemy_max_hp,
            enemy_max_hp,
            combo_count: 0,
            last_hit_time: None,
            is_blocking: false,
            block_start_time: 0.0,
            last_ultimate_time: None,
            next_attack_time: None,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Anything but the main menu; gestures are only read while active
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Menu
    }

    pub fn player_hp(&self) -> i32 {
        self.player_hp
    }

    pub fn enemy_hp(&self) -> i32 {
        self.enemy_hp
    }

    pub fn enemy_max_hp(&self) -> i32 {
        self.enemy_max_hp
    }

    pub fn combo_count(&self) -> u32 {
        self.combo_count
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_blocking(&self) -> bool {
        self.is_blocking
    }

    pub fn next_attack_time(&self) -> Option<f64> {
        self.next_attack_time
    }

    pub fn boss_assets(&self) -> &BossAssets {
        &self.assets
    }

    pub fn generation(&self) -> u64 {
        self.timeline.generation()
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Reset everything and begin a fresh fight. Safe to call again after
    /// Victory or Defeat; effects queued by the previous run are dropped.
    pub fn start(&mut self, mode: GameMode, level: Level, difficulty: Difficulty) {
        let generation = self.timeline.next_generation();

        self.phase = Phase::Idle;
        self.difficulty = difficulty;
        self.assets = BossAssets::for_level(level);

        self.player_hp = self.config.player_max_hp;
        self.enemy_max_hp = self.config.enemy_max_hp(difficulty);
        self.enemy_hp = self.enemy_max_hp;

        self.combo_count = 0;
        self.last_hit_time = None;
        self.is_blocking = false;
        self.last_ultimate_time = None;
        self.next_attack_time = None;

        self.presenter.update_combo(0);
        self.presenter
            .update_health(self.player_hp, self.enemy_hp, self.enemy_max_hp);
        self.presenter.update_boss_name(self.assets.name);
        self.presenter.set_boss_image(self.assets.normal);

        info!(?mode, ?level, ?difficulty, generation, "battle started");
    }

    /// Pre-battle camera check; owned by the page, no combat happens here
    pub fn enter_prep(&mut self) {
        self.timeline.next_generation();
        self.phase = Phase::Prep;
        self.is_blocking = false;
        self.next_attack_time = None;
    }

    pub fn return_to_menu(&mut self) {
        self.timeline.next_generation();
        self.phase = Phase::Menu;
        self.is_blocking = false;
        self.next_attack_time = None;
    }

    // ========================================================================
    // CLOCK
    // ========================================================================

    /// Run every deferred effect due at `now`.
    ///
    /// Returns the outcome whose end screen was revealed, if any.
    pub fn advance(&mut self, now: f64) -> Option<BattleOutcome> {
        let mut outcome = None;
        while let Some((due, effect)) = self.timeline.pop_due(now) {
            if let Some(revealed) = self.apply(effect, due) {
                outcome = Some(revealed);
            }
        }
        outcome
    }

    /// Per-frame tick: deferred effects, then the enemy attack schedule.
    pub fn update(&mut self, now: f64) -> Option<BattleOutcome> {
        let outcome = self.advance(now);

        if self.phase == Phase::Idle {
            let next = match self.next_attack_time {
                Some(next) => next,
                None => self.schedule_next_attack(now),
            };
            if now >= next {
                self.start_enemy_attack(now);
            }
        }

        outcome
    }

    fn apply(&mut self, effect: Effect, now: f64) -> Option<BattleOutcome> {
        match effect {
            Effect::RevertHurt => {
                if self.phase == Phase::Idle {
                    self.presenter.set_boss_image(self.assets.normal);
                }
            }
            Effect::SkillFrame(frame) => {
                if self.phase == Phase::EnemyAttack {
                    if let Some(image) = self.assets.skills.and_then(|s| s.get(frame).copied()) {
                        self.presenter.set_boss_image(image);
                    }
                }
            }
            Effect::ResolveAttack => self.resolve_enemy_attack(now),
            Effect::RevealVictory => {
                if self.phase == Phase::Victory {
                    self.presenter.show_victory_screen();
                    return Some(BattleOutcome::Victory);
                }
            }
            Effect::RevealDefeat => {
                if self.phase == Phase::Defeat {
                    self.presenter.show_defeat_screen();
                    return Some(BattleOutcome::Defeat);
                }
            }
        }
        None
    }

    // ========================================================================
    // PLAYER ACTIONS
    // ========================================================================

    /// Subtract from enemy HP; true if that was lethal
    fn damage_enemy(&mut self, amount: i32) -> bool {
        self.enemy_hp -= amount;
        let lethal = self.enemy_hp <= 0;
        self.enemy_hp = self.enemy_hp.max(0);
        self.presenter
            .update_health(self.player_hp, self.enemy_hp, self.enemy_max_hp);
        lethal
    }

    fn show_hurt(&mut self, now: f64, revert_after_ms: f64) {
        self.presenter.set_boss_image(self.assets.hurt);
        self.timeline.schedule(now, revert_after_ms, Effect::RevertHurt);
    }

    pub fn on_slap(&mut self, direction: Side, now: f64) {
        if self.phase != Phase::Idle {
            return;
        }

        if self.rng.random_bool(self.config.evasion_chance) {
            let dodge = if self.rng.random_bool(0.5) {
                Side::Left
            } else {
                Side::Right
            };
            self.presenter.play_boss_dodge_animation(dodge);

            if direction == dodge {
                self.presenter.show_feedback("GOTCHA!", Tint::Cyan);
            } else {
                debug!(direction = direction.as_str(), dodge = dodge.as_str(), "slap evaded");
                self.presenter.show_feedback("MISSED!", Tint::Orange);
                self.combo_count = 0;
                self.presenter.update_combo(0);
                return;
            }
        }

        let damage = self.config.slap_damage;
        let lethal = self.damage_enemy(damage);
        self.show_hurt(now, self.config.slap_hurt_ms);

        // Pitch climbs with the combo, capped at 2x
        let pitch = 1.0 + self.combo_count.min(10) as f32 * 0.1;
        self.presenter.play_slap_sound(pitch);

        self.presenter.trigger_flash();
        self.presenter.trigger_screen_shake();
        self.presenter.spawn_particles(at(SLAP_SPARKS), Tint::Blood);
        self.presenter
            .show_damage_text(&format!("-{damage}"), at(SLAP_TEXT), Tint::Crimson);

        let in_window = self
            .last_hit_time
            .is_some_and(|t| now - t < self.config.combo_window_ms);
        self.combo_count = if in_window { self.combo_count + 1 } else { 1 };
        self.last_hit_time = Some(now);
        self.presenter.update_combo(self.combo_count);

        if lethal {
            self.on_win(now);
        }
    }

    pub fn on_ultimate(&mut self, now: f64) {
        if self
            .last_ultimate_time
            .is_some_and(|t| now - t < self.config.ultimate_cooldown_ms)
        {
            return;
        }
        if !matches!(self.phase, Phase::Idle | Phase::EnemyAttack) {
            return;
        }
        self.last_ultimate_time = Some(now);

        self.presenter.trigger_ultimate_visuals();
        self.presenter.spawn_shockwave(at(CENTER));
        self.presenter.trigger_screen_shake();

        let damage = self.config.ultimate_damage;
        let lethal = self.damage_enemy(damage);
        self.presenter
            .show_damage_text(&format!("-{damage}"), at(CENTER), Tint::Gold);
        self.presenter.play_slap_sound(2.0);
        self.show_hurt(now, self.config.ultimate_hurt_ms);
        self.presenter.spawn_particles(at(CENTER), Tint::Gold);

        if lethal {
            self.on_win(now);
        } else {
            // Stuns the enemy and buys the player some breathing room
            self.phase = Phase::Idle;
            self.next_attack_time = Some(now + self.config.ultimate_breather_ms);
        }
    }

    /// Cooldown is enforced by the gesture classifier, not here
    pub fn on_hurricane(&mut self, now: f64) {
        if !matches!(self.phase, Phase::Idle | Phase::EnemyAttack) {
            return;
        }

        self.presenter.show_feedback("HURRICANE!", Tint::Cyan);
        self.presenter.trigger_screen_shake();
        self.presenter.spawn_particles(at(CENTER), Tint::Cyan);
        self.presenter.spawn_typhoon();

        let damage = self.config.hurricane_damage;
        let lethal = self.damage_enemy(damage);
        self.presenter
            .show_damage_text(&format!("-{damage}"), at(HURRICANE_TEXT), Tint::Cyan);
        self.presenter.play_slap_sound(1.5);
        self.show_hurt(now, self.config.hurricane_hurt_ms);

        if lethal {
            self.on_win(now);
        }
    }

    /// Edge-triggered: the hold timer only starts on false -> true
    pub fn set_blocking(&mut self, active: bool, now: f64) {
        if active {
            if !self.is_blocking {
                self.is_blocking = true;
                self.block_start_time = now;
            }
        } else {
            self.is_blocking = false;
        }
    }

    // ========================================================================
    // ENEMY
    // ========================================================================

    fn schedule_next_attack(&mut self, now: f64) -> f64 {
        let delay = self.rng.random_range(self.config.attack_delay(self.difficulty));
        let next = now + delay;
        self.next_attack_time = Some(next);
        next
    }

    fn start_enemy_attack(&mut self, now: f64) {
        self.phase = Phase::EnemyAttack;
        self.presenter.show_feedback("ATTACKING!", Tint::Red);

        let skills = self.assets.skills;
        let use_special =
            skills.is_some() && self.rng.random_bool(self.config.special_skill_chance);
        debug!(use_special, "enemy attack started");

        match skills {
            Some(frames) if use_special => {
                self.presenter.show_feedback("SPECIAL ART!", Tint::Purple);
                self.presenter.set_boss_image(frames[0]);
                let interval = self.config.skill_frame_interval_ms;
                self.timeline.schedule(now, interval, Effect::SkillFrame(1));
                self.timeline.schedule(now, interval * 2.0, Effect::SkillFrame(2));
            }
            _ => self.presenter.set_boss_image(self.assets.attack),
        }

        // Bosses animate their own skill; the generic hand overlay is for the basic enemy
        self.presenter.play_boss_slap_animation(skills.is_none());

        self.next_attack_time = None;
        self.timeline
            .schedule(now, self.config.attack_windup_ms, Effect::ResolveAttack);
    }

    fn resolve_enemy_attack(&mut self, now: f64) {
        if self.phase != Phase::EnemyAttack {
            return;
        }

        let mut blocked = false;
        if self.is_blocking {
            if now - self.block_start_time < self.config.max_block_hold_ms {
                blocked = true;
            } else {
                self.presenter
                    .show_feedback("GUARD BROKEN! (Too Long)", Tint::Orange);
                self.combo_count = 0;
                self.presenter.update_combo(0);
            }
        }

        if blocked {
            debug!("enemy attack blocked");
            self.presenter.show_feedback("BLOCKED!", Tint::Blue);
            self.presenter.spawn_particles(at(CENTER), Tint::Cyan);
            self.phase = Phase::Idle;
            self.presenter.set_boss_image(self.assets.normal);
            return;
        }

        let damage = self.config.enemy_attack_damage;
        self.player_hp -= damage;
        let lethal = self.player_hp <= 0;
        self.player_hp = self.player_hp.max(0);
        self.presenter
            .show_damage_text(&format!("-{damage}"), at(PLAYER_TEXT), Tint::Red);
        self.presenter
            .update_health(self.player_hp, self.enemy_hp, self.enemy_max_hp);
        debug!(player_hp = self.player_hp, "player hit");

        if lethal {
            self.on_defeat(now);
        } else {
            self.phase = Phase::Idle;
            self.presenter.set_boss_image(self.assets.normal);
        }
    }

    // ========================================================================
    // ENDINGS
    // ========================================================================

    fn on_win(&mut self, now: f64) {
        self.phase = Phase::Victory;
        self.presenter.set_boss_image(self.assets.lose);
        info!(enemy = self.assets.name, "battle won");
        // Let the defeated face show before the end screen
        self.timeline
            .schedule(now, self.config.victory_reveal_ms, Effect::RevealVictory);
    }

    fn on_defeat(&mut self, now: f64) {
        self.phase = Phase::Defeat;
        self.presenter.show_feedback("YOU DIED!", Tint::Black);
        self.presenter.set_boss_image(self.assets.win);
        info!(enemy = self.assets.name, "battle lost");
        self.timeline
            .schedule(now, self.config.defeat_reveal_ms, Effect::RevealDefeat);
    }
}
