//! Combat tuning. All times are milliseconds.

use std::ops::Range;

use serde::Deserialize;

use super::types::Difficulty;
use crate::error::GameError;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BattleConfig {
    pub player_max_hp: i32,
    pub enemy_max_hp_easy: i32,
    pub enemy_max_hp_hard: i32,

    pub slap_damage: i32,
    pub hurricane_damage: i32,
    pub ultimate_damage: i32,
    pub enemy_attack_damage: i32,

    /// Chance that the enemy tries to dodge an incoming slap
    pub evasion_chance: f64,
    /// Chance that a boss with skills uses its special art
    pub special_skill_chance: f64,

    /// Max gap between hits that keeps a combo alive
    pub combo_window_ms: f64,
    /// Block stops working once held this long
    pub max_block_hold_ms: f64,
    pub ultimate_cooldown_ms: f64,
    /// Extra delay before the next enemy attack after an ultimate
    pub ultimate_breather_ms: f64,

    /// Delay between the attack wind-up and its resolution
    pub attack_windup_ms: f64,
    pub skill_frame_interval_ms: f64,
    /// Enemy attack delay window, [min, max)
    pub attack_delay_easy_ms: (f64, f64),
    pub attack_delay_hard_ms: (f64, f64),

    pub slap_hurt_ms: f64,
    pub hurricane_hurt_ms: f64,
    pub ultimate_hurt_ms: f64,
    pub victory_reveal_ms: f64,
    pub defeat_reveal_ms: f64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            player_max_hp: 100,
            enemy_max_hp_easy: 500,
            enemy_max_hp_hard: 1000,
            slap_damage: 5,
            hurricane_damage: 15,
            ultimate_damage: 30,
            enemy_attack_damage: 10,
            evasion_chance: 0.3,
            special_skill_chance: 0.4,
            combo_window_ms: 2000.0,
            max_block_hold_ms: 2000.0,
            ultimate_cooldown_ms: 10000.0,
            ultimate_breather_ms: 3000.0,
            attack_windup_ms: 1400.0,
            skill_frame_interval_ms: 400.0,
            attack_delay_easy_ms: (2000.0, 4000.0),
            attack_delay_hard_ms: (800.0, 2000.0),
            slap_hurt_ms: 500.0,
            hurricane_hurt_ms: 800.0,
            ultimate_hurt_ms: 1000.0,
            victory_reveal_ms: 2000.0,
            defeat_reveal_ms: 1000.0,
        }
    }
}

impl BattleConfig {
    pub fn enemy_max_hp(&self, difficulty: Difficulty) -> i32 {
        match difficulty {
            Difficulty::Easy => self.enemy_max_hp_easy,
            Difficulty::Hard => self.enemy_max_hp_hard,
        }
    }

    pub fn attack_delay(&self, difficulty: Difficulty) -> Range<f64> {
        let (min, max) = match difficulty {
            Difficulty::Easy => self.attack_delay_easy_ms,
            Difficulty::Hard => self.attack_delay_hard_ms,
        };
        min..max
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let hp = [
            ("battle.player_max_hp", self.player_max_hp),
            ("battle.enemy_max_hp_easy", self.enemy_max_hp_easy),
            ("battle.enemy_max_hp_hard", self.enemy_max_hp_hard),
        ];
        for (field, value) in hp {
            if value <= 0 {
                return Err(GameError::invalid(field, format!("{value} must be positive")));
            }
        }

        let damage = [
            ("battle.slap_damage", self.slap_damage),
            ("battle.hurricane_damage", self.hurricane_damage),
            ("battle.ultimate_damage", self.ultimate_damage),
            ("battle.enemy_attack_damage", self.enemy_attack_damage),
        ];
        for (field, value) in damage {
            if value <= 0 {
                return Err(GameError::invalid(field, format!("{value} must be positive")));
            }
        }

        let periods = [
            ("battle.combo_window_ms", self.combo_window_ms),
            ("battle.max_block_hold_ms", self.max_block_hold_ms),
            ("battle.ultimate_cooldown_ms", self.ultimate_cooldown_ms),
            ("battle.ultimate_breather_ms", self.ultimate_breather_ms),
            ("battle.attack_windup_ms", self.attack_windup_ms),
            ("battle.skill_frame_interval_ms", self.skill_frame_interval_ms),
            ("battle.slap_hurt_ms", self.slap_hurt_ms),
            ("battle.hurricane_hurt_ms", self.hurricane_hurt_ms),
            ("battle.ultimate_hurt_ms", self.ultimate_hurt_ms),
            ("battle.victory_reveal_ms", self.victory_reveal_ms),
            ("battle.defeat_reveal_ms", self.defeat_reveal_ms),
        ];
        for (field, value) in periods {
            // NaN fails this too
            if !(value >= 0.0) {
                return Err(GameError::invalid(field, format!("{value} must not be negative")));
            }
        }

        let chances = [
            ("battle.evasion_chance", self.evasion_chance),
            ("battle.special_skill_chance", self.special_skill_chance),
        ];
        for (field, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(GameError::invalid(field, format!("{value} is not a probability")));
            }
        }

        let delays = [
            ("battle.attack_delay_easy_ms", self.attack_delay_easy_ms),
            ("battle.attack_delay_hard_ms", self.attack_delay_hard_ms),
        ];
        for (field, (min, max)) in delays {
            if !(min >= 0.0 && min < max) {
                return Err(GameError::invalid(field, format!("[{min}, {max}) is empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BattleConfig::default();
        config.validate().unwrap();
        assert_eq!(config.enemy_max_hp(Difficulty::Easy), 500);
        assert_eq!(config.enemy_max_hp(Difficulty::Hard), 1000);
        assert_eq!(config.attack_delay(Difficulty::Hard), 800.0..2000.0);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = BattleConfig {
            evasion_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig { field: "battle.evasion_chance", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_or_nan_timing() {
        let config = BattleConfig {
            attack_windup_ms: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig { field: "battle.attack_windup_ms", .. })
        ));

        let config = BattleConfig {
            combo_window_ms: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig { field: "battle.combo_window_ms", .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_damage() {
        let config = BattleConfig {
            hurricane_damage: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig { field: "battle.hurricane_damage", .. })
        ));
    }

    #[test]
    fn test_rejects_empty_delay_window() {
        let config = BattleConfig {
            attack_delay_easy_ms: (3000.0, 3000.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
