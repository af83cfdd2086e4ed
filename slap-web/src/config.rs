//! Game tuning loaded from JSON.
//!
//! Every field is optional; anything left out keeps its default.

use serde::Deserialize;

use crate::battle::BattleConfig;
use crate::error::GameError;
use crate::gestures::GestureConfig;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub battle: BattleConfig,
    pub gestures: GestureConfig,
}

impl GameConfig {
    /// Parse and validate
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.battle.validate()?;
        self.gestures.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "battle": { "slap_damage": 8, "attack_delay_hard_ms": [500.0, 900.0] },
            "gestures": { "slap_threshold": 0.07 }
        }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.battle.slap_damage, 8);
        assert_eq!(config.battle.attack_delay_hard_ms, (500.0, 900.0));
        assert_eq!(config.battle.player_max_hp, 100);
        assert!((config.gestures.slap_threshold - 0.07).abs() < 1e-6);
        assert!((config.gestures.clap_distance - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ battle: "),
            Err(GameError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_unknown_field() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "battle": { "slap_dammage": 8 } }"#),
            Err(GameError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_out_of_range_value() {
        let err = GameConfig::from_json(r#"{ "battle": { "special_skill_chance": -0.1 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidConfig { field: "battle.special_skill_chance", .. }
        ));

        assert!(matches!(
            GameConfig::from_json(r#"{ "gestures": { "block_distance": 0.0 } }"#),
            Err(GameError::InvalidConfig { .. })
        ));
    }
}
