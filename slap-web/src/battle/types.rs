//! Battle enums shared by the state machine, the session and the bridge.

use std::str::FromStr;

use crate::error::GameError;

/// Current discrete state of the battle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Menu,
    Prep,
    Idle,
    EnemyAttack,
    Victory,
    Defeat,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Menu => "MENU",
            Phase::Prep => "PREP",
            Phase::Idle => "IDLE",
            Phase::EnemyAttack => "ENEMY_ATTACK",
            Phase::Victory => "VICTORY",
            Phase::Defeat => "DEFEAT",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EASY" => Ok(Difficulty::Easy),
            "HARD" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Stage picked on the level select screen; decides which enemy shows up
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Level {
    #[default]
    Street,
    Office,
}

impl FromStr for Level {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STREET" => Ok(Level::Street),
            "OFFICE" => Ok(Level::Office),
            _ => Err(GameError::UnknownLevel(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    Story,
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STORY" => Ok(GameMode::Story),
            _ => Err(GameError::UnknownMode(s.to_string())),
        }
    }
}

/// How a battle ended, reported once the reveal animation is over
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("OFFICE".parse::<Level>().unwrap(), Level::Office);
        assert_eq!("Story".parse::<GameMode>().unwrap(), GameMode::Story);
    }

    #[test]
    fn test_parse_unknown_names() {
        assert!(matches!(
            "NIGHTMARE".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty(name)) if name == "NIGHTMARE"
        ));
        assert!("MOON".parse::<Level>().is_err());
        assert!("ARCADE".parse::<GameMode>().is_err());
    }
}
