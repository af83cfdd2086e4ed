//! Enemy image bundles, one per level.
//!
//! Identifiers are paths relative to the page's asset root; the page
//! resolves and preloads them.

use super::types::Level;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BossAssets {
    pub name: &'static str,
    pub normal: &'static str,
    pub attack: &'static str,
    pub hurt: &'static str,
    /// Shown when the enemy beats the player
    pub win: &'static str,
    /// Shown when the enemy is defeated
    pub lose: &'static str,
    /// Special-skill animation frames; only bosses have them
    pub skills: Option<[&'static str; 3]>,
}

impl BossAssets {
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Street => Self {
                name: "TOXIC AUNTIE",
                normal: "character/aunt/level1-character-normal.png",
                attack: "character/aunt/aunt-attack.png",
                hurt: "character/aunt/aunt-hurt.png",
                win: "character/aunt/level1-character_win.png",
                lose: "character/aunt/level1-character_lose.png",
                skills: None,
            },
            Level::Office => Self {
                name: "ANNOYING BOSS",
                normal: "character/boss/boss-normal.png",
                attack: "character/boss/boss-attack.png",
                hurt: "character/boss/boss-hurt.png",
                win: "character/boss/win.png",
                lose: "character/boss/boss-fail.png",
                skills: Some([
                    "character/boss/skill1.png",
                    "character/boss/skill2.png",
                    "character/boss/skill3.png",
                ]),
            },
        }
    }

    pub fn has_skills(&self) -> bool {
        self.skills.is_some()
    }
}
