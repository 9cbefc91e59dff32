//! Rules configuration and loader.
//!
//! Several rule sets have been played over the life of the game. They differ in whether
//! a failed challenge always hurts, whether successes earn experience, and whether the
//! hero can level up. Rather than pick one, the rules are read from `rules.toml` at
//! startup, with the full rule set as the fallback.

use anyhow::{Context, Result};
use log::{info, warn};
use quest_data::RoomId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the next room is chosen each turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovementMode {
    /// Ask the player, falling back to a random exit on bad input.
    #[default]
    Interactive,
    /// Roll among the two `auto_targets` and a backtrack.
    Automatic,
}

/// Which treasures can be found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TreasureTable {
    /// Any treasure in the world, uniformly.
    #[default]
    Assorted,
    /// Only the first treasure (Gold).
    GoldOnly,
}

/// Complete rules configuration for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Minimum damage from a failed challenge (0 means no damage unless the gap is positive).
    pub damage_floor: u32,
    /// Whether overcoming a challenge grants experience.
    pub awards_experience: bool,
    /// Whether experience can raise the hero's level.
    pub supports_leveling: bool,
    pub movement: MovementMode,
    pub treasure_table: TreasureTable,
    /// The two rooms automatic movement may jump to.
    pub auto_targets: [RoomId; 2],
    /// Seed for a reproducible game. Drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl RulesConfig {
    /// Damage floor of 1, experience and leveling on.
    pub fn full() -> RulesConfig {
        RulesConfig {
            damage_floor: 1,
            awards_experience: true,
            supports_leveling: true,
            movement: MovementMode::Interactive,
            treasure_table: TreasureTable::Assorted,
            auto_targets: [3, 5],
            seed: None,
        }
    }

    /// Damage only when the gap is positive, no experience, no leveling.
    pub fn classic() -> RulesConfig {
        RulesConfig {
            damage_floor: 0,
            awards_experience: false,
            supports_leveling: false,
            ..RulesConfig::full()
        }
    }

    pub fn with_movement(mut self, movement: MovementMode) -> RulesConfig {
        self.movement = movement;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> RulesConfig {
        self.seed = Some(seed);
        self
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig::full()
    }
}

/// Wrapper for the TOML file containing the rules table.
#[derive(Debug, Deserialize)]
struct RulesFile {
    #[serde(default)]
    rules: RulesConfig,
}

/// Loads rules from a TOML file, falling back to [`RulesConfig::full`] on error.
///
/// # Logging
/// - `info!` on successful load
/// - `warn!` if the file cannot be read or parsed
pub fn load_rules(toml_path: &Path) -> RulesConfig {
    match try_load_rules(toml_path) {
        Ok(rules) => {
            info!("rules loaded from '{}': {rules:?}", toml_path.display());
            rules
        },
        Err(e) => {
            warn!(
                "Could not load rules from '{}': {:#}. Using full rules.",
                toml_path.display(),
                e
            );
            RulesConfig::full()
        },
    }
}

/// Attempts to load rules from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if `damage_floor` is not 0 or 1.
pub fn try_load_rules(toml_path: &Path) -> Result<RulesConfig> {
    let rules_file =
        fs::read_to_string(toml_path).with_context(|| format!("reading rules from '{}'", toml_path.display()))?;

    let wrapper: RulesFile =
        toml::from_str(&rules_file).with_context(|| format!("parsing rules from '{}'", toml_path.display()))?;

    if wrapper.rules.damage_floor > 1 {
        anyhow::bail!("damage_floor must be 0 or 1 (found {})", wrapper.rules.damage_floor);
    }
    Ok(wrapper.rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn rules_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn classic_differs_only_in_scoring_rules() {
        let classic = RulesConfig::classic();
        assert_eq!(classic.damage_floor, 0);
        assert!(!classic.awards_experience);
        assert!(!classic.supports_leveling);
        assert_eq!(classic.movement, RulesConfig::full().movement);
        assert_eq!(classic.auto_targets, RulesConfig::full().auto_targets);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = rules_file("[rules]\ndamage_floor = 0\nmovement = \"automatic\"\nseed = 99\n");
        let rules = try_load_rules(file.path()).unwrap();
        assert_eq!(rules.damage_floor, 0);
        assert_eq!(rules.movement, MovementMode::Automatic);
        assert_eq!(rules.seed, Some(99));
        assert!(rules.awards_experience);
        assert_eq!(rules.treasure_table, TreasureTable::Assorted);
    }

    #[test]
    fn bad_floor_is_rejected() {
        let file = rules_file("[rules]\ndamage_floor = 4\n");
        assert!(try_load_rules(file.path()).is_err());
        assert_eq!(load_rules(file.path()), RulesConfig::full());
    }

    #[test]
    fn missing_file_falls_back() {
        let rules = load_rules(Path::new("/definitely/not/here/rules.toml"));
        assert_eq!(rules, RulesConfig::full());
    }

    #[test]
    fn malformed_file_falls_back() {
        let file = rules_file("[rules\nthis is not toml");
        assert_eq!(load_rules(file.path()), RulesConfig::full());
    }

    #[test]
    fn shipped_rules_parse() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/rules.toml");
        let rules = try_load_rules(&path).unwrap();
        assert_eq!(rules.movement, MovementMode::Interactive);
        assert_eq!(rules.damage_floor, 1);
    }
}
