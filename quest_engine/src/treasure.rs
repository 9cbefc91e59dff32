//! Treasure rolls.
//!
//! Every turn the hero has a small chance of finding a treasure that permanently raises
//! one attribute. Treasures are applied on the spot and never stored.

use log::info;
use quest_data::{StatKind, TreasureDef};
use rand::Rng;

use crate::hero::Hero;

/// Chance out of 100 that a turn turns up treasure.
pub const TREASURE_CHANCE_PERCENT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Treasure {
    pub name: String,
    pub stat: StatKind,
    pub bonus: u32,
}
impl Treasure {
    /// Effect tag shown to the player, e.g. "+5 Strength".
    pub fn effect(&self) -> String {
        format!("+{} {}", self.bonus, self.stat.as_str())
    }

    /// Apply this treasure's bonus to the hero.
    pub fn apply(&self, hero: &mut Hero) {
        hero.boost(self.stat, self.bonus);
        info!("treasure '{}' applied ({})", self.name, self.effect());
    }
}
impl From<&TreasureDef> for Treasure {
    fn from(def: &TreasureDef) -> Self {
        Treasure {
            name: def.name.clone(),
            stat: def.stat,
            bonus: def.bonus,
        }
    }
}

/// Draw 1..=100; at or below [`TREASURE_CHANCE_PERCENT`] pick one entry of `table` uniformly.
/// The only randomness used is the supplied generator.
pub fn roll_treasure(rng: &mut impl Rng, table: &[Treasure]) -> Option<Treasure> {
    let chance: u32 = rng.random_range(1..=100);
    if chance > TREASURE_CHANCE_PERCENT || table.is_empty() {
        return None;
    }
    let pick = rng.random_range(0..table.len());
    table.get(pick).cloned()
}
