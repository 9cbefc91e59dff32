//! Data structures representing the game world.
//!
//! This module defines [`QuestWorld`], built once from a [`WorldDef`] and then
//! mutated throughout play.

use crate::challenge::{Challenge, ChallengeIndex};
use crate::hero::Hero;
use crate::inventory::Inventory;
use crate::path::PathTracker;
use crate::room::{Room, RoomGraph};
use crate::rules::{RulesConfig, TreasureTable};
use crate::treasure::Treasure;

use anyhow::{Context, Result, bail};
use log::info;
use quest_data::{RoomId, WorldDef, validate_world};

/// Complete state of the running game.
#[derive(Debug, Clone)]
pub struct QuestWorld {
    pub title: String,
    pub intro: String,
    pub hero: Hero,
    pub inventory: Inventory,
    pub graph: RoomGraph,
    pub challenges: ChallengeIndex,
    pub treasures: Vec<Treasure>,
    pub path: PathTracker,
    pub current_room: RoomId,
    pub exit_room: RoomId,
    pub rules: RulesConfig,
}
impl QuestWorld {
    pub fn at_exit(&self) -> bool {
        self.current_room == self.exit_room
    }
}

/// Build a [`QuestWorld`] from content definitions under the given rules.
///
/// # Errors
/// - if the content fails validation (dangling exits, unknown start or exit room)
pub fn build_world(def: &WorldDef, rules: RulesConfig) -> Result<QuestWorld> {
    let problems = validate_world(def);
    if !problems.is_empty() {
        let listing: Vec<String> = problems.iter().map(ToString::to_string).collect();
        bail!("world '{}' failed validation: {}", def.game.title, listing.join("; "));
    }

    let graph = RoomGraph::new(def.rooms.iter().map(Room::from)).context("while building room graph")?;
    info!("{} rooms added to QuestWorld", graph.len());

    let challenges: ChallengeIndex = def.challenges.iter().map(Challenge::from).collect();
    info!("{} challenges indexed (tree depth {})", challenges.len(), challenges.depth());

    let treasures: Vec<Treasure> = match rules.treasure_table {
        TreasureTable::Assorted => def.treasures.iter().map(Treasure::from).collect(),
        TreasureTable::GoldOnly => def.treasures.iter().take(1).map(Treasure::from).collect(),
    };
    info!("{} treasures in play", treasures.len());

    let hero = Hero::from_def(&def.game.hero, rules.supports_leveling);
    let inventory = Inventory::with_items(def.game.hero.starting_items.iter().cloned());
    let start = def.game.start_room;
    info!("hero placed in room {start}, exit is room {}", def.game.exit_room);

    Ok(QuestWorld {
        title: def.game.title.clone(),
        intro: def.game.intro.clone(),
        hero,
        inventory,
        graph,
        challenges,
        treasures,
        path: PathTracker::starting_at(start),
        current_room: start,
        exit_room: def.game.exit_room,
        rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_data::{ChallengeKind, hero_quest};

    #[test]
    fn builtin_world_builds() {
        let world = build_world(&hero_quest(), RulesConfig::full()).unwrap();
        assert_eq!(world.current_room, 1);
        assert_eq!(world.exit_room, 5);
        assert_eq!(world.path.current_path(), &[1]);
        assert_eq!(world.inventory.to_vec(), vec!["Sword", "Health Potion"]);
        assert_eq!(world.treasures.len(), 3);
        assert_eq!(world.challenges.lookup(1), None);
        assert_eq!(world.challenges.lookup(2).map(|c| c.kind), Some(ChallengeKind::Trap));
        assert_eq!(world.challenges.lookup(5).map(|c| c.kind), Some(ChallengeKind::Boss));
    }

    #[test]
    fn gold_only_keeps_first_treasure() {
        let mut rules = RulesConfig::classic();
        rules.treasure_table = TreasureTable::GoldOnly;
        let world = build_world(&hero_quest(), rules).unwrap();
        let names: Vec<_> = world.treasures.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Gold"]);
    }

    #[test]
    fn broken_content_is_rejected() {
        let mut def = hero_quest();
        def.rooms[4].exits.push(42);
        let err = build_world(&def, RulesConfig::full()).unwrap_err();
        assert!(err.to_string().contains("missing room 42"));
    }
}
