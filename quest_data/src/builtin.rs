//! The hard-coded Hero's Quest world.

use crate::defs::{ChallengeDef, ChallengeKind, GameDef, HeroDef, RoomDef, StatKind, TreasureDef, WorldDef};

/// Name of the only item the engine knows how to consume.
pub const HEALTH_POTION: &str = "Health Potion";

/// Build the five-room Hero's Quest world.
pub fn hero_quest() -> WorldDef {
    WorldDef {
        game: GameDef {
            title: "Hero's Quest".into(),
            intro: "Navigate the rooms, survive what waits inside them, and reach the swamp alive.".into(),
            hero: HeroDef {
                strength: 5,
                agility: 7,
                intelligence: 8,
                starting_items: vec!["Sword".into(), HEALTH_POTION.into()],
            },
            start_room: 1,
            exit_room: 5,
        },
        rooms: vec![
            room(1, "You are in a dark, cold dungeon.", &[2, 3]),
            room(2, "You are in an eerie forest clearing.", &[1, 4]),
            room(3, "You are standing before a massive cave entrance.", &[1, 5]),
            room(4, "You entered an ancient temple.", &[2]),
            room(5, "You are in a misty swamp.", &[3]),
        ],
        challenges: vec![
            ChallengeDef {
                difficulty: 2,
                kind: ChallengeKind::Trap,
            },
            ChallengeDef {
                difficulty: 3,
                kind: ChallengeKind::Combat,
            },
            ChallengeDef {
                difficulty: 4,
                kind: ChallengeKind::Puzzle,
            },
            ChallengeDef {
                difficulty: 5,
                kind: ChallengeKind::Boss,
            },
        ],
        treasures: vec![
            treasure("Gold", StatKind::Strength),
            treasure("Ancient Tome", StatKind::Intelligence),
            treasure("Boots of Speed", StatKind::Agility),
        ],
    }
}

fn room(id: u32, desc: &str, exits: &[u32]) -> RoomDef {
    RoomDef {
        id,
        desc: desc.to_string(),
        exits: exits.to_vec(),
    }
}

fn treasure(name: &str, stat: StatKind) -> TreasureDef {
    TreasureDef {
        name: name.to_string(),
        stat,
        bonus: 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_world;

    #[test]
    fn builtin_world_is_valid() {
        let world = hero_quest();
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn challenges_keep_insertion_order() {
        let difficulties: Vec<_> = hero_quest().challenges.iter().map(|c| c.difficulty).collect();
        assert_eq!(difficulties, vec![2, 3, 4, 5]);
    }

    #[test]
    fn hero_starts_with_sword_then_potion() {
        let hero = hero_quest().game.hero;
        assert_eq!(hero.starting_items, vec!["Sword".to_string(), HEALTH_POTION.to_string()]);
    }
}
