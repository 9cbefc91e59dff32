use serde::{Deserialize, Serialize};

/// Numeric identifier of a room. Challenge difficulties share this number space.
pub type RoomId = u32;

/// Top-level world content consumed by the engine at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    /// Challenges in insertion order. Order determines the shape of the engine's index.
    #[serde(default)]
    pub challenges: Vec<ChallengeDef>,
    #[serde(default)]
    pub treasures: Vec<TreasureDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub hero: HeroDef,
    pub start_room: RoomId,
    pub exit_room: RoomId,
}

/// Starting stats and kit for the hero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroDef {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    #[serde(default)]
    pub starting_items: Vec<String>,
}

impl Default for HeroDef {
    fn default() -> Self {
        Self {
            strength: 1,
            agility: 1,
            intelligence: 1,
            starting_items: Vec::new(),
        }
    }
}

/// Room definition. `exits` lists directly reachable rooms in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: RoomId,
    pub desc: String,
    #[serde(default)]
    pub exits: Vec<RoomId>,
}

/// A stat-gated obstacle. `difficulty` is also the room number it is found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeDef {
    pub difficulty: u32,
    pub kind: ChallengeKind,
}

/// The kinds of challenge, each tested against a different stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengeKind {
    Combat,
    Trap,
    Puzzle,
    Boss,
}

impl ChallengeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChallengeKind::Combat => "Combat",
            ChallengeKind::Trap => "Trap",
            ChallengeKind::Puzzle => "Puzzle",
            ChallengeKind::Boss => "Boss",
        }
    }
}

/// A one-shot stat bonus the hero may stumble across.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureDef {
    pub name: String,
    pub stat: StatKind,
    pub bonus: u32,
}

/// Hero attributes that treasures may raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    Strength,
    Agility,
    Intelligence,
}

impl StatKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::Strength => "Strength",
            StatKind::Agility => "Agility",
            StatKind::Intelligence => "Intelligence",
        }
    }
}
