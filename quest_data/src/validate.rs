use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateRoom { id: RoomId },
    MissingRoom { id: RoomId, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateRoom { id } => write!(f, "duplicate room id {id}"),
            ValidationError::MissingRoom { id, context } => write!(f, "missing room {id} ({context})"),
            ValidationError::InvalidValue { context } => write!(f, "invalid value ({context})"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate room references and basic invariants in a `WorldDef`.
///
/// Duplicate challenge difficulties are legal: the engine's index routes ties to the right.
///
/// ```
/// use quest_data::{GameDef, HeroDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         hero: HeroDef::default(),
///         start_room: 1,
///         exit_room: 1,
///         ..GameDef::default()
///     },
///     rooms: vec![RoomDef { id: 1, desc: "A room.".into(), exits: Vec::new() }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "world has no rooms".to_string(),
        });
    }

    let mut rooms = HashSet::new();
    for room in &world.rooms {
        if !rooms.insert(room.id) {
            errors.push(ValidationError::DuplicateRoom { id: room.id });
        }
    }

    check_room(world.game.start_room, &rooms, "game start room".to_string(), &mut errors);
    check_room(world.game.exit_room, &rooms, "game exit room".to_string(), &mut errors);

    for room in &world.rooms {
        for exit in &room.exits {
            check_room(*exit, &rooms, format!("room {} exit", room.id), &mut errors);
        }
    }

    for treasure in &world.treasures {
        if treasure.bonus == 0 {
            errors.push(ValidationError::InvalidValue {
                context: format!("treasure '{}' grants no bonus", treasure.name),
            });
        }
    }

    errors
}

fn check_room(id: RoomId, rooms: &HashSet<RoomId>, context: String, errors: &mut Vec<ValidationError>) {
    if !rooms.contains(&id) {
        errors.push(ValidationError::MissingRoom { id, context });
    }
}
