//! Room definitions and the static map that connects them.
//!
//! Exits are one-way: room 4 may lead to room 2 without room 2 leading back.
//! Reciprocity is whatever the content says it is.

use std::collections::BTreeMap;

use quest_data::{RoomDef, RoomId};
use thiserror::Error;

/// Failed room lookups. These indicate broken content, not a player mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("room {0} is not on the map")]
    OutOfRange(RoomId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub description: String,
    /// Directly reachable rooms, in display order.
    pub exits: Vec<RoomId>,
}
impl From<&RoomDef> for Room {
    fn from(def: &RoomDef) -> Self {
        Room {
            id: def.id,
            description: def.desc.clone(),
            exits: def.exits.clone(),
        }
    }
}

/// Immutable adjacency map of rooms.
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: BTreeMap<RoomId, Room>,
}
impl RoomGraph {
    /// Build the graph, checking that every exit leads somewhere on the map.
    ///
    /// # Errors
    /// - `RoomError::OutOfRange` naming the first exit target that has no room
    pub fn new(rooms: impl IntoIterator<Item = Room>) -> Result<RoomGraph, RoomError> {
        let rooms: BTreeMap<_, _> = rooms.into_iter().map(|room| (room.id, room)).collect();
        if let Some(missing) = rooms
            .values()
            .flat_map(|room| room.exits.iter())
            .find(|exit| !rooms.contains_key(exit))
        {
            return Err(RoomError::OutOfRange(*missing));
        }
        Ok(RoomGraph { rooms })
    }

    /// # Errors
    /// - `RoomError::OutOfRange` if `id` is not on the map
    pub fn room(&self, id: RoomId) -> Result<&Room, RoomError> {
        self.rooms.get(&id).ok_or(RoomError::OutOfRange(id))
    }

    /// Rooms reachable from `id`, in order.
    ///
    /// # Errors
    /// - `RoomError::OutOfRange` if `id` is not on the map
    pub fn neighbors(&self, id: RoomId) -> Result<&[RoomId], RoomError> {
        self.room(id).map(|room| room.exits.as_slice())
    }

    /// # Errors
    /// - `RoomError::OutOfRange` if `id` is not on the map
    pub fn describe(&self, id: RoomId) -> Result<&str, RoomError> {
        self.room(id).map(|room| room.description.as_str())
    }

    /// Each exit from `id` paired with the description of the room it leads to.
    ///
    /// # Errors
    /// - `RoomError::OutOfRange` if `id` is not on the map
    pub fn exit_list(&self, id: RoomId) -> Result<Vec<(RoomId, String)>, RoomError> {
        self.neighbors(id)?
            .iter()
            .map(|&to| Ok((to, self.describe(to)?.to_string())))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: RoomId, exits: &[RoomId]) -> Room {
        Room {
            id,
            description: format!("room {id}"),
            exits: exits.to_vec(),
        }
    }

    fn graph() -> RoomGraph {
        RoomGraph::new([room(1, &[2, 3]), room(2, &[1, 4]), room(3, &[1]), room(4, &[2])]).unwrap()
    }

    #[test]
    fn neighbors_keep_order() {
        assert_eq!(graph().neighbors(1).unwrap(), &[2, 3]);
    }

    #[test]
    fn unknown_room_is_out_of_range() {
        let graph = graph();
        assert_eq!(graph.neighbors(9), Err(RoomError::OutOfRange(9)));
        assert_eq!(graph.describe(0), Err(RoomError::OutOfRange(0)));
    }

    #[test]
    fn dangling_exit_rejected_at_construction() {
        let result = RoomGraph::new([room(1, &[2]), room(2, &[7])]);
        assert_eq!(result.unwrap_err(), RoomError::OutOfRange(7));
    }

    #[test]
    fn exit_list_pairs_descriptions() {
        let exits = graph().exit_list(2).unwrap();
        assert_eq!(exits, vec![(1, "room 1".to_string()), (4, "room 4".to_string())]);
    }

    #[test]
    fn error_message_names_room() {
        assert_eq!(RoomError::OutOfRange(12).to_string(), "room 12 is not on the map");
    }
}
