//! Breadcrumb trail of the rooms the hero has visited.

use quest_data::RoomId;

/// Visited rooms in first-visit order. A room appears at most once.
/// The first entry is permanent: backtracking stops there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTracker {
    visited: Vec<RoomId>,
}
impl PathTracker {
    pub fn new() -> PathTracker {
        PathTracker::default()
    }

    /// Start a trail at `room`.
    pub fn starting_at(room: RoomId) -> PathTracker {
        let mut path = PathTracker::new();
        path.visit(room);
        path
    }

    /// Record a visit. Returns `false` if the room was already on the trail.
    pub fn visit(&mut self, room: RoomId) -> bool {
        if self.is_visited(room) {
            return false;
        }
        self.visited.push(room);
        true
    }

    /// Drop the most recent entry unless it is the only one. Returns the removed room.
    pub fn backtrack(&mut self) -> Option<RoomId> {
        if self.visited.len() > 1 {
            self.visited.pop()
        } else {
            None
        }
    }

    pub fn is_visited(&self, room: RoomId) -> bool {
        self.visited.contains(&room)
    }

    /// The room the trail started in. Never removed by [`PathTracker::backtrack`].
    pub fn first(&self) -> Option<RoomId> {
        self.visited.first().copied()
    }

    /// Most recent entry on the trail.
    pub fn last(&self) -> Option<RoomId> {
        self.visited.last().copied()
    }

    pub fn current_path(&self) -> &[RoomId] {
        &self.visited
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revisits_are_not_appended() {
        let mut path = PathTracker::starting_at(1);
        assert!(path.visit(2));
        assert!(path.visit(4));
        assert!(!path.visit(2));
        assert!(!path.visit(1));
        assert_eq!(path.current_path(), &[1, 2, 4]);
    }

    #[test]
    fn backtrack_stops_at_start() {
        let mut path = PathTracker::starting_at(1);
        path.visit(3);
        assert_eq!(path.backtrack(), Some(3));
        assert_eq!(path.backtrack(), None);
        assert_eq!(path.backtrack(), None);
        assert_eq!(path.current_path(), &[1]);
    }

    #[test]
    fn first_survives_backtracking() {
        let mut path = PathTracker::starting_at(1);
        path.visit(3);
        path.visit(2);
        path.backtrack();
        path.backtrack();
        assert_eq!(path.first(), Some(1));
        assert_eq!(PathTracker::new().first(), None);
    }

    #[test]
    fn backtracked_room_can_be_revisited() {
        let mut path = PathTracker::starting_at(1);
        path.visit(2);
        path.backtrack();
        assert!(!path.is_visited(2));
        assert!(path.visit(2));
        assert_eq!(path.last(), Some(2));
    }
}
