//! Command module
//!
//! Interprets a line of player input as a room choice.
use quest_data::RoomId;
use variantly::Variantly;

/// What the player asked for when prompted for the next room.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum MoveChoice {
    /// "0": step back along the visited path.
    Backtrack,
    /// Any other integer. Not yet checked against the current exits.
    Room(RoomId),
    /// Anything that is not a non-negative integer.
    Invalid(String),
}

/// Parses an input line as a room choice. Surrounding whitespace is ignored.
pub fn parse_move_choice(input: &str) -> MoveChoice {
    let trimmed = input.trim();
    match trimmed.parse::<RoomId>() {
        Ok(0) => MoveChoice::Backtrack,
        Ok(room) => MoveChoice::Room(room),
        Err(_) => MoveChoice::Invalid(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_backtracks() {
        assert_eq!(parse_move_choice("0"), MoveChoice::Backtrack);
        assert_eq!(parse_move_choice(" 0\n"), MoveChoice::Backtrack);
    }

    #[test]
    fn integers_are_rooms() {
        assert_eq!(parse_move_choice("3\n"), MoveChoice::Room(3));
        assert_eq!(parse_move_choice("42"), MoveChoice::Room(42));
    }

    #[test]
    fn everything_else_is_invalid() {
        for input in ["", "north", "-1", "2.5", "3 4"] {
            assert!(parse_move_choice(input).is_invalid(), "{input:?} should be invalid");
        }
    }
}
