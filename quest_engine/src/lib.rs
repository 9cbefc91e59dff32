#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const QUEST_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod challenge;
pub mod command;
pub mod data_paths;
pub mod game;
pub mod health;
pub mod hero;
pub mod input;
pub mod inventory;
pub mod path;
pub mod room;
pub mod rules;
pub mod style;
pub mod treasure;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use challenge::{Challenge, ChallengeIndex, ChallengeOutcome};
pub use game::{GameLoop, GameOutcome, GameState};
pub use hero::Hero;
pub use input::{InputManager, InputSource, ScriptedInput};
pub use inventory::Inventory;
pub use path::PathTracker;
pub use room::{Room, RoomError, RoomGraph};
pub use rules::{MovementMode, RulesConfig, load_rules};
pub use treasure::{Treasure, roll_treasure};
pub use view::{MessageKind, Presenter, View, ViewItem};
pub use world::{QuestWorld, build_world};
