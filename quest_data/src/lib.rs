//! Shared data model for Hero's Quest content.

pub mod builtin;
pub mod defs;
pub mod validate;

pub use builtin::{HEALTH_POTION, hero_quest};
pub use defs::*;
pub use validate::{ValidationError, validate_world};
