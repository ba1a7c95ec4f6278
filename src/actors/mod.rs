//! Combat participants.
//!
//! Entities are described by two capability traits rather than a type
//! hierarchy:
//! - `Destructible`: anything with health that can take damage
//! - `Combatant`: a destructible that also has a level, a position,
//!   factions and (optionally) a maximum attack range
//!
//! The rules engine branches on these capabilities: range checks apply
//! only to attackers with a `max_range`, and level and faction rules
//! only to targets that are combatants.

pub mod traits;
pub mod character;
pub mod fighter;
pub mod tree;

pub use traits::{Combatant, Destructible};
pub use character::Character;
pub use fighter::{MeleeFighter, RangedFighter};
pub use tree::Tree;
