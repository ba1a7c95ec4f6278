//! Core combat types: identities, positions, factions, configuration.
//!
//! These are the leaf building blocks the actors and the rules engine
//! are made of. None of them know about attacks or healing.

pub mod entity;
pub mod position;
pub mod faction;
pub mod config;

pub use entity::EntityId;
pub use position::Position;
pub use faction::Factions;
pub use config::{CombatConfig, ConfigError};
