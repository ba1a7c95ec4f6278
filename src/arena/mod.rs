//! Id-keyed entity roster.
//!
//! `Battlefield` owns a set of combat entities and lets callers address
//! them by `EntityId`. It imposes no turn order; it only resolves ids
//! and hands the entities to the rules engine.

pub mod battlefield;

pub use battlefield::{Battlefield, BattlefieldError};
