//! Combat rules.
//!
//! - `Game`: the attack/heal evaluator
//! - `level_modifier`: damage scaling by level gap
//! - `AttackOutcome` / `HealOutcome`: what an action did, or why it did
//!   nothing

pub mod engine;
pub mod modifier;
pub mod outcome;

pub use engine::Game;
pub use modifier::level_modifier;
pub use outcome::{AttackOutcome, Blocked, HealOutcome};
