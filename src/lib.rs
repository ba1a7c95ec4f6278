//! # rpg-combat
//!
//! A small combat-resolution engine for turn-based RPG simulations.
//!
//! Given an attacker, a target and a raw amount, the engine works out how
//! much damage or healing is actually applied, subject to range, level
//! and faction rules.
//!
//! ## Design Principles
//!
//! 1. **Capabilities, not hierarchies**: entities implement
//!    `Destructible` (has health) and optionally `Combatant` (has level,
//!    position, factions, range). Rules branch on capabilities.
//!
//! 2. **Illegal means ineffective**: self-attacks, out-of-range attacks
//!    and heals between strangers are no-ops, reported through
//!    `AttackOutcome` / `HealOutcome` rather than errors.
//!
//! 3. **Configuration over constants**: level thresholds, multipliers and
//!    starting values live in `CombatConfig`.
//!
//! ## Example
//!
//! ```
//! use rpg_combat::{Character, Game, MeleeFighter, Tree};
//!
//! let game = Game::new();
//!
//! let mut knight = MeleeFighter::new();
//! knight.join("crown");
//! let mut squire = MeleeFighter::new();
//! squire.join("crown");
//!
//! let bandit = Character::create();
//! game.attack(&bandit, 100.0, &mut squire);
//! assert_eq!(squire.health(), 900.0);
//!
//! game.heal(&knight, 100.0, &mut squire);
//! assert_eq!(squire.health(), 1000.0);
//!
//! let mut tree = Tree::new();
//! game.attack(&knight, 100_000.0, &mut tree);
//! assert!(!tree.alive());
//! ```
//!
//! ## Modules
//!
//! - `core`: Entity ids, positions, factions, configuration
//! - `actors`: Characters, fighters, trees and their capability traits
//! - `rules`: The `Game` engine, level modifiers and outcomes
//! - `arena`: Id-keyed `Battlefield` roster

pub mod core;
pub mod actors;
pub mod rules;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{CombatConfig, ConfigError, EntityId, Factions, Position};

pub use crate::actors::{Character, Combatant, Destructible, MeleeFighter, RangedFighter, Tree};

pub use crate::rules::{level_modifier, AttackOutcome, Blocked, Game, HealOutcome};

pub use crate::arena::{Battlefield, BattlefieldError};
