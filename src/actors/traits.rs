//! Capability traits for combat entities.

use crate::core::{EntityId, Factions, Position};

/// Something with health that attacks can wear down.
///
/// Health is floored at zero: `apply_damage` never leaves a negative
/// value behind, and an entity at zero health is no longer alive.
pub trait Destructible {
    /// Identity used to detect self-targeting.
    fn id(&self) -> EntityId;

    /// Current health.
    fn health(&self) -> f64;

    /// Alive while health is above zero.
    fn is_alive(&self) -> bool {
        self.health() > 0.0
    }

    /// Reduce health by `amount`, flooring at zero.
    fn apply_damage(&mut self, amount: f64);

    /// View this entity as a combatant, if it is one.
    ///
    /// Plain destructibles (trees, props) return `None` and are exempt
    /// from range, level and faction rules.
    fn as_combatant(&self) -> Option<&dyn Combatant> {
        None
    }

    /// Mutable counterpart of `as_combatant`.
    fn as_combatant_mut(&mut self) -> Option<&mut dyn Combatant> {
        None
    }
}

/// A destructible that takes part in the full combat rules.
pub trait Combatant: Destructible {
    fn level(&self) -> u32;

    fn position(&self) -> Position;

    fn factions(&self) -> &Factions;

    /// Maximum distance at which this combatant's attacks land.
    ///
    /// `None` means unlimited range.
    fn max_range(&self) -> Option<f64> {
        None
    }

    /// Increase health by `amount`. No upper bound is applied here.
    fn apply_healing(&mut self, amount: f64);

    /// Two combatants are allied when they share a faction.
    fn is_allied_with(&self, other: &dyn Combatant) -> bool {
        self.factions().is_allied_with(other.factions())
    }
}
