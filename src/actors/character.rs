//! The plain character.

use serde::{Deserialize, Serialize};

use crate::actors::{Combatant, Destructible};
use crate::core::{CombatConfig, EntityId, Factions, Position};

/// A combat character with health, level, position and factions.
///
/// A plain `Character` has no attack range limit. `MeleeFighter` and
/// `RangedFighter` wrap a `Character` and add one.
///
/// ```
/// use rpg_combat::actors::Character;
///
/// let mut hero = Character::create();
/// assert_eq!(hero.health(), 1000.0);
/// assert!(hero.alive());
///
/// hero.apply_damage(5000.0);
/// assert_eq!(hero.health(), 0.0);
/// assert!(!hero.alive());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    id: EntityId,
    health: f64,
    level: u32,
    position: Position,
    factions: Factions,
}

impl Character {
    /// Create a character with the default starting values: 1000 health,
    /// the default starting level, at the origin, in no faction.
    #[must_use]
    pub fn create() -> Self {
        Self::from_config(&CombatConfig::default())
    }

    /// Create a character using the starting values of `config`.
    #[must_use]
    pub fn from_config(config: &CombatConfig) -> Self {
        Self {
            id: EntityId::next(),
            health: config.starting_health,
            level: config.starting_level,
            position: Position::ORIGIN,
            factions: Factions::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn health(&self) -> f64 {
        self.health
    }

    #[must_use]
    pub fn alive(&self) -> bool {
        self.health > 0.0
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set health directly, floored at zero.
    pub fn set_health(&mut self, health: f64) {
        self.health = health.max(0.0);
    }

    #[must_use]
    pub fn factions(&self) -> &Factions {
        &self.factions
    }

    /// Join a faction. Joining twice has no further effect.
    pub fn join(&mut self, faction: impl Into<String>) {
        self.factions.join(faction);
    }

    /// Leave a faction if held.
    pub fn leave(&mut self, faction: &str) {
        self.factions.leave(faction);
    }

    pub fn apply_damage(&mut self, amount: f64) {
        self.health = (self.health - amount).max(0.0);
    }

    pub fn apply_healing(&mut self, amount: f64) {
        self.health += amount;
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::create()
    }
}

impl Destructible for Character {
    fn id(&self) -> EntityId {
        self.id
    }

    fn health(&self) -> f64 {
        self.health
    }

    fn apply_damage(&mut self, amount: f64) {
        Character::apply_damage(self, amount);
    }

    fn as_combatant(&self) -> Option<&dyn Combatant> {
        Some(self)
    }

    fn as_combatant_mut(&mut self) -> Option<&mut dyn Combatant> {
        Some(self)
    }
}

impl Combatant for Character {
    fn level(&self) -> u32 {
        self.level
    }

    fn position(&self) -> Position {
        self.position
    }

    fn factions(&self) -> &Factions {
        &self.factions
    }

    fn apply_healing(&mut self, amount: f64) {
        Character::apply_healing(self, amount);
    }
}
