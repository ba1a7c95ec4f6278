//! Destructible scenery.

use serde::{Deserialize, Serialize};

use crate::actors::Destructible;
use crate::core::EntityId;

/// A tree: it has health and can be cut down, nothing more.
///
/// Trees have no level, position or factions, so every attack on one
/// lands at full strength regardless of who swings or from where.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    id: EntityId,
    health: f64,
}

impl Tree {
    pub const STARTING_HEALTH: f64 = 1000.0;

    #[must_use]
    pub fn new() -> Self {
        Self::with_health(Self::STARTING_HEALTH)
    }

    #[must_use]
    pub fn with_health(health: f64) -> Self {
        Self {
            id: EntityId::next(),
            health: health.max(0.0),
        }
    }

    #[must_use]
    pub fn health(&self) -> f64 {
        self.health
    }

    #[must_use]
    pub fn alive(&self) -> bool {
        self.health > 0.0
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Destructible for Tree {
    fn id(&self) -> EntityId {
        self.id
    }

    fn health(&self) -> f64 {
        self.health
    }

    fn apply_damage(&mut self, amount: f64) {
        self.health = (self.health - amount).max(0.0);
    }
}
