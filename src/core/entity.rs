//! Entity identification.
//!
//! Every combat participant (character, fighter, tree) carries an
//! `EntityId` assigned when it is constructed. Ids come from a
//! process-wide counter, so two independently created entities never
//! share one.
//!
//! Cloning an entity keeps its id: the clone is the same identity, and
//! the rules engine treats an attack from one onto the other as
//! self-targeting.
//!
//! ```
//! use rpg_combat::core::EntityId;
//!
//! let a = EntityId::next();
//! let b = EntityId::next();
//! assert_ne!(a, b);
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// Unique identifier for any combat entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Allocate a fresh id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
