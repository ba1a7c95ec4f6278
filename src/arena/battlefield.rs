//! Battlefield roster.
//!
//! Entities live in a `Vec` of boxed trait objects with an `FxHashMap`
//! from id to slot. Actions between two distinct entities split the
//! slice to borrow the source and target at once; an action whose
//! source and target ids match goes through the engine's self-target
//! paths.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::actors::{Combatant, Destructible};
use crate::core::EntityId;
use crate::rules::{AttackOutcome, Game, HealOutcome};

/// Lookup failures. Combat rule violations are never errors; they come
/// back as blocked outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BattlefieldError {
    #[error("no entity with id {0}")]
    UnknownEntity(EntityId),

    #[error("{0} is not a combatant")]
    NotACombatant(EntityId),

    #[error("{0} is already on the battlefield")]
    DuplicateEntity(EntityId),
}

/// Roster of combat entities addressed by id.
#[derive(Default)]
pub struct Battlefield {
    entities: Vec<Box<dyn Destructible>>,
    index: FxHashMap<EntityId, usize>,
}

impl Battlefield {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its id.
    ///
    /// An entity whose id is already present (a clone of a spawned
    /// entity) is rejected.
    pub fn spawn<E>(&mut self, entity: E) -> Result<EntityId, BattlefieldError>
    where
        E: Destructible + 'static,
    {
        let id = entity.id();
        if self.index.contains_key(&id) {
            return Err(BattlefieldError::DuplicateEntity(id));
        }
        self.index.insert(id, self.entities.len());
        self.entities.push(Box::new(entity));
        Ok(id)
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&dyn Destructible> {
        self.index.get(&id).map(|&slot| &*self.entities[slot])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut dyn Destructible> {
        let slot = *self.index.get(&id)?;
        Some(&mut *self.entities[slot])
    }

    /// Look up an entity that must be a combatant.
    pub fn combatant(&self, id: EntityId) -> Result<&dyn Combatant, BattlefieldError> {
        self.get(id)
            .ok_or(BattlefieldError::UnknownEntity(id))?
            .as_combatant()
            .ok_or(BattlefieldError::NotACombatant(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Ids in spawn order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().map(|e| e.id())
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_alive()).count()
    }

    /// Resolve an attack between two entities on the battlefield.
    pub fn attack(
        &mut self,
        game: &Game,
        source: EntityId,
        amount: f64,
        target: EntityId,
    ) -> Result<AttackOutcome, BattlefieldError> {
        let source_slot = self.slot(source)?;
        let target_slot = self.slot(target)?;

        if source_slot == target_slot {
            let attacker = self.entities[source_slot]
                .as_combatant()
                .ok_or(BattlefieldError::NotACombatant(source))?;
            return Ok(game.attack_self(attacker, amount));
        }

        let (attacker, defender) = pair_mut(&mut self.entities, source_slot, target_slot);
        let attacker = attacker
            .as_combatant()
            .ok_or(BattlefieldError::NotACombatant(source))?;

        Ok(game.attack(attacker, amount, &mut **defender))
    }

    /// Resolve a heal between two combatants on the battlefield.
    pub fn heal(
        &mut self,
        game: &Game,
        source: EntityId,
        amount: f64,
        target: EntityId,
    ) -> Result<HealOutcome, BattlefieldError> {
        let source_slot = self.slot(source)?;
        let target_slot = self.slot(target)?;

        if source_slot == target_slot {
            let healer = self.entities[source_slot]
                .as_combatant_mut()
                .ok_or(BattlefieldError::NotACombatant(source))?;
            return Ok(game.heal_self(amount, healer));
        }

        let (healer, patient) = pair_mut(&mut self.entities, source_slot, target_slot);
        let healer = healer
            .as_combatant()
            .ok_or(BattlefieldError::NotACombatant(source))?;
        let patient = patient
            .as_combatant_mut()
            .ok_or(BattlefieldError::NotACombatant(target))?;

        Ok(game.heal(healer, amount, patient))
    }

    fn slot(&self, id: EntityId) -> Result<usize, BattlefieldError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(BattlefieldError::UnknownEntity(id))
    }
}

impl std::fmt::Debug for Battlefield {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Battlefield")
            .field("entities", &self.entities.len())
            .field("alive", &self.alive_count())
            .finish()
    }
}

/// Borrow two distinct slots mutably.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = items.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
