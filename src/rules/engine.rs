//! The combat rules engine.
//!
//! `Game` answers one question: what happens when an action is applied
//! from a source to a target. It keeps no state of its own beyond its
//! configuration; the only mutation it performs is on the target's
//! health.
//!
//! ## Attack
//!
//! 1. Self-targeting has no effect.
//! 2. Plain destructibles take the raw amount.
//! 3. Attackers with a `max_range` miss targets farther than that.
//! 4. The level gap scales the damage (see `level_modifier`).
//! 5. The target's health drops, floored at zero.
//!
//! ## Heal
//!
//! Healing lands only between allies (a shared faction) and ignores
//! range and level. It is uncapped unless the config sets `max_health`.

use tracing::{debug, trace};

use crate::actors::{Combatant, Destructible};
use crate::core::{CombatConfig, EntityId};
use crate::rules::{level_modifier, AttackOutcome, Blocked, HealOutcome};

/// Stateless combat rule evaluator.
#[derive(Clone, Debug, Default)]
pub struct Game {
    config: CombatConfig,
}

impl Game {
    /// Create an engine with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom rules.
    #[must_use]
    pub fn with_config(config: CombatConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Attack `target` with `amount` raw damage.
    ///
    /// Blocked attacks leave the target untouched and report why.
    ///
    /// ```
    /// use rpg_combat::actors::Character;
    /// use rpg_combat::rules::Game;
    ///
    /// let game = Game::new();
    /// let attacker = Character::create();
    /// let mut target = Character::create();
    ///
    /// game.attack(&attacker, 100.0, &mut target);
    /// assert_eq!(target.health(), 900.0);
    /// ```
    pub fn attack(
        &self,
        source: &dyn Combatant,
        amount: f64,
        target: &mut dyn Destructible,
    ) -> AttackOutcome {
        if source.id() == target.id() {
            return self.block_attack(source.id(), target.id(), Blocked::SelfTarget);
        }

        let damage = match target.as_combatant() {
            None => amount,
            Some(defender) => {
                if let Some(max_range) = source.max_range() {
                    let distance = source.position().distance(defender.position());
                    if distance > max_range {
                        let reason = Blocked::OutOfRange { distance, max_range };
                        return self.block_attack(source.id(), target.id(), reason);
                    }
                }
                amount * level_modifier(source.level(), defender.level(), &self.config)
            }
        };

        target.apply_damage(damage);
        trace!(
            source = %source.id(),
            target = %target.id(),
            damage,
            health = target.health(),
            "attack landed"
        );

        AttackOutcome::Hit { damage }
    }

    /// Attack where the source is also the target. Always blocked.
    ///
    /// Rust borrowing keeps `attack` from receiving one entity as both
    /// source and target, so id-keyed callers like `Battlefield` route
    /// self-targeting here.
    pub fn attack_self(&self, entity: &dyn Combatant, _amount: f64) -> AttackOutcome {
        self.block_attack(entity.id(), entity.id(), Blocked::SelfTarget)
    }

    /// Heal `target` by `amount`.
    ///
    /// Only allies can heal each other.
    pub fn heal(
        &self,
        source: &dyn Combatant,
        amount: f64,
        target: &mut dyn Combatant,
    ) -> HealOutcome {
        let allied = source.is_allied_with(&*target);
        self.resolve_heal(source.id(), allied, amount, target)
    }

    /// Heal where the healer is also the target.
    ///
    /// A combatant counts as its own ally only if it belongs to at least
    /// one faction.
    pub fn heal_self(&self, amount: f64, target: &mut dyn Combatant) -> HealOutcome {
        let allied = target.is_allied_with(&*target);
        self.resolve_heal(target.id(), allied, amount, target)
    }

    fn resolve_heal(
        &self,
        source: EntityId,
        allied: bool,
        amount: f64,
        target: &mut dyn Combatant,
    ) -> HealOutcome {
        if !allied {
            let reason = Blocked::NotAllied;
            debug!(
                source = %source,
                target = %target.id(),
                reason = %reason,
                "heal blocked"
            );
            return HealOutcome::Blocked(reason);
        }

        let amount = match self.config.max_health {
            Some(max) => amount.min((max - target.health()).max(0.0)),
            None => amount,
        };

        target.apply_healing(amount);
        trace!(
            source = %source,
            target = %target.id(),
            amount,
            health = target.health(),
            "heal applied"
        );

        HealOutcome::Healed { amount }
    }

    fn block_attack(&self, source: EntityId, target: EntityId, reason: Blocked) -> AttackOutcome {
        debug!(
            source = %source,
            target = %target,
            reason = %reason,
            "attack blocked"
        );
        AttackOutcome::Blocked(reason)
    }
}
