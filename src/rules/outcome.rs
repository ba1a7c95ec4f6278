//! Outcomes of combat actions.
//!
//! Illegal actions are not errors: they simply have no effect. The
//! outcome values report what happened so callers that care (a combat
//! log, a UI) can tell a miss from a hit. Ignoring them is fine.

use serde::{Deserialize, Serialize};

/// Why an action had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Blocked {
    /// Source and target are the same entity.
    SelfTarget,
    /// Target is farther away than the attacker can reach.
    OutOfRange { distance: f64, max_range: f64 },
    /// Healer and target share no faction.
    NotAllied,
}

impl std::fmt::Display for Blocked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Blocked::SelfTarget => write!(f, "cannot target self"),
            Blocked::OutOfRange { distance, max_range } => {
                write!(f, "target out of range ({:.2} > {:.2})", distance, max_range)
            }
            Blocked::NotAllied => write!(f, "target is not an ally"),
        }
    }
}

/// Result of an attack.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// The attack landed. `damage` is the modified amount subtracted,
    /// before flooring the target's health at zero.
    Hit { damage: f64 },
    /// The attack had no effect.
    Blocked(Blocked),
}

impl AttackOutcome {
    #[must_use]
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit { .. })
    }

    /// Damage dealt, zero when blocked.
    #[must_use]
    pub fn damage(&self) -> f64 {
        match self {
            AttackOutcome::Hit { damage } => *damage,
            AttackOutcome::Blocked(_) => 0.0,
        }
    }

    #[must_use]
    pub fn blocked(&self) -> Option<Blocked> {
        match self {
            AttackOutcome::Hit { .. } => None,
            AttackOutcome::Blocked(reason) => Some(*reason),
        }
    }
}

/// Result of a heal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum HealOutcome {
    /// Healing applied. `amount` is what was actually added.
    Healed { amount: f64 },
    /// The heal had no effect.
    Blocked(Blocked),
}

impl HealOutcome {
    #[must_use]
    pub fn is_healed(&self) -> bool {
        matches!(self, HealOutcome::Healed { .. })
    }

    /// Health restored, zero when blocked.
    #[must_use]
    pub fn amount(&self) -> f64 {
        match self {
            HealOutcome::Healed { amount } => *amount,
            HealOutcome::Blocked(_) => 0.0,
        }
    }

    #[must_use]
    pub fn blocked(&self) -> Option<Blocked> {
        match self {
            HealOutcome::Healed { .. } => None,
            HealOutcome::Blocked(reason) => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_outcome_accessors() {
        let hit = AttackOutcome::Hit { damage: 150.0 };
        assert!(hit.is_hit());
        assert_eq!(hit.damage(), 150.0);
        assert_eq!(hit.blocked(), None);

        let miss = AttackOutcome::Blocked(Blocked::SelfTarget);
        assert!(!miss.is_hit());
        assert_eq!(miss.damage(), 0.0);
        assert_eq!(miss.blocked(), Some(Blocked::SelfTarget));
    }

    #[test]
    fn test_heal_outcome_accessors() {
        let healed = HealOutcome::Healed { amount: 100.0 };
        assert!(healed.is_healed());
        assert_eq!(healed.amount(), 100.0);

        let blocked = HealOutcome::Blocked(Blocked::NotAllied);
        assert!(!blocked.is_healed());
        assert_eq!(blocked.amount(), 0.0);
        assert_eq!(blocked.blocked(), Some(Blocked::NotAllied));
    }

    #[test]
    fn test_blocked_display() {
        let reason = Blocked::OutOfRange { distance: 14.142, max_range: 2.0 };
        assert_eq!(reason.to_string(), "target out of range (14.14 > 2.00)");
        assert_eq!(Blocked::NotAllied.to_string(), "target is not an ally");
    }
}
