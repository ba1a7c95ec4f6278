//! Fighters: characters with a limited attack range.
//!
//! `MeleeFighter` reaches adjacent targets only. `RangedFighter` reaches
//! targets at moderate distance. Both deref to the wrapped `Character`,
//! so every character operation (join, set_position, ...) is available.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::actors::{Character, Combatant, Destructible};
use crate::core::{EntityId, Factions, Position};

/// Close-quarters fighter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeleeFighter(Character);

/// Long-range fighter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangedFighter(Character);

impl MeleeFighter {
    /// Maximum distance a melee attack reaches.
    pub const MAX_RANGE: f64 = 2.0;

    #[must_use]
    pub fn new() -> Self {
        Self(Character::create())
    }

    /// Wrap an existing character.
    #[must_use]
    pub fn from_character(character: Character) -> Self {
        Self(character)
    }

    #[must_use]
    pub fn into_character(self) -> Character {
        self.0
    }
}

impl RangedFighter {
    /// Maximum distance a ranged attack reaches.
    pub const MAX_RANGE: f64 = 60.0;

    #[must_use]
    pub fn new() -> Self {
        Self(Character::create())
    }

    /// Wrap an existing character.
    #[must_use]
    pub fn from_character(character: Character) -> Self {
        Self(character)
    }

    #[must_use]
    pub fn into_character(self) -> Character {
        self.0
    }
}

// Both fighters share every capability of the wrapped character and
// differ only in `max_range`.
macro_rules! fighter_capabilities {
    ($fighter:ty) => {
        impl Default for $fighter {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Deref for $fighter {
            type Target = Character;

            fn deref(&self) -> &Character {
                &self.0
            }
        }

        impl DerefMut for $fighter {
            fn deref_mut(&mut self) -> &mut Character {
                &mut self.0
            }
        }

        impl Destructible for $fighter {
            fn id(&self) -> EntityId {
                self.0.id()
            }

            fn health(&self) -> f64 {
                self.0.health()
            }

            fn apply_damage(&mut self, amount: f64) {
                self.0.apply_damage(amount);
            }

            fn as_combatant(&self) -> Option<&dyn Combatant> {
                Some(self)
            }

            fn as_combatant_mut(&mut self) -> Option<&mut dyn Combatant> {
                Some(self)
            }
        }

        impl Combatant for $fighter {
            fn level(&self) -> u32 {
                self.0.level()
            }

            fn position(&self) -> Position {
                self.0.position()
            }

            fn factions(&self) -> &Factions {
                self.0.factions()
            }

            fn max_range(&self) -> Option<f64> {
                Some(Self::MAX_RANGE)
            }

            fn apply_healing(&mut self, amount: f64) {
                self.0.apply_healing(amount);
            }
        }
    };
}

fighter_capabilities!(MeleeFighter);
fighter_capabilities!(RangedFighter);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(MeleeFighter::new().max_range(), Some(MeleeFighter::MAX_RANGE));
        assert_eq!(RangedFighter::new().max_range(), Some(RangedFighter::MAX_RANGE));
        assert!(MeleeFighter::MAX_RANGE < RangedFighter::MAX_RANGE);
    }

    #[test]
    fn test_melee_reaches_adjacent_only() {
        let origin = Position::ORIGIN;
        assert!(origin.distance(Position::new(1.0, 1.0)) <= MeleeFighter::MAX_RANGE);
        assert!(origin.distance(Position::new(10.0, 10.0)) > MeleeFighter::MAX_RANGE);
    }

    #[test]
    fn test_ranged_reach() {
        let origin = Position::ORIGIN;
        assert!(origin.distance(Position::new(30.0, 40.0)) <= RangedFighter::MAX_RANGE);
        assert!(origin.distance(Position::new(100.0, 100.0)) > RangedFighter::MAX_RANGE);
    }

    #[test]
    fn test_fighters_start_like_characters() {
        let melee = MeleeFighter::new();
        assert_eq!(melee.health(), 1000.0);
        assert!(melee.alive());
        assert!(melee.factions().is_empty());

        let ranged = RangedFighter::default();
        assert_eq!(ranged.level(), 0);
        assert_eq!(ranged.position(), Position::ORIGIN);
    }

    #[test]
    fn test_deref_mut_reaches_character() {
        let mut fighter = MeleeFighter::new();
        fighter.join("guard");
        fighter.set_level(7);
        assert!(fighter.factions().contains("guard"));
        assert_eq!(Combatant::level(&fighter), 7);
    }

    #[test]
    fn test_wrap_and_unwrap() {
        let character = Character::create().with_level(3);
        let id = character.id();
        let fighter = RangedFighter::from_character(character);
        assert_eq!(Destructible::id(&fighter), id);
        assert_eq!(fighter.into_character().level(), 3);
    }

    #[test]
    fn test_serializes_as_character() {
        let fighter = MeleeFighter::new();
        let json = serde_json::to_string(&fighter).unwrap();
        let character: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(&character, &*fighter);
    }
}
