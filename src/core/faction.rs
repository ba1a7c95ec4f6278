//! Faction membership.
//!
//! A character's factions decide who it may heal. Two characters are
//! allied when they share at least one faction name. Most characters
//! belong to zero or one faction, so the set lives inline in a
//! `SmallVec` and is scanned linearly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Set of faction names a character has joined.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factions {
    names: SmallVec<[String; 2]>,
}

impl Factions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Join a faction. Joining one already held does nothing.
    ///
    /// Returns true if the faction was newly joined.
    pub fn join(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Leave a faction. Returns true if it was held.
    pub fn leave(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Check whether the two sets share at least one faction.
    ///
    /// An empty set is allied with nothing, itself included.
    #[must_use]
    pub fn is_allied_with(&self, other: &Factions) -> bool {
        self.names.iter().any(|n| other.contains(n))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Factions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut factions = Factions::new();
        for name in iter {
            factions.join(name);
        }
        factions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_is_idempotent() {
        let mut factions = Factions::new();
        assert!(factions.join("guild"));
        assert!(!factions.join("guild"));
        assert_eq!(factions.len(), 1);
        assert!(factions.contains("guild"));
    }

    #[test]
    fn test_leave() {
        let mut factions: Factions = ["a", "b"].into_iter().collect();
        assert!(factions.leave("a"));
        assert!(!factions.leave("a"));
        assert_eq!(factions.iter().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_alliance_needs_shared_name() {
        let red: Factions = ["red", "blue"].into_iter().collect();
        let blue: Factions = ["blue"].into_iter().collect();
        let green: Factions = ["green"].into_iter().collect();

        assert!(red.is_allied_with(&blue));
        assert!(blue.is_allied_with(&red));
        assert!(!red.is_allied_with(&green));
    }

    #[test]
    fn test_empty_set_is_never_allied() {
        let empty = Factions::new();
        let red: Factions = ["red"].into_iter().collect();

        assert!(empty.is_empty());
        assert!(!empty.is_allied_with(&empty));
        assert!(!empty.is_allied_with(&red));
        assert!(!red.is_allied_with(&empty));
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let factions: Factions = (0..5).map(|i| format!("f{}", i)).collect();
        assert_eq!(factions.len(), 5);
        assert!(factions.contains("f4"));
    }
}
