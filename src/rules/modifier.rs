//! Level-based damage modifiers.

use crate::core::CombatConfig;

/// Damage multiplier for an attacker of `attacker_level` hitting a
/// target of `target_level`.
///
/// With the default config:
/// - attacker at least 10 levels above the target: `1.5`
/// - target at least 10 levels above the attacker: `0.5`
/// - otherwise `1.0`
///
/// Both thresholds are inclusive.
///
/// ```
/// use rpg_combat::core::CombatConfig;
/// use rpg_combat::rules::level_modifier;
///
/// let config = CombatConfig::default();
/// assert_eq!(level_modifier(10, 0, &config), 1.5);
/// assert_eq!(level_modifier(0, 10, &config), 0.5);
/// assert_eq!(level_modifier(9, 0, &config), 1.0);
/// ```
#[must_use]
pub fn level_modifier(attacker_level: u32, target_level: u32, config: &CombatConfig) -> f64 {
    let gap = i64::from(attacker_level) - i64::from(target_level);
    let threshold = i64::from(config.level_gap_threshold);

    if gap >= threshold {
        config.bonus_multiplier
    } else if gap <= -threshold {
        config.reduction_multiplier
    } else {
        1.0
    }
}
