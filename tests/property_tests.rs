//! Property tests for the combat rules.

use proptest::prelude::*;

use rpg_combat::actors::{Character, MeleeFighter, RangedFighter, Tree};
use rpg_combat::core::Position;
use rpg_combat::rules::Game;

fn amount() -> impl Strategy<Value = f64> {
    0.0..5_000.0f64
}

fn coordinate() -> impl Strategy<Value = f64> {
    -500.0..500.0f64
}

proptest! {
    #[test]
    fn prop_close_levels_deal_raw_damage(
        attacker_level in 0u32..100,
        offset in -9i64..=9,
        damage in amount(),
    ) {
        let target_level = (i64::from(attacker_level) + offset).max(0) as u32;
        let game = Game::new();
        let attacker = Character::create().with_level(attacker_level);
        let mut target = Character::create().with_level(target_level);

        game.attack(&attacker, damage, &mut target);

        prop_assert_eq!(target.health(), (1000.0 - damage).max(0.0));
    }

    #[test]
    fn prop_large_level_gap_scales_damage(
        low in 0u32..50,
        gap in 10u32..100,
        damage in amount(),
    ) {
        let game = Game::new();
        let weak = Character::create().with_level(low);
        let strong = Character::create().with_level(low + gap);

        let mut target = weak.clone();
        game.attack(&strong, damage, &mut target);
        prop_assert_eq!(target.health(), (1000.0 - damage * 1.5).max(0.0));

        let mut target = strong.clone();
        game.attack(&weak, damage, &mut target);
        prop_assert_eq!(target.health(), (1000.0 - damage * 0.5).max(0.0));
    }

    #[test]
    fn prop_self_attack_never_changes_health(damage in amount(), level in 0u32..100) {
        let game = Game::new();
        let mut character = Character::create().with_level(level);
        let same = character.clone();

        game.attack(&same, damage, &mut character);

        prop_assert_eq!(character.health(), 1000.0);
    }

    #[test]
    fn prop_health_never_negative(hits in prop::collection::vec(amount(), 1..20)) {
        let game = Game::new();
        let attacker = Character::create();
        let mut target = Character::create();
        let mut tree = Tree::new();

        for damage in hits {
            game.attack(&attacker, damage, &mut target);
            game.attack(&attacker, damage, &mut tree);
            prop_assert!(target.health() >= 0.0);
            prop_assert!(tree.health() >= 0.0);
            prop_assert_eq!(target.alive(), target.health() > 0.0);
            prop_assert_eq!(tree.alive(), tree.health() > 0.0);
        }
    }

    #[test]
    fn prop_range_decides_hit(x in coordinate(), y in coordinate(), damage in 1.0..500.0f64) {
        let game = Game::new();
        let target_position = Position::new(x, y);
        let distance = Position::ORIGIN.distance(target_position);

        let melee = MeleeFighter::new();
        let mut target = Character::create().with_position(target_position);
        let hit = game.attack(&melee, damage, &mut target).is_hit();
        prop_assert_eq!(hit, distance <= MeleeFighter::MAX_RANGE);

        let ranged = RangedFighter::new();
        let mut target = Character::create().with_position(target_position);
        let hit = game.attack(&ranged, damage, &mut target).is_hit();
        prop_assert_eq!(hit, distance <= RangedFighter::MAX_RANGE);
    }

    #[test]
    fn prop_trees_always_take_damage(x in coordinate(), y in coordinate(), damage in amount()) {
        let game = Game::new();
        let mut attacker = MeleeFighter::new();
        attacker.set_position(Position::new(x, y));
        let mut tree = Tree::new();

        prop_assert!(game.attack(&attacker, damage, &mut tree).is_hit());
        prop_assert_eq!(tree.health(), (Tree::STARTING_HEALTH - damage).max(0.0));
    }

    #[test]
    fn prop_heal_iff_shared_faction(
        healer_factions in prop::collection::vec("[a-c]", 0..3),
        target_factions in prop::collection::vec("[a-c]", 0..3),
        amount in amount(),
    ) {
        let game = Game::new();
        let mut healer = Character::create();
        for faction in &healer_factions {
            healer.join(faction.as_str());
        }
        let mut target = Character::create();
        for faction in &target_factions {
            target.join(faction.as_str());
        }
        let allied = healer_factions.iter().any(|f| target_factions.contains(f));

        let outcome = game.heal(&healer, amount, &mut target);

        prop_assert_eq!(outcome.is_healed(), allied);
        let expected = if allied { 1000.0 + amount } else { 1000.0 };
        prop_assert_eq!(target.health(), expected);
    }
}
