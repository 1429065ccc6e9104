//! Integration tests for dice pools
//!
//! Covers short-code parsing, the modifier state machine and additional
//! effects through the public API.

use genesys_dice::dice::{DicePool, DieKind, Modifier};
use genesys_dice::effects::{parse_effects, AdditionalEffect};
use genesys_dice::DiceError;

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_unknown_letter_is_parse_error() {
    let err = DicePool::parse("XY").unwrap_err();
    assert!(matches!(err, DiceError::InvalidShortCode('X')));
    assert_eq!(err.to_string(), "X is not a valid short code");
}

#[test]
fn test_from_str() {
    let pool: DicePool = "PAADD".parse().unwrap();
    assert_eq!(pool.len(), 5);
    assert_eq!(pool.to_string(), "PAADD");
}

// ============================================================================
// Modifier state machine
// ============================================================================

#[test]
fn test_upgrade_without_dice_equals_add() {
    for kind in DieKind::ALL {
        let mut upgraded = DicePool::parse("PC").unwrap();
        let mut added = upgraded.clone();
        if upgraded.count(kind) > 0 {
            continue;
        }

        upgraded.modify(kind, Some(Modifier::Upgrade));
        added.modify(kind, Some(Modifier::Add));
        assert_eq!(upgraded, added, "{:?}", kind);
    }
}

#[test]
fn test_upgrade_walks_the_family() {
    let mut pool = DicePool::new();
    pool.modify(DieKind::Boost, Some(Modifier::Add));
    pool.modify(DieKind::Boost, Some(Modifier::Upgrade));
    assert_eq!(pool.roll_str(), "A");
    pool.modify(DieKind::Ability, Some(Modifier::Upgrade));
    assert_eq!(pool.roll_str(), "P");
    pool.modify(DieKind::Proficiency, Some(Modifier::Upgrade));
    assert_eq!(pool.roll_str(), "PP");
}

#[test]
fn test_downgrade_walks_the_family_and_falls_off() {
    let mut pool = DicePool::parse("C").unwrap();
    pool.modify(DieKind::Challenge, Some(Modifier::Downgrade));
    assert_eq!(pool.roll_str(), "D");
    pool.modify(DieKind::Difficulty, Some(Modifier::Downgrade));
    assert_eq!(pool.roll_str(), "S");
    pool.modify(DieKind::Setback, Some(Modifier::Downgrade));
    assert!(pool.is_empty());
    pool.modify(DieKind::Setback, Some(Modifier::Downgrade));
    assert!(pool.is_empty());
}

#[test]
fn test_remove_past_zero_is_not_invertible() {
    let mut pool = DicePool::new();
    pool.modify(DieKind::Ability, Some(Modifier::Add));
    pool.modify(DieKind::Ability, Some(Modifier::Remove));
    pool.modify(DieKind::Ability, Some(Modifier::Remove));
    pool.modify(DieKind::Ability, Some(Modifier::Add));
    assert_eq!(pool.roll_str(), "A");
}

// ============================================================================
// Additional effects
// ============================================================================

#[test]
fn test_effect_from_catalog_round_trip() {
    let registry = parse_effects(
        r#"
        [[groups]]
        name = "Combat"

        [[groups.options]]
        name = "Aim"
        description = "Spend a maneuver aiming"
        difficulty = "BB"

        [[groups.options]]
        name = "Cover"
        description = "Target is behind cover"
        difficulty = "S"
        "#,
    )
    .unwrap();
    let combat = registry.get("Combat").unwrap();

    let mut pool = DicePool::parse("AAD").unwrap();
    for option in &combat.options {
        pool.add_effect(option.clone());
    }
    assert_eq!(pool.roll_str(), "AABBDS");

    let aim = combat.option("Aim").unwrap();
    assert!(pool.remove_effect(aim));
    assert_eq!(pool.roll_str(), "AADS");
    assert!(!pool.remove_effect(aim));
    assert_eq!(pool.applied_effects().len(), 1);
}

#[test]
fn test_same_effect_applied_twice_removes_one_at_a_time() {
    let effect = AdditionalEffect::new("Help", "", "B").unwrap();
    let mut pool = DicePool::new();
    pool.add_effect(effect.clone());
    pool.add_effect(effect.clone());
    assert_eq!(pool.roll_str(), "BB");

    assert!(pool.remove_effect(&effect));
    assert_eq!(pool.roll_str(), "B");
    assert!(pool.remove_effect(&effect));
    assert!(pool.is_empty());
    assert!(!pool.remove_effect(&effect));
}

#[test]
fn test_removal_effect_hitting_zero() {
    let effect = AdditionalEffect::new("Disarmed", "", "-AA").unwrap();
    let mut pool = DicePool::parse("AD").unwrap();

    pool.add_effect(effect.clone());
    assert_eq!(pool.roll_str(), "D");

    // Reverting adds both back even though only one was removed
    pool.remove_effect(&effect);
    assert_eq!(pool.roll_str(), "AAD");
}
