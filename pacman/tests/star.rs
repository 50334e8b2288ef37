use glam::Vec2;
use pacman::events::GameEvent;
use pacman::star::{star_bonus, StarGame};
use speculoos::prelude::*;

mod common;

#[test]
fn test_star_bonus_tiers() {
    assert_that(&star_bonus(2, 2, Some(2))).is_equal_to(5000);
    assert_that(&star_bonus(2, 2, Some(3))).is_equal_to(2000);
    assert_that(&star_bonus(2, 2, None)).is_equal_to(2000);
    assert_that(&star_bonus(1, 2, Some(1))).is_equal_to(500);
    assert_that(&star_bonus(1, 2, None)).is_equal_to(500);
}

#[test]
fn test_star_hidden_until_reveal() {
    let mut rng = common::rng();
    let pos = Vec2::new(500.0, 500.0);
    let mut game = StarGame::new(pos, &mut rng);

    assert_that(&game.target()).is_none();
    assert_that(&game.update(29.0, &mut rng)).is_none();
    assert_that(&game.try_collect(pos, 34.0)).is_none();
    assert_that(&game.time_until_reveal()).is_equal_to(1.0);

    assert_that(&game.update(1.0, &mut rng)).is_equal_to(Some(GameEvent::StarShown));
    assert_that(&game.star().is_active()).is_true();
    assert_that(&game.time_until_reveal()).is_equal_to(0.0);

    // Shown only once
    assert_that(&game.update(30.0, &mut rng)).is_none();
}

#[test]
fn test_collecting_with_matching_symbols() {
    let mut rng = common::rng();
    let pos = Vec2::new(500.0, 500.0);
    let mut game = StarGame::new(pos, &mut rng);
    game.update(30.0, &mut rng);

    let target = game.target().unwrap();
    assert_that(&target).is_less_than(4);

    game.set_symbols(target, target);
    assert_that(&game.try_collect(pos, 34.0)).is_equal_to(Some(5000));
    assert_that(&game.try_collect(pos, 34.0)).is_none();
}

#[test]
fn test_symbols_reroll_every_cycle() {
    let mut rng = common::rng();
    let mut game = StarGame::new(Vec2::ZERO, &mut rng);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..20 {
        game.update(2.0, &mut rng);
        let (a, b) = game.symbols();
        assert_that(&a).is_less_than(4);
        assert_that(&b).is_less_than(4);
        seen.insert((a, b));
    }

    assert_that(&seen.len()).is_greater_than(1);
}
