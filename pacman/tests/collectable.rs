use glam::Vec2;
use pacman::collectable::{self, Collectable, CollectableKind};
use pacman::maze::{Maze, Rect, WallTag};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_power_pellet_pickup_happens_once() {
    let mut pellet = Collectable::power_pellet(Vec2::new(100.0, 100.0));

    assert_that(&pellet.collect_if_touching(Vec2::new(100.0, 100.0), 34.0)).is_true();
    assert_that(&pellet.is_active()).is_false();
    assert_that(&pellet.collect_if_touching(Vec2::new(100.0, 100.0), 34.0)).is_false();
}

#[test]
fn test_collect_is_idempotent() {
    let makers: [fn(Vec2) -> Collectable; 3] = [Collectable::fruit, Collectable::power_pellet, Collectable::super_pellet];

    for make in makers {
        let mut item = make(Vec2::new(300.0, 300.0));
        item.collect();
        item.collect();

        assert_that(&item.is_active()).is_false();
        assert_that(&item.check_collision(Vec2::new(300.0, 300.0), 1000.0)).is_false();
    }
}

#[test]
fn test_check_collision_does_not_collect() {
    let fruit = Collectable::fruit(Vec2::new(200.0, 200.0));

    assert_that(&fruit.check_collision(Vec2::new(200.0, 283.0), 34.0)).is_true();
    assert_that(&fruit.check_collision(Vec2::new(200.0, 284.0), 34.0)).is_false();
    assert_that(&fruit.is_active()).is_true();
}

#[test]
fn test_radii_and_scores() {
    let cases = [
        (Collectable::fruit(Vec2::ZERO), 50.0, Some(10)),
        (Collectable::power_pellet(Vec2::ZERO), 10.0, Some(100)),
        (Collectable::super_pellet(Vec2::ZERO), 15.0, Some(500)),
        (Collectable::key(Vec2::ZERO, [0]), 20.0, Some(50)),
        (Collectable::star(Vec2::ZERO), 20.0, None),
    ];

    for (item, radius, score) in cases {
        assert_eq!(item.radius(), radius);
        assert_eq!(item.kind().score_value(), score);
    }
}

#[test]
fn test_key_opens_its_walls() {
    let mut maze = Maze::new([
        (Rect::new(0.0, 0.0, 10.0, 10.0), WallTag::Blue),
        (Rect::new(50.0, 0.0, 10.0, 10.0), WallTag::Red),
        (Rect::new(100.0, 0.0, 10.0, 10.0), WallTag::Red),
    ]);
    let mut key = Collectable::key(Vec2::new(500.0, 500.0), [1, 2, 9]);

    let opened = key.collect_key(&mut maze);

    assert_eq!(opened.as_slice(), &[1, 2]);
    assert_that(&key.is_active()).is_false();
    assert_that(&maze.wall(0).is_some_and(|wall| wall.is_active())).is_true();
    assert_that(&maze.wall(1).is_some_and(|wall| wall.is_active())).is_false();
    assert_that(&maze.wall(2).is_some_and(|wall| wall.is_active())).is_false();

    // A collected key opens nothing more
    assert_that(&key.collect_key(&mut maze).is_empty()).is_true();
}

#[test]
fn test_only_keys_unlock() {
    let mut maze = Maze::new([(Rect::new(0.0, 0.0, 10.0, 10.0), WallTag::Blue)]);
    let mut fruit = Collectable::fruit(Vec2::ZERO);

    assert_that(&fruit.unlocks().is_empty()).is_true();
    assert_that(&fruit.collect_key(&mut maze).is_empty()).is_true();
    assert_that(&fruit.is_active()).is_true();
}

#[test]
fn test_star_starts_hidden_and_shows_once() {
    let mut star = Collectable::star(Vec2::new(10.0, 10.0));

    assert_that(&star.is_active()).is_false();
    assert_that(&star.check_collision(Vec2::new(10.0, 10.0), 34.0)).is_false();

    assert_that(&star.show()).is_true();
    assert_that(&star.show()).is_false();
    assert_that(&star.collect_if_touching(Vec2::new(10.0, 10.0), 34.0)).is_true();

    // Once taken it stays gone
    assert_that(&star.show()).is_false();
    assert_that(&star.was_collected()).is_true();
    assert_that(&Collectable::fruit(Vec2::ZERO).show()).is_false();
}

#[test]
fn test_remaining() {
    let mut fruits = vec![
        Collectable::fruit(Vec2::ZERO),
        Collectable::fruit(Vec2::ONE),
        Collectable::fruit(Vec2::NEG_ONE),
    ];
    fruits[1].collect();

    assert_that(&collectable::remaining(&fruits)).is_equal_to(2);
    assert!(matches!(fruits[0].kind(), CollectableKind::Fruit));
}
