use avian2d::prelude::*;
use bevy::prelude::*;

use super::systems::{collect_double_jump_items, item_contact};
use super::{DoubleJumpCollected, DoubleJumpItem};
use crate::movement::Player;

/// Steps of every unlock written this frame.
#[derive(Resource, Default)]
struct Collected(Vec<u32>);

fn record_unlocks(mut unlocks: MessageReader<DoubleJumpCollected>, mut collected: ResMut<Collected>) {
    collected.0.extend(unlocks.read().map(|unlock| unlock.step));
}

fn contact(a: Entity, b: Entity) -> CollisionStart {
    CollisionStart {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    }
}

#[test]
fn test_item_contact_orders_pair() {
    let mut world = World::new();
    let item = world.spawn(DoubleJumpItem::default()).id();
    let player = world.spawn_empty().id();

    let is_item = |e: Entity| e == item;
    let is_collector = |e: Entity| e == player;

    assert_eq!(
        item_contact(item, player, is_item, is_collector),
        Some((item, player))
    );
    assert_eq!(
        item_contact(player, item, is_item, is_collector),
        Some((item, player))
    );
}

#[test]
fn test_item_contact_ignores_unrelated_pairs() {
    let mut world = World::new();
    let item = world.spawn(DoubleJumpItem::default()).id();
    let wall = world.spawn_empty().id();
    let player = world.spawn_empty().id();

    let is_item = |e: Entity| e == item;
    let is_collector = |e: Entity| e == player;

    assert_eq!(item_contact(item, wall, is_item, is_collector), None);
    assert_eq!(item_contact(wall, player, is_item, is_collector), None);
}

#[test]
fn test_default_item_unlocks_double_jump() {
    assert_eq!(DoubleJumpItem::default().step, 1);
}

#[test]
fn test_item_collected_once_and_despawned() {
    let mut app = App::new();
    app.add_message::<CollisionStart>()
        .add_message::<DoubleJumpCollected>()
        .init_resource::<Collected>()
        .add_systems(
            Update,
            (collect_double_jump_items, record_unlocks).chain(),
        );

    let item = app.world_mut().spawn(DoubleJumpItem { step: 1 }).id();
    let player = app.world_mut().spawn(Player).id();

    // Both orderings of the same contact in one frame
    app.world_mut().write_message(contact(item, player));
    app.world_mut().write_message(contact(player, item));
    app.update();

    assert_eq!(app.world().resource::<Collected>().0, vec![1]);
    assert!(app.world().get::<DoubleJumpItem>(item).is_none());
    assert!(app.world().get::<Player>(player).is_some());
}

#[test]
fn test_item_ignores_non_player_contact() {
    let mut app = App::new();
    app.add_message::<CollisionStart>()
        .add_message::<DoubleJumpCollected>()
        .init_resource::<Collected>()
        .add_systems(
            Update,
            (collect_double_jump_items, record_unlocks).chain(),
        );

    let item = app.world_mut().spawn(DoubleJumpItem { step: 2 }).id();
    let wall = app.world_mut().spawn_empty().id();

    app.world_mut().write_message(contact(wall, item));
    app.update();

    assert!(app.world().resource::<Collected>().0.is_empty());
    assert!(app.world().get::<DoubleJumpItem>(item).is_some());
}
