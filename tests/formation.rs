mod common;

use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use glam::Vec2;
use speculoos::prelude::*;

use invaders::asset::SpriteKind;
use invaders::constants::{layout, mechanics, STAGE_RECT};
use invaders::geometry::Rect;
use invaders::systems::components::{
    Beam, Enemy, EnemyBundle, FormationMovement, Position, Renderable, Stun,
};
use invaders::systems::enemy::{enemy_movement_system, formation_system};
use invaders::systems::state::GameStage;

fn formation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((enemy_movement_system, formation_system).chain());
    schedule
}

fn spawn_enemy(world: &mut bevy_ecs::world::World, rect: Rect, movement: FormationMovement) {
    world.spawn(EnemyBundle {
        enemy: Enemy { points: 10 },
        movement,
        position: Position(rect),
        stun: Stun::default(),
        sprite: Renderable {
            kind: SpriteKind::Enemy10,
            frame: 0,
        },
    });
}

#[test]
fn test_first_move_happens_after_one_full_interval() {
    let mut world = common::seeded_world();
    let mut schedule = formation_schedule();

    let start = Rect::new(100.0, 100.0, 24.0, 24.0);
    spawn_enemy(&mut world, start, FormationMovement::new(24.0));

    // The timer counts a full interval down before the first movement event.
    for _ in 0..mechanics::STEP_INTERVAL {
        schedule.run(&mut world);
    }
    let position = world.query::<&Position>().single(&world).unwrap();
    assert_that!(position.0.pos.x).is_equal_to(100.0);

    schedule.run(&mut world);
    let position = world.query::<&Position>().single(&world).unwrap();
    assert_that!(position.0.pos.x).is_equal_to(124.0);
}

#[test]
fn test_timer_never_exceeds_interval() {
    let mut world = common::seeded_world();
    let mut schedule = formation_schedule();

    spawn_enemy(
        &mut world,
        Rect::new(100.0, 100.0, 24.0, 24.0),
        FormationMovement::new(24.0),
    );

    for _ in 0..500 {
        schedule.run(&mut world);
        let movement = world.query::<&FormationMovement>().single(&world).unwrap();
        assert!(movement.timer <= movement.interval);
    }
}

#[test]
fn test_edge_crossing_halts_then_steps_down() {
    let mut world = common::seeded_world();
    let mut schedule = formation_schedule();

    // One enemy a single step away from the right edge, timer about to fire.
    let mut near_edge = FormationMovement::new(24.0);
    near_edge.timer = 1;
    spawn_enemy(&mut world, Rect::new(560.0, 100.0, 24.0, 24.0), near_edge);

    // Another far from the edge, same phase.
    let mut inner = FormationMovement::new(24.0);
    inner.timer = 1;
    spawn_enemy(&mut world, Rect::new(100.0, 100.0, 24.0, 24.0), inner);

    // Tick 1: timers reach zero; the edge crossing halts the whole formation.
    schedule.run(&mut world);
    for movement in world.query::<&FormationMovement>().iter(&world) {
        assert_that!(movement.moving_horizontally).is_false();
    }

    // Tick 2: every enemy steps down together, the interval shrinks, and the
    // travel direction flips.
    schedule.run(&mut world);
    for (movement, position) in world.query::<(&FormationMovement, &Position)>().iter(&world) {
        assert_that!(position.0.pos.y).is_equal_to(124.0);
        assert_that!(movement.interval).is_equal_to(mechanics::STEP_INTERVAL - mechanics::STEP_INTERVAL_DECREMENT);
        assert_that!(movement.step).is_equal_to(-24.0);
        assert_that!(movement.just_stepped_down).is_true();
        assert_that!(movement.moving_horizontally).is_true();
    }
}

#[test]
fn test_step_down_cooldown_prevents_immediate_rehalt() {
    let mut world = common::seeded_world();
    let mut schedule = formation_schedule();

    // Just stepped down against the left edge, next step still crossing.
    // The cooldown flag must suppress the halt at the timer-zero check that
    // precedes the next movement event.
    let mut movement = FormationMovement::new(-24.0);
    movement.timer = 1;
    movement.just_stepped_down = true;
    spawn_enemy(&mut world, Rect::new(10.0, 124.0, 24.0, 24.0), movement);

    schedule.run(&mut world);
    let movement = world.query::<&FormationMovement>().single(&world).unwrap();
    assert_that!(movement.timer).is_equal_to(0);
    assert_that!(movement.moving_horizontally).is_true();
}

#[test]
fn test_enemy_past_lose_line_ends_the_game() {
    let mut world = common::seeded_world();
    let mut schedule = formation_schedule();
    *world.resource_mut::<GameStage>() = GameStage::Playing;

    let lose_line = STAGE_RECT.size.y * mechanics::LOSE_LINE_RATIO;
    spawn_enemy(
        &mut world,
        Rect::new(100.0, lose_line - 10.0, 24.0, 24.0),
        FormationMovement::new(24.0),
    );

    schedule.run(&mut world);
    assert_that!(*world.resource::<GameStage>()).is_equal_to(GameStage::GameOver);
}

#[test]
fn test_stunned_enemy_does_not_move_or_tick_its_timer() {
    let mut world = common::seeded_world();
    let mut schedule = formation_schedule();

    let mut movement = FormationMovement::new(24.0);
    movement.timer = 0;
    spawn_enemy(&mut world, Rect::new(100.0, 100.0, 24.0, 24.0), movement);
    {
        let mut stun = world.query::<&mut Stun>().single_mut(&mut world).unwrap();
        stun.0 = 2;
    }

    schedule.run(&mut world);
    let (movement, position) = world
        .query::<(&FormationMovement, &Position)>()
        .single(&world)
        .unwrap();
    assert_that!(position.0.pos.x).is_equal_to(100.0);
    assert_that!(movement.timer).is_equal_to(0);
}

#[test]
fn test_enemies_eventually_fire_beams() {
    let mut world = common::seeded_world();
    let mut schedule = formation_schedule();

    for column in 0..10 {
        spawn_enemy(
            &mut world,
            Rect::from_center(
                Vec2::new(column as f32 * layout::WAVE_SPACING + layout::WAVE_LEFT, 100.0),
                layout::ENEMY_SIZE,
            ),
            FormationMovement::new(24.0),
        );
    }

    for _ in 0..2_000 {
        schedule.run(&mut world);
    }
    let beams = world.query::<&Beam>().iter(&world).count();
    assert_that!(beams).is_greater_than(0);
}
