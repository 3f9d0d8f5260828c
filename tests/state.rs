mod common;

use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use invaders::events::{GameCommand, GameEvent};
use invaders::spawn::spawn_session;
use invaders::systems::components::{Barricade, Enemy, GlobalState, Player, Score, StageCounter};
use invaders::systems::state::GameStage;

#[test]
fn test_session_starts_on_the_title_screen() {
    let harness = common::harness();
    assert_that!(*harness.world.resource::<GameStage>()).is_equal_to(GameStage::Start);
}

#[test]
fn test_fire_release_starts_play() {
    let mut harness = common::harness();

    harness.release_fire();
    harness.tick();

    assert_that!(*harness.world.resource::<GameStage>()).is_equal_to(GameStage::Playing);
}

#[test]
fn test_fire_release_during_play_changes_nothing() {
    let mut harness = common::harness();
    harness.set_stage(GameStage::Playing);

    harness.release_fire();
    harness.tick();

    assert_that!(*harness.world.resource::<GameStage>()).is_equal_to(GameStage::Playing);
}

#[test]
fn test_game_over_reset_rebuilds_a_fresh_session() {
    let mut harness = common::harness();
    spawn_session(&mut harness.world.commands());
    harness.world.flush();
    harness.tick();
    harness.set_stage(GameStage::Playing);

    // Dirty the session, then lose it.
    harness.world.resource_mut::<Score>().0 = 370;
    harness.world.resource_mut::<StageCounter>().0 = 2;
    {
        let mut player = harness.world.query::<&mut Player>().single_mut(&mut harness.world).unwrap();
        player.lives = 1;
    }
    harness.set_stage(GameStage::GameOver);

    harness.release_fire();
    harness.tick();

    // The reset drops straight back into play with a pristine field.
    assert_that!(*harness.world.resource::<GameStage>()).is_equal_to(GameStage::Playing);
    assert_eq!(harness.world.resource::<Score>().0, 0);
    assert_eq!(harness.world.resource::<StageCounter>().0, 0);

    let player = harness.world.query::<&Player>().single(&harness.world).unwrap();
    assert_eq!(player.lives, 3);
    assert_eq!(harness.world.query::<&Barricade>().iter(&harness.world).count(), 20);
    assert_eq!(harness.world.query::<&Enemy>().iter(&harness.world).count(), 50);
}

#[test]
fn test_exit_command_sets_the_exit_flag() {
    let mut harness = common::harness();

    harness.world.send_event(GameEvent::from(GameCommand::Exit));
    harness.tick();

    assert_that!(harness.world.resource::<GlobalState>().exit).is_true();
}
