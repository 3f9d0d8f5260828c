//! Input polling: a held-key snapshot plus discrete press/release events.

use bevy_ecs::{
    event::EventWriter,
    system::{NonSendMut, ResMut},
};
use sdl2::{event::Event, keyboard::Keycode, keyboard::Scancode, EventPump};
use tracing::event;

use crate::events::{GameCommand, GameEvent};
use crate::systems::components::InputState;

/// Drains the SDL event queue and refreshes the held-key snapshot.
///
/// Discrete events (quit, fire release) are dispatched as [`GameEvent`]s for
/// the state machine; continuous movement/fire state is polled from the
/// keyboard each tick, matching the fixed-tick input contract.
pub fn input_system(mut input: ResMut<InputState>, mut writer: EventWriter<GameEvent>, mut pump: NonSendMut<EventPump>) {
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape) | Some(Keycode::Q),
                ..
            } => {
                event!(tracing::Level::INFO, "Exit requested");
                writer.write(GameEvent::Command(GameCommand::Exit));
            }
            Event::KeyUp {
                keycode: Some(Keycode::Space),
                ..
            } => {
                writer.write(GameEvent::FireReleased);
            }
            _ => {}
        }
    }

    let keyboard = pump.keyboard_state();
    input.left = keyboard.is_scancode_pressed(Scancode::Left);
    input.right = keyboard.is_scancode_pressed(Scancode::Right);
    input.fire = keyboard.is_scancode_pressed(Scancode::Space);
}
