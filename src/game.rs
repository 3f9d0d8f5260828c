//! Wires the ECS world and schedule together and drives one tick at a time.

use bevy_ecs::event::EventRegistry;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::Res;
use bevy_ecs::world::World;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::debug;

use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::spawn::spawn_session;
use crate::systems::collision::collision_system;
use crate::systems::components::{GameRng, GlobalState, InputState, Score, StageCounter};
use crate::systems::effects::{barricade_system, explosion_system};
use crate::systems::enemy::{enemy_movement_system, formation_system};
use crate::systems::input::input_system;
use crate::systems::movement::{beam_movement_system, bullet_movement_system};
use crate::systems::player::player_control_system;
use crate::systems::render::{error_report_system, render_system};
use crate::systems::stage::wave_system;
use crate::systems::state::{state_system, GameStage};
use crate::texture::sheet::SpriteSheets;
use crate::texture::text::TextRenderer;

/// Tick phases, in execution order.
///
/// `Update` and `Resolve` only run during play; the rest run in every stage
/// so input, stage transitions, wave refills, and drawing keep working on
/// the title and game-over screens.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Transition,
    Update,
    Resolve,
    Respond,
    Draw,
}

fn playing(stage: Res<GameStage>) -> bool {
    matches!(*stage, GameStage::Playing)
}

/// Registers the event streams and simulation resources on a fresh world.
///
/// Everything the headless simulation needs lives here; render and input
/// resources are layered on separately.
pub fn setup_world(world: &mut World) {
    EventRegistry::register_event::<GameError>(world);
    EventRegistry::register_event::<GameEvent>(world);

    world.insert_resource(GlobalState { exit: false });
    world.insert_resource(GameStage::default());
    world.insert_resource(Score::default());
    world.insert_resource(StageCounter::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameRng(SmallRng::from_os_rng()));
}

/// Adds the simulation phases to a schedule. Input and drawing are not
/// included, so the same configuration runs headless.
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule.configure_sets(
        (
            GameSet::Input,
            GameSet::Transition,
            GameSet::Update,
            GameSet::Resolve,
            GameSet::Respond,
            GameSet::Draw,
        )
            .chain(),
    );
    schedule.configure_sets(GameSet::Update.run_if(playing));
    schedule.configure_sets(GameSet::Resolve.run_if(playing));

    // Without this, buffered events are never swapped out and grow forever.
    schedule.add_systems(bevy_ecs::event::event_update_system.before(GameSet::Input));

    schedule.add_systems(state_system.in_set(GameSet::Transition));
    schedule.add_systems(
        (
            player_control_system,
            bullet_movement_system,
            enemy_movement_system,
            beam_movement_system,
            explosion_system,
            barricade_system,
        )
            .chain()
            .in_set(GameSet::Update),
    );
    schedule.add_systems((formation_system, collision_system).chain().in_set(GameSet::Resolve));
    schedule.add_systems(wave_system.in_set(GameSet::Respond));
}

/// The running game: the ECS world plus the schedule that ticks it.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    pub fn new(
        canvas: &'static mut Canvas<Window>,
        texture_creator: &'static TextureCreator<WindowContext>,
        ttf: &'static Sdl2TtfContext,
        event_pump: EventPump,
    ) -> GameResult<Game> {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        setup_world(&mut world);
        add_simulation_systems(&mut schedule);

        schedule.add_systems(input_system.in_set(GameSet::Input));
        schedule.add_systems((render_system, error_report_system).chain().in_set(GameSet::Draw));

        let sheets = SpriteSheets::load_all(texture_creator)?;
        let text = TextRenderer::load(ttf, texture_creator)?;

        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(sheets);
        world.insert_non_send_resource(text);

        spawn_session(&mut world.commands());
        world.flush();
        debug!("Game world initialized");

        Ok(Game { world, schedule })
    }

    /// Ticks the game state.
    ///
    /// Returns true if the game should exit.
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);

        self.world.resource::<GlobalState>().exit
    }
}
