#![allow(dead_code)]

use bevy_ecs::schedule::Schedule;
use bevy_ecs::world::World;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use invaders::events::GameEvent;
use invaders::game::{add_simulation_systems, setup_world};
use invaders::systems::components::GameRng;
use invaders::systems::state::GameStage;

/// A headless world plus schedule, sharing the real simulation
/// configuration but without SDL input or rendering attached.
pub struct Harness {
    pub world: World,
    pub schedule: Schedule,
}

impl Harness {
    pub fn tick(&mut self) {
        self.schedule.run(&mut self.world);
    }

    pub fn tick_n(&mut self, n: u32) {
        for _ in 0..n {
            self.tick();
        }
    }

    pub fn set_stage(&mut self, stage: GameStage) {
        *self.world.resource_mut::<GameStage>() = stage;
    }

    pub fn release_fire(&mut self) {
        self.world.send_event(GameEvent::FireReleased);
    }
}

/// Builds the full simulation harness with a deterministic rng.
pub fn harness() -> Harness {
    let world = seeded_world();
    let mut schedule = Schedule::default();
    add_simulation_systems(&mut schedule);
    Harness { world, schedule }
}

/// A world with events and resources registered and the rng seeded, for
/// tests that assemble their own schedules.
pub fn seeded_world() -> World {
    let mut world = World::default();
    setup_world(&mut world);
    world.insert_resource(GameRng(SmallRng::seed_from_u64(7)));
    world
}
