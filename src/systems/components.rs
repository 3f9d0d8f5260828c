//! Components, bundles, and resources shared by the simulation systems.

use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use rand::rngs::SmallRng;

use crate::asset::SpriteKind;
use crate::constants::mechanics;
use crate::geometry::Rect;

/// The bounding rectangle of an entity on the stage.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Rect);

/// Pause counter; while positive, the entity's normal update logic is
/// suppressed and the counter ticks down by one per frame.
///
/// Set to [`mechanics::STUN_TICKS`] on every live entity when the player is
/// hit, producing the battlefield freeze. Explosions and barricades carry the
/// counter but ignore it, matching the freeze's visual behavior.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stun(pub u32);

/// Which sprite sheet and frame an entity is drawn with.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderable {
    pub kind: SpriteKind,
    pub frame: usize,
}

/// The player ship. Exactly one exists while a session is live.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    /// Horizontal movement speed, pixels per tick.
    pub speed: f32,
    /// Remaining lives. The hit that lands with this at zero ends the game.
    pub lives: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            speed: mechanics::PLAYER_SPEED,
            lives: mechanics::PLAYER_LIVES,
        }
    }
}

/// Marker for the player's bullet. The fire action enforces that at most one
/// exists at a time.
#[derive(Component, Default, Debug)]
pub struct PlayerBullet;

/// An enemy in the formation, distinguished by point value rather than type.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub points: u32,
}

/// Per-enemy formation movement state.
///
/// `step` is the signed horizontal distance per movement event; its sign
/// encodes the travel direction and flips at every step-down.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct FormationMovement {
    /// Ticks until the next movement event. Always in `[0, interval]`.
    pub timer: u32,
    /// Current ticks between movement events; shrinks at each step-down.
    pub interval: u32,
    pub step: f32,
    /// False once the formation has been told to step down on its next event.
    pub moving_horizontally: bool,
    /// True for the movement cycle immediately following a step-down.
    pub just_stepped_down: bool,
    /// Drives the two-frame march animation.
    pub animation_frame: u32,
}

impl FormationMovement {
    pub fn new(step: f32) -> Self {
        Self {
            timer: mechanics::STEP_INTERVAL,
            interval: mechanics::STEP_INTERVAL,
            step,
            moving_horizontally: true,
            just_stepped_down: false,
            animation_frame: 0,
        }
    }
}

/// Marker for an enemy beam.
#[derive(Component, Default, Debug)]
pub struct Beam;

/// A purely visual explosion effect; self-destructs when its animation ends.
#[derive(Component, Default, Debug)]
pub struct Explosion {
    /// Elapsed animation ticks, not sheet frames.
    pub frame: u32,
}

/// One destructible barricade cell.
#[derive(Component, Default, Debug)]
pub struct Barricade {
    pub damage: u32,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub position: Position,
    pub stun: Stun,
    pub sprite: Renderable,
}

#[derive(Bundle)]
pub struct BulletBundle {
    pub bullet: PlayerBullet,
    pub position: Position,
    pub stun: Stun,
    pub sprite: Renderable,
}

#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub movement: FormationMovement,
    pub position: Position,
    pub stun: Stun,
    pub sprite: Renderable,
}

#[derive(Bundle)]
pub struct BeamBundle {
    pub beam: Beam,
    pub position: Position,
    pub stun: Stun,
    pub sprite: Renderable,
}

#[derive(Bundle)]
pub struct ExplosionBundle {
    pub explosion: Explosion,
    pub position: Position,
    pub stun: Stun,
    pub sprite: Renderable,
}

#[derive(Bundle)]
pub struct BarricadeBundle {
    pub barricade: Barricade,
    pub position: Position,
    pub stun: Stun,
    pub sprite: Renderable,
}

#[derive(Resource)]
pub struct GlobalState {
    pub exit: bool,
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);

/// Zero-based stage counter; the HUD displays it one-based.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StageCounter(pub u32);

/// Snapshot of the held movement/fire keys, refreshed once per tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Randomness source for enemy beam fire; seeded in tests for determinism.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);
