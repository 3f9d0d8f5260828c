//! The Entity-Component-System (ECS) module.
//!
//! Components and resources live in [`components`]; each gameplay concern
//! gets its own system module.

pub mod collision;
pub mod components;
pub mod effects;
pub mod enemy;
pub mod input;
pub mod movement;
pub mod player;
pub mod render;
pub mod stage;
pub mod state;
