//! Invader game library crate.

pub mod app;
pub mod asset;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod spawn;
pub mod systems;
pub mod texture;
