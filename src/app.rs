//! SDL setup and the fixed-rate outer loop.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::{Window, WindowContext};
use tracing::{info, warn};

use crate::constants::{CANVAS_SIZE, LOOP_TIME};
use crate::game::Game;

pub struct App {
    game: Game,
}

impl App {
    /// Initializes SDL, builds the window, and assembles the game.
    ///
    /// The canvas, texture creator, and ttf context are leaked: they live for
    /// the whole process and SDL resources borrow from them, so a `'static`
    /// borrow is the honest lifetime.
    pub fn new() -> Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let ttf_context: &'static Sdl2TtfContext = Box::leak(Box::new(sdl2::ttf::init().map_err(|e| anyhow!(e.to_string()))?));

        let window = video_subsystem
            .window("Invader", CANVAS_SIZE.x, CANVAS_SIZE.y)
            .position_centered()
            .build()?;

        let mut canvas = window.into_canvas().build()?;
        canvas.set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)?;

        let canvas: &'static mut Canvas<Window> = Box::leak(Box::new(canvas));
        let texture_creator: &'static TextureCreator<WindowContext> = Box::leak(Box::new(canvas.texture_creator()));

        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        let game = Game::new(canvas, texture_creator, ttf_context, event_pump)?;

        Ok(Self { game })
    }

    /// Runs ticks at a fixed 60 Hz until the game asks to exit.
    pub fn run(&mut self) {
        loop {
            let start = Instant::now();

            if self.game.tick() {
                info!("Exit requested. Exiting...");
                return;
            }

            let elapsed = start.elapsed();
            if elapsed < LOOP_TIME {
                let remaining = LOOP_TIME.saturating_sub(elapsed);
                if remaining != Duration::ZERO {
                    spin_sleep::sleep(remaining);
                }
            } else {
                warn!("Game loop behind schedule by: {:?}", elapsed - LOOP_TIME);
            }
        }
    }
}
