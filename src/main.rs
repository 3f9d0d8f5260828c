use anyhow::Result;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use invaders::app::App;
use invaders::constants::LOOP_TIME;

/// The main entry point of the application.
///
/// Sets up tracing, initializes SDL and the game, and enters the main loop.
pub fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    let mut app = App::new()?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    app.run();

    Ok(())
}
