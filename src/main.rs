//! # Flying Dragon Main Entry Point
//!
//! Parses the command line, sets up logging, opens the window and hands
//! control to the scene manager.

use clap::Parser;
use flying_dragon::config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use flying_dragon::generation::utils::time_seed;
use flying_dragon::{DragonError, DragonResult, GameConfig, SceneManager};
use log::{error, info, LevelFilter};
use macroquad::prelude::Conf;
use std::str::FromStr;

/// Command line arguments for Flying Dragon.
#[derive(Parser, Debug, Clone)]
#[command(name = "flying-dragon")]
#[command(about = "A side-scroller about a dragon dodging rocks, trees and fireballs")]
#[command(version)]
struct Args {
    /// Random seed for the session (obstacles and clouds)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the start screen and begin a run immediately
    #[arg(long)]
    skip_start: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the game tuning as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() -> DragonResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    let config = GameConfig::default();
    config.validate()?;

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    info!("Starting Flying Dragon v{}", flying_dragon::VERSION);

    macroquad::Window::from_config(window_conf(), run_game(args, config));
    Ok(())
}

/// Initializes the logging system based on the specified log level.
///
/// `RUST_LOG`, when set, takes precedence over `--log-level`.
fn initialize_logging(log_level: &str) -> DragonResult<()> {
    let level = LevelFilter::from_str(log_level)
        .map_err(|_| DragonError::InvalidConfig(format!("unknown log level '{}'", log_level)))?;

    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(level.to_string().to_lowercase()),
        )
        .init();
    }

    Ok(())
}

/// Runs the scene loop inside the macroquad window.
async fn run_game(args: Args, config: GameConfig) {
    let seed = args.seed.unwrap_or_else(time_seed);

    let result = match SceneManager::new(config, seed, args.skip_start) {
        Ok(mut scenes) => scenes.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => info!("Game loop ended"),
        Err(e) => {
            error!("Game loop failed: {}", e);
            std::process::exit(1);
        }
    }
}
