//! Willowbrook: a small 2D life-sim prototype
//!
//! Walk the player around a field of rocks while their needs drain, or
//! switch to the tile map editor and paint the world:
//! - Fixed-capacity entity pool, drawn in slot order
//! - Camera that eases after the player
//! - Six needs that tick down and can be topped up
//! - Checkerboard tile editor with six layers and RON save/load

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod config;
mod editor;
mod game;
mod input;
mod tiles;
mod view;

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use app::{AppMode, AppState};
use config::{GameConfig, DEFAULT_CONFIG_PATH};
use input::FrameInput;

#[derive(Parser, Debug)]
#[command(name = "willowbrook", version = VERSION)]
#[command(about = "A small 2D life-sim prototype with a tile-map editor")]
struct Cli {
    /// Config file (RON); defaults are used when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Mode to start in, overriding the config
    #[arg(long, value_enum)]
    mode: Option<AppMode>,

    /// Seed for rock placement
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Willowbrook".to_owned(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

/// Load everything, then run the frame loop until the player quits
async fn run(cli: Cli) -> Result<()> {
    log::info!("=== Willowbrook v{} ===", VERSION);

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed loading config {}", cli.config.display()))?;
    let mode = cli.mode.unwrap_or(config.start_mode);
    let seed = cli.seed.unwrap_or_else(|| macroquad::miniquad::date::now() as u64);

    let sprites = assets::load_sprites(&config.sprites).await?;
    let palette = assets::load_palette(&config.tiles).await?;
    let font = assets::load_font(config.font_path.as_deref()).await?;

    let mut app = AppState::new(&config, mode, seed, sprites, palette, font);
    log::info!("Starting in {} mode", mode.label());

    loop {
        let delta_t = get_frame_time();
        let window = vec2(screen_width(), screen_height());

        let input = FrameInput::poll();
        app.update(&input, delta_t, window);
        if app.exit_requested {
            break;
        }
        app.draw(window);

        next_frame().await;
    }

    log::info!("Goodbye");
    Ok(())
}
