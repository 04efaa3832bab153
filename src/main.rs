//! A single-paddle Pong game written in Rust.
//!
//! The ball bounces off the top, left and bottom walls while the player
//! guards the open right side with a paddle that follows the mouse. Every
//! return scores a point; the first miss ends the game.

use anyhow::{Context, anyhow};
use clap::Parser;
use log::info;
use rpong::config::{GameConfig, SpawnPolicy};
use rpong::game::Session;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use std::path::PathBuf;
use std::time::Duration;

/// Window title displayed in the title bar
const TITLE: &str = "Pong in Rust";

#[derive(Parser)]
#[command(name = "rpong")]
#[command(about = "Keep the ball in play with a mouse-driven paddle")]
struct Args {
    /// Print debug level logs
    #[arg(short = 'd', long = "debug-mode", alias = "debug_mode")]
    debug_mode: bool,

    /// TOML file overriding the default game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TrueType font used for the score and game-over text
    #[arg(long)]
    font: Option<PathBuf>,

    /// Serve the ball from a random position
    #[arg(long)]
    random_spawn: bool,
}

/// Builds the game configuration from defaults, the optional config file and
/// command line overrides.
fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load_from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(font) = &args.font {
        config.font_path = font.clone();
    }
    if args.random_spawn {
        config.spawn_policy = SpawnPolicy::RandomPosition;
    }
    config.validate()?;
    Ok(config)
}

/// Main entry point.
///
/// Initializes SDL2, creates the window, font and session, then runs the
/// frame loop until the window is closed, Escape is pressed, or any key is
/// pressed after the game is over.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.debug_mode { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let config = load_config(&args)?;

    // Initialize SDL2 subsystems
    let sdl_context = sdl2::init().map_err(|e| anyhow!("failed to initialise SDL: {e}"))?;
    let video_subsystem = sdl_context
        .video()
        .map_err(|e| anyhow!("failed to initialise video: {e}"))?;
    let ttf_context = sdl2::ttf::init().map_err(|e| anyhow!("failed to initialise fonts: {e}"))?;

    let window = video_subsystem
        .window(TITLE, config.screen_width, config.screen_height)
        .position_centered()
        .build()
        .context("failed to create window")?;
    let font = ttf_context
        .load_font(&config.font_path, config.font_size)
        .map_err(|e| anyhow!("failed to load font {}: {e}", config.font_path.display()))?;

    let mut canvas = window.into_canvas().build().context("failed to create canvas")?;
    let mut event_pump = sdl_context
        .event_pump()
        .map_err(|e| anyhow!("failed to open event pump: {e}"))?;

    let frame_delay = Duration::from_millis(config.frame_delay_ms);
    let hud_height = config.hud_height as i32;
    let mut session = Session::new(config)?;
    info!("Starting game");

    'running: loop {
        // Quit on window close or Escape; once the game is over, any key quits
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                    break 'running;
                }
                Event::KeyDown { .. } if !session.is_playing() => break 'running,
                _ => {}
            }
        }

        if session.is_playing() {
            let pointer_y = event_pump.mouse_state().y() - hud_height;
            if session.step(pointer_y).missed {
                info!("Final score {}, press any key to exit", session.score());
            }
        }

        session
            .draw_frame(&mut canvas, &font)
            .map_err(|e| anyhow!("failed to draw frame: {e}"))?;
        canvas.present();
        ::std::thread::sleep(frame_delay);
    }

    info!("Exiting with score {}", session.score());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_accepts_all_spellings() {
        for flag in ["-d", "--debug-mode", "--debug_mode"] {
            let args = Args::try_parse_from(["rpong", flag]).unwrap();
            assert!(args.debug_mode, "{flag}");
        }
        let args = Args::try_parse_from(["rpong"]).unwrap();
        assert!(!args.debug_mode);
    }
}
