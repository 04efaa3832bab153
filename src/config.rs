//! Game configuration: screen geometry, ball behaviour and presentation.
//!
//! A [`GameConfig`] is built once at start-up (from defaults or a TOML file)
//! and passed by reference to everything that needs geometry.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Where a freshly spawned ball is placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Against the paddle plane, just below the vertical centre.
    #[default]
    DefaultPosition,
    FixedPosition { x: f32, y: f32 },
    /// Anywhere in the middle half of the play width, inside the walls.
    RandomPosition,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Strip above the play area used for the score line.
    pub hud_height: u32,
    pub border_width: u32,
    pub ball_radius: i32,
    /// Initial speed of each ball; balls start moving up and to the left.
    pub ball_speed: [f32; 2],
    pub ball_count: usize,
    /// Speed balls up after every n points. Zero disables escalation.
    pub escalate_every_n_points: u32,
    pub escalation_step: f32,
    pub frame_delay_ms: u64,
    pub foreground: [u8; 3],
    pub background: [u8; 3],
    pub game_over_colour: [u8; 3],
    pub font_path: PathBuf,
    pub font_size: u16,
    pub spawn_policy: SpawnPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 800,
            screen_height: 500,
            hud_height: 25,
            border_width: 10,
            ball_radius: 10,
            ball_speed: [10.0, 10.0],
            ball_count: 1,
            escalate_every_n_points: 3,
            escalation_step: 2.0,
            frame_delay_ms: 20,
            foreground: [255, 255, 255],
            background: [0, 0, 0],
            game_over_colour: [255, 0, 0],
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: 24,
            spawn_policy: SpawnPolicy::DefaultPosition,
        }
    }
}

impl GameConfig {
    pub fn load_from_path(path: &Path) -> Result<GameConfig, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn play_width(&self) -> u32 {
        self.screen_width
    }

    pub fn play_height(&self) -> u32 {
        self.screen_height.saturating_sub(self.hud_height)
    }

    pub fn paddle_height(&self) -> u32 {
        self.play_height() / 10
    }

    /// Distance from a wall's outer edge at which a ball's centre touches it.
    pub fn wall_margin(&self) -> f32 {
        self.border_width as f32 + self.ball_radius as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| Err(ConfigError::Invalid(reason));

        if self.hud_height >= self.screen_height {
            return invalid(format!(
                "hud height {} leaves no room in a {} px high screen",
                self.hud_height, self.screen_height
            ));
        }
        if self.border_width == 0 {
            return invalid("border width must be at least 1".to_string());
        }
        if self.ball_radius <= 0 {
            return invalid(format!("ball radius must be positive, got {}", self.ball_radius));
        }
        if self.ball_count == 0 {
            return invalid("at least one ball is required".to_string());
        }
        if self.paddle_height() == 0 {
            return invalid(format!(
                "play height {} is too small for a paddle",
                self.play_height()
            ));
        }
        let margin = self.wall_margin();
        if self.play_height() as f32 <= 2.0 * margin
            || self.play_height() <= 2 * self.border_width + self.paddle_height()
        {
            return invalid(format!(
                "play height {} does not fit the walls, ball and paddle",
                self.play_height()
            ));
        }
        if self.play_width() as f32 <= 2.0 * margin {
            return invalid(format!(
                "play width {} does not fit the walls and ball",
                self.play_width()
            ));
        }
        if !self.ball_speed.iter().all(|v| v.is_finite()) {
            return invalid(format!("ball speed {:?} is not finite", self.ball_speed));
        }
        if !self.escalation_step.is_finite() || self.escalation_step < 0.0 {
            return invalid(format!(
                "escalation step must be a non-negative number, got {}",
                self.escalation_step
            ));
        }
        if let SpawnPolicy::FixedPosition { x, y } = self.spawn_policy {
            let max_x = self.play_width() as f32 - margin;
            let max_y = self.play_height() as f32 - margin;
            // NaN fails both range checks
            if !(x >= margin && x < max_x) || !(y > margin && y < max_y) {
                return invalid(format!(
                    "fixed spawn position ({x}, {y}) is outside the play area \
                     ({margin} <= x < {max_x}, {margin} < y < {max_y})"
                ));
            }
        }
        if self.font_size == 0 {
            return invalid("font size must be positive".to_string());
        }
        Ok(())
    }
}
