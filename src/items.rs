use crate::config::{GameConfig, SpawnPolicy};
use crate::error::{Axis, EscalationError};
use crate::library::*;
use log::{debug, info};
use rand::Rng;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget};

/// Vertical offset of the default spawn point below the play area centre.
const DEFAULT_SPAWN_DROP: u32 = 5;

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

pub fn rgb(channels: [u8; 3]) -> Color {
    Color::RGB(channels[0], channels[1], channels[2])
}

/// What happened to a ball during one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallOutcome {
    InPlay,
    Scored,
    Missed,
}

pub struct Wall {
    pub rect: Rect,
    pub color: Color,
}

impl Wall {
    /// The top, left and bottom walls of the play area. The right side is open.
    pub fn borders(config: &GameConfig) -> Vec<Wall> {
        let width = config.play_width();
        let height = config.play_height();
        let border = config.border_width;
        let color = rgb(config.foreground);
        vec![
            Wall { rect: Rect::new(0, 0, width, border), color },
            Wall { rect: Rect::new(0, 0, border, height), color },
            Wall {
                rect: Rect::new(0, height.saturating_sub(border) as i32, width, border),
                color,
            },
        ]
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) -> Result<(), String> {
        canvas.set_draw_color(self.color);
        canvas.fill_rect(self.rect)
    }
}

#[derive(Clone, Debug)]
pub struct Ball {
    pub id: usize,
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub radius: i32,
    pub color: Color,
}

impl Ball {
    pub fn new(
        position: [f32; 2],
        velocity: [f32; 2],
        radius: Option<i32>,
        color: Option<Color>,
    ) -> Ball {
        Ball {
            id: 0,
            position,
            velocity,
            radius: radius.unwrap_or(10),
            color: color.unwrap_or(Color::WHITE),
        }
    }

    pub fn spawn<R: Rng>(config: &GameConfig, policy: SpawnPolicy, rng: &mut R) -> Ball {
        let margin = config.wall_margin();
        let width = config.play_width() as f32;
        let height = config.play_height() as f32;
        let position = match policy {
            SpawnPolicy::DefaultPosition => {
                debug!("No spawn position given, putting ball in default position");
                [
                    width - margin,
                    (config.play_height() / 2 + DEFAULT_SPAWN_DROP) as f32,
                ]
            }
            SpawnPolicy::FixedPosition { x, y } => [x, y],
            SpawnPolicy::RandomPosition => [
                rng.random_range((width / 4.0)..(width * 3.0 / 4.0)),
                rng.random_range(margin..(height - margin)),
            ],
        };
        let velocity = [-config.ball_speed[0], -config.ball_speed[1]];
        Ball::new(position, velocity, Some(config.ball_radius), Some(rgb(config.foreground)))
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) -> Result<(), String> {
        let x = self.position[0] as i16;
        let y = self.position[1] as i16;
        let rad = self.radius as i16;
        let color = to_abgr(self.color);
        canvas.filled_circle(x, y, rad, color)
    }

    pub fn advance(&mut self) {
        self.position = [
            self.position[0] + self.velocity[0],
            self.position[1] + self.velocity[1],
        ];
    }

    fn wall_margin(&self, config: &GameConfig) -> f32 {
        config.border_width as f32 + self.radius as f32
    }

    // No positional correction: a ball may sit past a wall for one step.
    pub fn reflect_off_walls(&mut self, config: &GameConfig) {
        let margin = self.wall_margin(config);
        let height = config.play_height() as f32;
        if self.position[0] <= margin {
            self.velocity[0] = flip(self.velocity[0]);
        }
        if self.position[1] <= margin || self.position[1] >= height - margin {
            self.velocity[1] = flip(self.velocity[1]);
        }
    }

    pub fn check_paddle(&mut self, paddle: &Paddle, config: &GameConfig) -> BallOutcome {
        let plane = config.play_width() as f32 - self.wall_margin(config);
        if self.position[0] < plane {
            debug!("ball {} in play at {:?}", self.id, self.position);
            return BallOutcome::InPlay;
        }
        info!("Ball {} at end", self.id);
        let (top, bottom) = paddle.bounds();
        let radius = self.radius as f32;
        if within(self.position[1], top - radius, bottom + radius) {
            self.velocity[0] = flip(self.velocity[0]);
            info!("Hit at y={}", self.position[1]);
            BallOutcome::Scored
        } else {
            info!("Missed at y={}, paddle spans {top}..{bottom}", self.position[1]);
            BallOutcome::Missed
        }
    }

    pub fn step(&mut self, paddle: &Paddle, config: &GameConfig) -> BallOutcome {
        self.advance();
        self.reflect_off_walls(config);
        self.check_paddle(paddle, config)
    }

    /// Speeds the ball up along both axes, keeping its direction.
    pub fn escalate(&mut self, step: f32) -> Result<(), EscalationError> {
        let vx = escalate(self.velocity[0], step)
            .ok_or(EscalationError::ZeroVelocity { axis: Axis::X })?;
        let vy = escalate(self.velocity[1], step)
            .ok_or(EscalationError::ZeroVelocity { axis: Axis::Y })?;
        self.velocity = [vx, vy];
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Paddle {
    pub position: [f32; 2],
    pub width: u32,
    pub height: u32,
    pub color: Color,
    min_y: f32,
    max_y: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Paddle {
        let width = config.border_width;
        let height = config.paddle_height();
        let play_height = config.play_height();
        Paddle {
            position: [
                (config.play_width() - width) as f32,
                play_height as f32 / 2.0 - height as f32 / 2.0,
            ],
            width,
            height,
            color: rgb(config.foreground),
            min_y: config.border_width as f32,
            max_y: play_height.saturating_sub(height + config.border_width) as f32,
        }
    }

    pub fn bounds(&self) -> (f32, f32) {
        let top = self.position[1];
        (top, top + self.height as f32)
    }

    pub fn update(&mut self, pointer_y: i32) {
        self.position[1] = clamp_between(pointer_y as f32, self.min_y, self.max_y);
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) -> Result<(), String> {
        let rect = Rect::new(
            self.position[0] as i32,
            self.position[1] as i32,
            self.width,
            self.height,
        );
        canvas.set_draw_color(self.color);
        canvas.fill_rect(rect)
    }
}
