use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::hud;
use crate::items::{rgb, Ball, BallOutcome, Paddle, Wall};
use log::{info, warn};
use rand::Rng;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    GameOver,
}

/// Summary of a single [`Session::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub points: u32,
    pub missed: bool,
}

pub struct Session {
    config: GameConfig,
    walls: Vec<Wall>,
    balls: Vec<Ball>,
    paddle: Paddle,
    score: u32,
    status: Status,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Session, ConfigError> {
        Session::with_rng(config, &mut rand::rng())
    }

    pub fn with_rng<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Session, ConfigError> {
        config.validate()?;
        let balls = (0..config.ball_count)
            .map(|_| Ball::spawn(&config, config.spawn_policy, &mut *rng))
            .collect();
        Session::with_balls(config, balls)
    }

    /// Builds a session around the given balls. The config is validated first
    /// since walls and paddle are sized from it.
    pub fn with_balls(config: GameConfig, balls: Vec<Ball>) -> Result<Session, ConfigError> {
        config.validate()?;
        let mut session = Session {
            walls: Wall::borders(&config),
            paddle: Paddle::new(&config),
            balls: Vec::new(),
            score: 0,
            status: Status::Playing,
            config,
        };
        for ball in balls {
            session.add_ball(ball);
        }
        Ok(session)
    }

    fn add_ball(&mut self, mut ball: Ball) {
        ball.id = self.balls.len();
        self.balls.push(ball);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    pub fn add_score(&mut self) {
        self.score += 1;
        info!("Score is {}", self.score);
    }

    fn should_escalate(&self) -> bool {
        let every = self.config.escalate_every_n_points;
        every > 0 && self.score % every == 0
    }

    /// Runs one frame: moves every ball, applies hits and misses, then moves
    /// the paddle to `pointer_y`. Does nothing once the game is over.
    pub fn step(&mut self, pointer_y: i32) -> StepReport {
        let mut report = StepReport::default();
        if self.status == Status::GameOver {
            return report;
        }

        for idx in 0..self.balls.len() {
            match self.balls[idx].step(&self.paddle, &self.config) {
                BallOutcome::InPlay => {}
                BallOutcome::Scored => {
                    self.add_score();
                    report.points += 1;
                    if self.should_escalate() {
                        let ball = &mut self.balls[idx];
                        match ball.escalate(self.config.escalation_step) {
                            Ok(()) => info!("Ball {} sped up to {:?}", ball.id, ball.velocity),
                            Err(e) => warn!("Skipping speed-up for ball {}: {e}", ball.id),
                        }
                    }
                }
                BallOutcome::Missed => {
                    info!("Missed - Game Over with score {}", self.score);
                    self.status = Status::GameOver;
                    report.missed = true;
                    break;
                }
            }
        }

        self.paddle.update(pointer_y);
        report
    }

    pub fn draw_frame(&self, canvas: &mut Canvas<Window>, font: &Font) -> Result<(), String> {
        let foreground = rgb(self.config.foreground);
        canvas.set_draw_color(rgb(self.config.background));
        canvas.clear();

        canvas.set_viewport(None::<Rect>);
        hud::draw_score(
            canvas,
            font,
            self.score,
            foreground,
            self.config.border_width as i32,
            self.config.hud_height,
        )?;

        canvas.set_viewport(Rect::new(
            0,
            self.config.hud_height as i32,
            self.config.play_width(),
            self.config.play_height(),
        ));
        for wall in &self.walls {
            wall.draw(canvas)?;
        }
        for ball in &self.balls {
            ball.draw(canvas)?;
        }
        self.paddle.draw(canvas)?;
        canvas.set_viewport(None::<Rect>);

        if self.status == Status::GameOver {
            hud::draw_game_over(canvas, font, rgb(self.config.game_over_colour), foreground)?;
        }
        Ok(())
    }
}
