//! Game state and core simulation types
//!
//! All mutable game data lives here: paddle, balls, bricks, pickups, lives,
//! and the shared remaining-bricks counter. `GameState` is the production
//! implementation of the [`CollisionWorld`] interface that brick strategies
//! mutate the world through.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::strategy::{
    BrickCounter, BrickStrategy, CollisionWorld, Contact, EntityId, Layer, ObjectKind,
};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// All bricks cleared
    Won,
    /// All lives lost
    Lost,
}

/// Distinguishes the main ball from bonus pucks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallKind {
    Main,
    Puck,
}

/// A ball entity (main ball or puck)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: EntityId,
    pub kind: BallKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Lifetime bounce tally; turbo expiry is measured against this
    pub collisions: u32,
}

impl Ball {
    pub fn main(id: EntityId) -> Self {
        Self {
            id,
            kind: BallKind::Main,
            pos: Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            collisions: 0,
        }
    }

    pub fn puck(id: EntityId, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            kind: BallKind::Puck,
            pos,
            vel,
            radius: PUCK_RADIUS,
            collisions: 0,
        }
    }

    /// Snapshot for strategy dispatch
    pub fn contact(&self) -> Contact {
        Contact {
            id: self.id,
            kind: match self.kind {
                BallKind::Main => ObjectKind::Ball,
                BallKind::Puck => ObjectKind::Puck,
            },
            center: self.pos,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(center: Vec2) -> Self {
        Self {
            rect: Rect::from_center(center, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT)),
        }
    }

    /// Shift horizontally, clamped to the window
    pub fn move_by(&mut self, dx: f32) {
        let x = (self.rect.pos.x + dx).clamp(0.0, WINDOW_WIDTH - self.rect.size.x);
        self.rect.pos.x = x;
    }
}

/// The temporary second paddle, alive for a fixed number of hits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempPaddle {
    pub rect: Rect,
    pub hits_left: u32,
}

impl TempPaddle {
    pub fn new() -> Self {
        Self {
            rect: Rect::from_center(
                Vec2::new(WINDOW_WIDTH / 2.0, TEMP_PADDLE_Y),
                Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            ),
            hits_left: TEMP_PADDLE_HITS,
        }
    }

    /// One more ball bounce spent from the budget
    pub fn register_hit(&mut self) {
        self.hits_left = self.hits_left.saturating_sub(1);
    }

    pub fn expired(&self) -> bool {
        self.hits_left == 0
    }
}

impl Default for TempPaddle {
    fn default() -> Self {
        Self::new()
    }
}

/// A destructible brick carrying its collision strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: EntityId,
    pub rect: Rect,
    pub strategy: BrickStrategy,
}

impl Brick {
    pub fn contact(&self) -> Contact {
        Contact {
            id: self.id,
            kind: ObjectKind::Brick,
            center: self.rect.center(),
        }
    }
}

/// A falling heart pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heart {
    pub id: EntityId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

/// Turbo mode bookkeeping: the main ball's bounce tally when turbo started
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TurboState {
    pub baseline_hits: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; every random draw flows through here
    pub rng: Pcg32,
    /// Grid dimensions for this session
    pub rows: u32,
    pub cols: u32,
    /// Lives remaining
    pub lives: u32,
    /// Bricks still standing, shared with every strategy dispatch
    pub bricks_left: BrickCounter,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub paddle: Paddle,
    /// At most one temporary paddle exists at a time
    pub temp_paddle: Option<TempPaddle>,
    pub balls: Vec<Ball>,
    pub bricks: Vec<Brick>,
    pub hearts: Vec<Heart>,
    pub turbo: Option<TurboState>,
    next_id: u32,
}

impl GameState {
    /// Create a new game with the default grid
    pub fn new(seed: u64) -> Self {
        Self::with_grid(seed, DEFAULT_BRICK_ROWS, DEFAULT_BRICKS_PER_ROW)
    }

    /// Create a new game with the given grid dimensions.
    ///
    /// The brick grid itself is built by [`super::tick::generate_grid`];
    /// until then the board holds only the paddle and the main ball.
    pub fn with_grid(seed: u64, rows: u32, cols: u32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            rows,
            cols,
            lives: START_LIVES,
            bricks_left: BrickCounter::new(rows * cols),
            time_ticks: 0,
            phase: GamePhase::Playing,
            paddle: Paddle::new(Vec2::new(WINDOW_WIDTH / 2.0, PADDLE_Y)),
            temp_paddle: None,
            balls: Vec::new(),
            bricks: Vec::new(),
            hearts: Vec::new(),
            turbo: None,
            next_id: 1,
        };

        state.spawn_main_ball();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn the main ball at the window center with a random diagonal
    /// velocity
    pub fn spawn_main_ball(&mut self) {
        let id = self.next_entity_id();
        let mut ball = Ball::main(id);
        ball.vel = random_diagonal_velocity(&mut self.rng);
        self.balls.push(ball);
    }

    /// Re-center the main ball after a life loss
    pub fn reset_main_ball(&mut self) {
        let vel = random_diagonal_velocity(&mut self.rng);
        if let Some(ball) = self.main_ball_mut() {
            ball.pos = Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0);
            ball.vel = vel;
        }
    }

    pub fn main_ball(&self) -> Option<&Ball> {
        self.balls.iter().find(|b| b.kind == BallKind::Main)
    }

    pub fn main_ball_mut(&mut self) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.kind == BallKind::Main)
    }

    /// Turbo is on: restore normal speed and forget the baseline
    pub fn disable_turbo(&mut self) {
        if self.turbo.take().is_some() {
            if let Some(ball) = self.main_ball_mut() {
                ball.vel /= TURBO_FACTOR;
            }
            log::debug!("turbo expired");
        }
    }

    /// Ensure stable iteration order for deterministic replay
    pub fn normalize_order(&mut self) {
        self.balls.sort_by_key(|b| b.id);
        self.bricks.sort_by_key(|b| b.id);
        self.hearts.sort_by_key(|h| h.id);
    }
}

impl CollisionWorld for GameState {
    fn try_remove(&mut self, id: EntityId, layer: Layer) -> bool {
        match layer {
            Layer::Static => {
                let before = self.bricks.len();
                self.bricks.retain(|b| b.id != id);
                self.bricks.len() < before
            }
            Layer::Default => {
                let before = self.hearts.len() + self.balls.len();
                self.hearts.retain(|h| h.id != id);
                self.balls
                    .retain(|b| b.id != id || b.kind == BallKind::Main);
                self.hearts.len() + self.balls.len() < before
            }
            Layer::Ui => false,
        }
    }

    fn spawn_extra_life(&mut self, center: Vec2) {
        let id = self.next_entity_id();
        self.hearts.push(Heart {
            id,
            pos: center,
            vel: Vec2::new(0.0, HEART_SPEED),
            size: HEART_SIZE,
        });
        log::debug!("heart {id} dropped at {center}");
    }

    fn spawn_pucks(&mut self, center: Vec2) {
        for _ in 0..NUM_PUCKS {
            // Angle in [0, pi): pucks start moving downward or sideways,
            // never up into the freshly opened gap
            let theta = self.rng.random_range(0.0..std::f32::consts::PI);
            let vel = Vec2::new(theta.cos(), theta.sin()) * BALL_SPEED;
            let id = self.next_entity_id();
            self.balls.push(Ball::puck(id, center, vel));
        }
        log::debug!("{NUM_PUCKS} pucks spawned at {center}");
    }

    fn spawn_temp_paddle(&mut self) {
        if self.temp_paddle.is_none() {
            self.temp_paddle = Some(TempPaddle::new());
            log::debug!("temp paddle spawned");
        }
    }

    fn enable_turbo(&mut self) {
        if self.turbo.is_some() {
            return;
        }
        let Some(ball) = self.main_ball_mut() else {
            return;
        };
        let baseline_hits = ball.collisions;
        ball.vel *= TURBO_FACTOR;
        self.turbo = Some(TurboState { baseline_hits });
        log::debug!("turbo enabled at {baseline_hits} ball hits");
    }
}

/// Random diagonal launch velocity: full speed on both axes, each sign
/// chosen by a coin flip
fn random_diagonal_velocity<R: Rng>(rng: &mut R) -> Vec2 {
    let x = if rng.random_bool(0.5) {
        BALL_SPEED
    } else {
        -BALL_SPEED
    };
    let y = if rng.random_bool(0.5) {
        BALL_SPEED
    } else {
        -BALL_SPEED
    };
    Vec2::new(x, y)
}
