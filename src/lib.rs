//! Brickfall - a brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bricks, collision strategies, game state)
//! - `settings`: Persisted game preferences
//! - `highscores`: Best-runs table
//!
//! The simulation is headless: all coordinates are window coordinates with
//! the origin at the top-left corner and y pointing down. Rendering, input
//! devices, and audio are the embedder's concern.

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Border walls (left, right, top; the bottom edge is open)
    pub const BORDER_WIDTH: f32 = 15.0;
    pub const BORDER_PADDING: f32 = BORDER_WIDTH * 1.5;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 250.0;

    /// Pucks (bonus balls) are smaller than the main ball
    pub const PUCK_RADIUS: f32 = BALL_RADIUS * 0.75;
    pub const NUM_PUCKS: u32 = 2;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_SPEED: f32 = 450.0;
    /// Vertical center of the player paddle
    pub const PADDLE_Y: f32 = WINDOW_HEIGHT - BORDER_PADDING * 2.0;

    /// Temporary paddle spawns at board center height with a fixed hit budget
    pub const TEMP_PADDLE_Y: f32 = WINDOW_HEIGHT / 2.0;
    pub const TEMP_PADDLE_HITS: u32 = 4;

    /// Brick grid defaults
    pub const BRICK_HEIGHT: f32 = 15.0;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const DEFAULT_BRICK_ROWS: u32 = 7;
    pub const DEFAULT_BRICKS_PER_ROW: u32 = 8;

    /// Falling heart pickups
    pub const HEART_SIZE: f32 = 15.0;
    pub const HEART_SPEED: f32 = 100.0;

    /// Lives
    pub const START_LIVES: u32 = 3;
    pub const MAX_LIVES: u32 = 4;

    /// Turbo mode: speed multiplier and how many further main-ball
    /// collisions it lasts
    pub const TURBO_FACTOR: f32 = 1.4;
    pub const TURBO_HIT_LIMIT: u32 = 6;
}
