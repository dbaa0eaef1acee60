//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod strategy;
pub mod tick;

pub use collision::{CollisionResult, ball_rect_collision, reflect_velocity};
pub use rect::Rect;
pub use state::{Ball, BallKind, Brick, GamePhase, GameState, Heart, Paddle, TempPaddle};
pub use strategy::{
    BrickCounter, BrickStrategy, CollisionWorld, Contact, EntityId, Layer, ObjectKind,
    StrategyFactory,
};
pub use tick::{TickInput, generate_grid, tick};
