//! Fixed timestep simulation tick
//!
//! Advances the game deterministically: paddle movement, ball physics,
//! brick collision dispatch, pickup handling, and win/lose transitions.

use glam::Vec2;

use super::collision::{
    ball_below_window, ball_border_collision, ball_rect_collision, reflect_velocity,
};
use super::rect::Rect;
use super::state::{BallKind, Brick, GamePhase, GameState};
use super::strategy::{BrickCounter, Contact, EntityId, StrategyFactory};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle movement direction, clamped to [-1, 1]
    pub move_dir: f32,
    /// Pause toggle
    pub pause: bool,
    /// End the game as a win (debug/testing)
    pub force_win: bool,
    /// Self-play mode - the paddle tracks the ball
    pub self_play: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
            }
            _ => {}
        }
    }

    // Don't tick once paused or finished
    match state.phase {
        GamePhase::Paused | GamePhase::Won | GamePhase::Lost => return,
        GamePhase::Playing => {}
    }

    // Self-play synthesizes paddle movement from the ball positions
    let mut input = input.clone();
    if input.self_play {
        input.move_dir = self_play_dir(state);
    }
    let input = &input;

    if input.force_win {
        log::info!("forced win at tick {}", state.time_ticks);
        state.phase = GamePhase::Won;
        return;
    }

    state.time_ticks += 1;

    // Both paddles respond to the same movement input
    let dx = input.move_dir.clamp(-1.0, 1.0) * PADDLE_SPEED * dt;
    state.paddle.move_by(dx);
    if let Some(temp) = &mut state.temp_paddle {
        temp.rect.pos.x = (temp.rect.pos.x + dx).clamp(0.0, WINDOW_WIDTH - temp.rect.size.x);
    }

    // Move balls and resolve wall/paddle/brick contacts. Brick hits are
    // collected first and dispatched after the movement pass.
    let window = Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let paddle_rect = state.paddle.rect;
    let mut brick_hits: Vec<(EntityId, Contact)> = Vec::new();

    for ball in &mut state.balls {
        ball.pos += ball.vel * dt;

        // Border walls (left/right/top)
        let wall = ball_border_collision(ball.pos, ball.radius, window, BORDER_WIDTH);
        if wall.hit {
            ball.vel = reflect_velocity(ball.vel, wall.normal);
            ball.pos += wall.normal * wall.penetration;
            ball.collisions += 1;
        }

        // Player paddle
        let hit = ball_rect_collision(ball.pos, ball.radius, &paddle_rect);
        if hit.hit && ball.vel.dot(hit.normal) < 0.0 {
            ball.vel = reflect_velocity(ball.vel, hit.normal);
            ball.pos += hit.normal * hit.penetration;
            ball.collisions += 1;
        }

        // Temporary paddle spends one hit from its budget per bounce
        if let Some(temp) = &mut state.temp_paddle {
            let hit = ball_rect_collision(ball.pos, ball.radius, &temp.rect);
            if hit.hit && ball.vel.dot(hit.normal) < 0.0 {
                ball.vel = reflect_velocity(ball.vel, hit.normal);
                ball.pos += hit.normal * hit.penetration;
                ball.collisions += 1;
                temp.register_hit();
            }
        }

        // Bricks: bounce off the first overlapping brick and queue its
        // strategy for dispatch
        for brick in &state.bricks {
            let hit = ball_rect_collision(ball.pos, ball.radius, &brick.rect);
            if hit.hit {
                ball.vel = reflect_velocity(ball.vel, hit.normal);
                ball.pos += hit.normal * hit.penetration;
                ball.collisions += 1;
                brick_hits.push((brick.id, ball.contact()));
                break;
            }
        }
    }

    for (brick_id, other) in brick_hits {
        dispatch_brick_collision(state, brick_id, other);
    }

    // Temp paddle removes itself once its hit budget is spent
    if state.temp_paddle.as_ref().is_some_and(|t| t.expired()) {
        state.temp_paddle = None;
        log::debug!("temp paddle expired");
    }

    // Turbo shuts off after enough further main-ball collisions
    let turbo_spent = match (state.turbo, state.main_ball()) {
        (Some(turbo), Some(ball)) => ball.collisions > turbo.baseline_hits + TURBO_HIT_LIMIT,
        _ => false,
    };
    if turbo_spent {
        state.disable_turbo();
    }

    // Hearts fall; the main paddle catches them, the floor eats them
    for heart in &mut state.hearts {
        heart.pos += heart.vel * dt;
    }
    let mut caught = 0u32;
    state.hearts.retain(|heart| {
        if ball_rect_collision(heart.pos, heart.size / 2.0, &paddle_rect).hit {
            caught += 1;
            return false;
        }
        heart.pos.y <= WINDOW_HEIGHT
    });
    for _ in 0..caught {
        if state.lives < MAX_LIVES {
            state.lives += 1;
            log::debug!("extra life caught, {} lives", state.lives);
        }
    }

    // Fallen pucks despawn; a fallen main ball costs a life
    let mut main_fell = false;
    state.balls.retain(|ball| match ball.kind {
        BallKind::Puck => !ball_below_window(ball.pos, WINDOW_HEIGHT),
        BallKind::Main => {
            if ball_below_window(ball.pos, WINDOW_HEIGHT) {
                main_fell = true;
            }
            true
        }
    });
    if main_fell {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            log::info!("game over at tick {}", state.time_ticks);
            state.phase = GamePhase::Lost;
        } else {
            log::debug!("ball lost, {} lives left", state.lives);
            state.reset_main_ball();
        }
    }

    // All bricks down: the player wins
    if state.phase == GamePhase::Playing && state.bricks_left.value() == 0 {
        log::info!("board cleared at tick {}", state.time_ticks);
        state.phase = GamePhase::Won;
    }

    // Ensure deterministic ordering
    state.normalize_order();
}

/// Run a brick's strategy against the world.
///
/// The counter rides outside the state borrow for the duration of the call,
/// since the state itself is the world the strategy mutates.
fn dispatch_brick_collision(state: &mut GameState, brick_id: EntityId, other: Contact) {
    let Some(brick) = state.bricks.iter().find(|b| b.id == brick_id) else {
        // Already removed by an earlier dispatch this tick
        return;
    };
    let subject = brick.contact();
    let strategy = brick.strategy.clone();

    let mut bricks_left = state.bricks_left;
    strategy.on_collision(state, &mut bricks_left, &subject, &other);
    state.bricks_left = bricks_left;
}

/// Build the brick grid.
///
/// Every brick gets a strategy from the factory and the remaining-bricks
/// counter resets to the full grid size.
pub fn generate_grid(state: &mut GameState) {
    state.bricks.clear();
    state.bricks_left = BrickCounter::new(state.rows * state.cols);

    let cols = state.cols.max(1);
    let brick_width =
        (WINDOW_WIDTH - BORDER_WIDTH * 2.0 - (BRICK_PADDING * cols as f32 - 1.0)) / cols as f32;

    for row in 0..state.rows {
        for col in 0..cols {
            let pos = brick_position(row, col, brick_width);
            let id = state.next_entity_id();
            let strategy = StrategyFactory::new(&mut state.rng).assign();
            state.bricks.push(Brick {
                id,
                rect: Rect::new(pos, Vec2::new(brick_width, BRICK_HEIGHT)),
                strategy,
            });
        }
    }

    log::info!(
        "grid generated: {}x{} bricks, seed {}",
        state.rows,
        cols,
        state.seed
    );
}

fn brick_position(row: u32, col: u32, brick_width: f32) -> Vec2 {
    Vec2::new(
        BORDER_WIDTH + col as f32 * (brick_width + BRICK_PADDING),
        BORDER_WIDTH + row as f32 * (BRICK_HEIGHT + BRICK_PADDING),
    )
}

/// Paddle direction for self-play: chase the lowest descending ball, or an
/// unclaimed heart when nothing threatens
fn self_play_dir(state: &GameState) -> f32 {
    let paddle_x = state.paddle.rect.center().x;

    let target = state
        .balls
        .iter()
        .filter(|b| b.vel.y > 0.0)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|b| b.pos.x)
        .or_else(|| state.hearts.first().map(|h| h.pos.x));

    let Some(target) = target else {
        return 0.0;
    };

    let delta = target - paddle_x;
    if delta.abs() < PADDLE_WIDTH / 4.0 {
        0.0
    } else {
        delta.signum()
    }
}
