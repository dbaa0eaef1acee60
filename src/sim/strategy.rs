//! Brick collision strategies
//!
//! Every brick owns one strategy, assigned at grid build time by
//! [`StrategyFactory`]. On collision the brick's strategy runs exactly once,
//! mutating the world through the [`CollisionWorld`] interface and the
//! shared remaining-bricks counter. Strategies hold no mutable state of
//! their own: a composite is plain data wrapping two children, and all
//! effects happen at call time.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Entity identifier, unique within one game session
pub type EntityId = u32;

/// Strategy kind indices. The factory accepts any u32 and maps unknown
/// values to the basic strategy.
pub const KIND_BASIC: u32 = 0;
pub const KIND_SPAWN_PUCKS: u32 = 1;
pub const KIND_TEMP_PADDLE: u32 = 2;
pub const KIND_TURBO: u32 = 3;
pub const KIND_EXTRA_LIFE: u32 = 4;
pub const KIND_DOUBLE: u32 = 5;

/// Composites stop nesting past this depth
pub const MAX_DOUBLE_NESTING: u32 = 3;

/// Object layers in the world registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layer {
    /// Moving objects: balls, pucks, paddles, hearts
    Default,
    /// Static destructibles: bricks
    Static,
    /// Overlay widgets (life panel)
    Ui,
}

/// Identity tag of a collision participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// The main ball
    Ball,
    /// A bonus ball spawned by a brick
    Puck,
    Paddle,
    TempPaddle,
    Brick,
    Heart,
}

/// Snapshot of one collision participant at dispatch time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: EntityId,
    pub kind: ObjectKind,
    pub center: Vec2,
}

/// Count of bricks still standing.
///
/// One logical counter exists per game session; every strategy dispatch
/// sees the same counter. It never goes negative: decrements are driven by
/// successful brick removals only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickCounter(u32);

impl BrickCounter {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }
}

/// World mutations available to strategies.
///
/// The game state implements this; tests substitute a recording mock. All
/// spawn requests are fire-and-forget: the strategy observes no result.
pub trait CollisionWorld {
    /// Remove an object from a layer if it is present. Returns whether it
    /// was actually removed, which is the idempotency signal for the basic
    /// strategy: the second removal of the same brick reports `false`.
    fn try_remove(&mut self, id: EntityId, layer: Layer) -> bool;

    /// Drop a heart pickup at the given point.
    fn spawn_extra_life(&mut self, center: Vec2);

    /// Spawn the bonus pucks at the given point.
    fn spawn_pucks(&mut self, center: Vec2);

    /// Spawn the temporary second paddle. No-op while one is active.
    fn spawn_temp_paddle(&mut self);

    /// Put the main ball into turbo mode. No-op while already active.
    fn enable_turbo(&mut self);
}

/// The behavior a brick triggers when hit.
///
/// Each special variant performs the basic hit (remove + count) before its
/// own side effect. `Double` chains two child strategies; the factory bounds
/// how deep such chains nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStrategy {
    /// Remove the brick and decrement the remaining-bricks counter
    Basic,
    /// Basic, then spawn two pucks at the brick center
    SpawnPucks,
    /// Basic, then spawn the temporary paddle
    TempPaddle,
    /// Basic, then speed the main ball up for a few hits
    Turbo,
    /// Basic, then drop a heart pickup
    ExtraLife,
    /// Run both child strategies in order on every collision
    Double(Box<BrickStrategy>, Box<BrickStrategy>),
}

impl BrickStrategy {
    /// Handle a collision between `subject` (the brick carrying this
    /// strategy) and `other` (whatever hit it).
    ///
    /// Safe to call repeatedly: destructive effects are guarded by the
    /// registry removal, so an already-removed subject leaves the counter
    /// untouched.
    pub fn on_collision<W: CollisionWorld>(
        &self,
        world: &mut W,
        bricks_left: &mut BrickCounter,
        subject: &Contact,
        other: &Contact,
    ) {
        match self {
            BrickStrategy::Basic => {
                basic_hit(world, bricks_left, subject);
            }
            BrickStrategy::SpawnPucks => {
                basic_hit(world, bricks_left, subject);
                world.spawn_pucks(subject.center);
            }
            BrickStrategy::TempPaddle => {
                basic_hit(world, bricks_left, subject);
                world.spawn_temp_paddle();
            }
            BrickStrategy::Turbo => {
                basic_hit(world, bricks_left, subject);
                // Only the main ball triggers turbo, not pucks
                if other.kind == ObjectKind::Ball {
                    world.enable_turbo();
                }
            }
            BrickStrategy::ExtraLife => {
                basic_hit(world, bricks_left, subject);
                world.spawn_extra_life(subject.center);
            }
            BrickStrategy::Double(first, second) => {
                first.on_collision(world, bricks_left, subject, other);
                second.on_collision(world, bricks_left, subject, other);
            }
        }
    }

    /// Length of the longest chain of nested composites
    pub fn composite_depth(&self) -> u32 {
        match self {
            BrickStrategy::Double(first, second) => {
                1 + first.composite_depth().max(second.composite_depth())
            }
            _ => 0,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, BrickStrategy::Double(..))
    }
}

/// Remove the brick from the static layer and count it.
///
/// Decrements only on the first successful removal, so duplicate collision
/// callbacks against the same brick leave the counter alone. When a
/// composite's two children both hit the same brick, only the first one
/// counts.
fn basic_hit<W: CollisionWorld>(
    world: &mut W,
    bricks_left: &mut BrickCounter,
    subject: &Contact,
) {
    if world.try_remove(subject.id, Layer::Static) {
        bricks_left.decrement();
        log::debug!(
            "brick {} destroyed, {} left",
            subject.id,
            bricks_left.value()
        );
    }
}

/// Builds collision strategies from kind indices, including the randomized
/// recursive composition of double-behavior strategies.
///
/// The random source is injected so grid builds replay deterministically
/// from a session seed.
pub struct StrategyFactory<'a, R: Rng> {
    rng: &'a mut R,
}

impl<'a, R: Rng> StrategyFactory<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    /// Pick the strategy for a freshly built brick: a fair coin chooses the
    /// plain basic strategy, otherwise one of the five special kinds. Most
    /// bricks end up plain with a sprinkling of special ones.
    pub fn assign(&mut self) -> BrickStrategy {
        if self.rng.random_bool(0.5) {
            self.build(KIND_BASIC, 0)
        } else {
            let index = self.rng.random_range(KIND_SPAWN_PUCKS..=KIND_DOUBLE);
            self.build(index, 0)
        }
    }

    /// Build the strategy for a kind index. Unknown indices fall back to
    /// the basic strategy rather than erroring: the factory's own draws are
    /// the only input source.
    ///
    /// `depth` counts how many composites the current build is nested
    /// inside; pass 0 at the top level.
    pub fn build(&mut self, index: u32, depth: u32) -> BrickStrategy {
        match index {
            KIND_SPAWN_PUCKS => BrickStrategy::SpawnPucks,
            KIND_TEMP_PADDLE => BrickStrategy::TempPaddle,
            KIND_TURBO => BrickStrategy::Turbo,
            KIND_EXTRA_LIFE => BrickStrategy::ExtraLife,
            KIND_DOUBLE => {
                let first = self.select_normal();
                let second = self.double_behavior(depth + 1);
                BrickStrategy::Double(Box::new(first), Box::new(second))
            }
            _ => BrickStrategy::Basic,
        }
    }

    /// Second half of a composite: draw any kind, compose again only while
    /// under the nesting bound, and settle on a simple pick once the bound
    /// is reached.
    fn double_behavior(&mut self, depth: u32) -> BrickStrategy {
        let index = self.rng.random_range(KIND_BASIC..=KIND_DOUBLE);

        if index != KIND_DOUBLE {
            return self.build(index, depth + 1);
        }

        if depth < MAX_DOUBLE_NESTING {
            return self.build(KIND_DOUBLE, depth + 1);
        }

        self.select_normal()
    }

    /// A guaranteed-simple pick: one of the four special leaf kinds, never
    /// basic and never a composite. The first child of every composite
    /// comes from here, which keeps strategy trees to a single spine of
    /// nested composites.
    fn select_normal(&mut self) -> BrickStrategy {
        let index = self.rng.random_range(KIND_SPAWN_PUCKS..=KIND_EXTRA_LIFE);
        self.build(index, 0)
    }
}
