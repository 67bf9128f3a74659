use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{
    GridSize, INITIAL_SNAKE_LEN, INITIAL_TICK_INTERVAL, MIN_TICK_INTERVAL, TICK_INTERVAL_DECREMENT,
};
use crate::food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Outcome of one simulation tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake moved one cell without eating.
    Moved,
    /// The snake ate the food and grew by one segment.
    Ate,
    /// The move hit a wall or the snake itself; the game is over.
    Died,
}

/// Read-only view of the state handed to presentation collaborators.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub food: Position,
    pub score: u32,
    pub bounds: GridSize,
    pub tick_interval: Duration,
    pub alive: bool,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    bounds: GridSize,
    tick_interval: Duration,
    alive: bool,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh state with entropy-seeded food placement.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let snake = initial_snake(bounds);
        let food = food::spawn_position(&mut rng, bounds, &snake);

        Self {
            snake,
            food,
            score: 0,
            bounds,
            tick_interval: INITIAL_TICK_INTERVAL,
            alive: true,
            rng,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// The pending direction is committed first, then the move is checked for
    /// collisions before any mutation: a fatal tick leaves snake, food, and
    /// score exactly as they were. Out-of-bounds is checked before
    /// self-overlap, and a dead state reports `Died` without doing anything.
    pub fn advance(&mut self) -> TickOutcome {
        if !self.alive {
            return TickOutcome::Died;
        }

        self.snake.commit_direction();
        let next_head = self.snake.next_head();

        if !next_head.is_within_bounds(self.bounds) || self.snake.occupies(next_head) {
            self.alive = false;
            return TickOutcome::Died;
        }

        if next_head == self.food {
            self.snake.step_to(next_head, true);
            self.score += 1;
            self.shorten_tick_interval();
            self.food = food::spawn_position(&mut self.rng, self.bounds, &self.snake);
            return TickOutcome::Ate;
        }

        self.snake.step_to(next_head, false);
        TickOutcome::Moved
    }

    /// Queues a direction change for the next tick.
    ///
    /// Reversals of the committed direction are ignored, as is any input once
    /// the game is over.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.alive {
            self.snake.steer(requested);
        }
    }

    /// Restores the exact initial configuration and spawns fresh food.
    ///
    /// The RNG stream carries over, so a seeded session stays reproducible
    /// across restarts.
    pub fn reset(&mut self) {
        self.snake = initial_snake(self.bounds);
        self.score = 0;
        self.tick_interval = INITIAL_TICK_INTERVAL;
        self.alive = true;
        self.food = food::spawn_position(&mut self.rng, self.bounds, &self.snake);
    }

    /// Returns the read-only snapshot renderers draw from.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            food: self.food,
            score: self.score,
            bounds: self.bounds,
            tick_interval: self.tick_interval,
            alive: self.alive,
        }
    }

    /// Returns the grid bounds.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the current tick interval.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Returns false once a fatal tick has occurred.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    fn shorten_tick_interval(&mut self) {
        self.tick_interval = self
            .tick_interval
            .saturating_sub(TICK_INTERVAL_DECREMENT)
            .max(MIN_TICK_INTERVAL);
    }
}

/// Builds the starting snake: three segments centered on the grid, head at
/// the midpoint, body extending left, facing right.
#[must_use]
fn initial_snake(bounds: GridSize) -> Snake {
    let head = Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    };
    let segments = (0..INITIAL_SNAKE_LEN as i32)
        .map(|offset| Position {
            x: head.x - offset,
            y: head.y,
        })
        .collect();

    Snake::from_segments(segments, Direction::Right)
}
