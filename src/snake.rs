use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring position one cell toward `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Snake body and direction state.
///
/// Two direction fields exist on purpose: `direction` is what the snake
/// actually moved in last tick (committed), `pending_direction` is the most
/// recent legal steering request. The pending value is consumed exactly once
/// per tick, at tick start, so no number of inputs inside one tick can turn
/// the head back into the neck.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Requests a direction change for the next tick.
    ///
    /// Requests that reverse the committed direction are ignored; within one
    /// tick the last legal request wins.
    pub fn steer(&mut self, requested: Direction) {
        if requested == self.direction.opposite() {
            return;
        }
        self.pending_direction = requested;
    }

    /// Promotes the pending direction and returns it. Called once at the
    /// start of each tick.
    pub fn commit_direction(&mut self) -> Direction {
        self.direction = self.pending_direction;
        self.direction
    }

    /// Returns the cell the head would enter on the next tick, given the
    /// committed direction.
    #[must_use]
    pub fn next_head(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Moves the head to `head`, keeping the tail when `grow` is set.
    pub fn step_to(&mut self, head: Position, grow: bool) {
        self.body.push_front(head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    fn three_segment_snake() -> Snake {
        Snake::from_segments(
            vec![
                Position { x: 5, y: 5 },
                Position { x: 4, y: 5 },
                Position { x: 3, y: 5 },
            ],
            Direction::Right,
        )
    }

    #[test]
    fn position_bounds_check() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 9, y: 7 }.is_within_bounds(bounds));
        assert!(!Position { x: -1, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: 4, y: 8 }.is_within_bounds(bounds));
    }

    #[test]
    fn step_moves_one_cell_per_axis() {
        let origin = Position { x: 5, y: 5 };

        assert_eq!(origin.step(Direction::Up), Position { x: 5, y: 4 });
        assert_eq!(origin.step(Direction::Down), Position { x: 5, y: 6 });
        assert_eq!(origin.step(Direction::Left), Position { x: 4, y: 5 });
        assert_eq!(origin.step(Direction::Right), Position { x: 6, y: 5 });
    }

    #[test]
    fn step_to_without_growth_keeps_length() {
        let mut snake = three_segment_snake();
        let next = snake.next_head();

        snake.step_to(next, false);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position { x: 3, y: 5 }));
    }

    #[test]
    fn step_to_with_growth_keeps_tail() {
        let mut snake = three_segment_snake();
        let next = snake.next_head();

        snake.step_to(next, true);

        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Position { x: 3, y: 5 }));
    }

    #[test]
    fn steer_rejects_reversal_of_committed_direction() {
        let mut snake = three_segment_snake();

        snake.steer(Direction::Left);
        assert_eq!(snake.commit_direction(), Direction::Right);
    }

    #[test]
    fn two_requests_in_one_tick_cannot_reverse() {
        // Moving right; Up then Down inside one tick must end Down (legal),
        // never Left, and the snake must not reverse through itself.
        let mut snake = three_segment_snake();

        snake.steer(Direction::Up);
        snake.steer(Direction::Left);

        // Left reverses the committed Right and is dropped; Up survives.
        assert_eq!(snake.commit_direction(), Direction::Up);
        assert_eq!(snake.next_head(), Position { x: 5, y: 4 });
    }

    #[test]
    fn last_legal_request_wins_within_a_tick() {
        let mut snake = three_segment_snake();

        snake.steer(Direction::Up);
        snake.steer(Direction::Down);

        assert_eq!(snake.commit_direction(), Direction::Down);
    }
}
