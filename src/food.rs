use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random draws attempted before falling back to an exhaustive scan.
///
/// On the grids this game runs (snake small relative to the board) the first
/// draw almost always lands; the bound only matters when the board is nearly
/// full, where unbounded rejection sampling could stall.
const MAX_SAMPLE_ATTEMPTS: u32 = 128;

/// Picks a uniformly random free cell for the next food.
///
/// Rejection-samples the grid until a cell misses every snake segment, then
/// falls back to choosing among the explicitly enumerated free cells, so the
/// call terminates regardless of how full the board is.
///
/// # Panics
///
/// Panics when the snake covers the entire grid; callers keep the grid large
/// relative to the snake.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Position {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return candidate;
        }
    }

    let candidates = free_cells(bounds, snake);
    assert!(
        !candidates.is_empty(),
        "spawn_position: no free cells on the board ({}×{})",
        bounds.width,
        bounds.height,
    );

    candidates[rng.gen_range(0..candidates.len())]
}

/// Enumerates every cell not occupied by the snake, row by row.
#[must_use]
pub fn free_cells(bounds: GridSize, snake: &Snake) -> Vec<Position> {
    let mut cells = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                cells.push(position);
            }
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{free_cells, spawn_position};

    #[test]
    fn spawned_food_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Right,
        );
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let food = spawn_position(&mut rng, bounds, &snake);
            assert!(!snake.occupies(food));
            assert!(food.is_within_bounds(bounds));
        }
    }

    #[test]
    fn nearly_full_grid_yields_the_single_free_cell() {
        // 2×2 board with three cells taken; only (1, 1) remains.
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 0, y: 1 },
            ],
            Direction::Down,
        );
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        for _ in 0..20 {
            assert_eq!(
                spawn_position(&mut rng, bounds, &snake),
                Position { x: 1, y: 1 }
            );
        }
    }

    #[test]
    fn free_cells_excludes_exactly_the_snake() {
        let snake = Snake::from_segments(
            vec![Position { x: 1, y: 0 }, Position { x: 0, y: 0 }],
            Direction::Right,
        );
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        let cells = free_cells(bounds, &snake);

        assert_eq!(
            cells,
            vec![Position { x: 0, y: 1 }, Position { x: 1, y: 1 }]
        );
    }
}
