use std::ops::Range;

use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Draws taken before accepting a cell that overlaps the snake.
pub const MAX_SPAWN_ATTEMPTS: usize = 32;

/// Food entity currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food inside `band`, avoiding the snake when it can.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, band: SpawnBand, snake: &Snake) -> Self {
        Self::new(spawn_position(rng, band, snake))
    }
}

/// Interior sub-rectangle of the grid that food may spawn in.
///
/// Both ranges are half-open and non-empty.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SpawnBand {
    pub x: Range<i32>,
    pub y: Range<i32>,
}

impl SpawnBand {
    /// Builds the band left after removing `margin` cells from every border.
    ///
    /// Falls back to the whole grid when the margin would leave nothing.
    #[must_use]
    pub fn inset(bounds: GridSize, margin: u16) -> Self {
        Self {
            x: inset_axis(bounds.width, margin),
            y: inset_axis(bounds.height, margin),
        }
    }

    /// Returns true when `position` lies strictly inside the band.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.x.contains(&position.x) && self.y.contains(&position.y)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position {
            x: rng.gen_range(self.x.clone()),
            y: rng.gen_range(self.y.clone()),
        }
    }
}

fn inset_axis(dimension: u16, margin: u16) -> Range<i32> {
    let dimension = i32::from(dimension);
    let margin = i32::from(margin);
    if dimension > margin * 2 {
        margin..dimension - margin
    } else {
        0..dimension.max(1)
    }
}

/// Draws a uniformly random cell from `band`, preferring cells off the snake.
///
/// After [`MAX_SPAWN_ATTEMPTS`] occupied draws the last draw is kept, so a
/// crowded band can still place food on the body.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, band: SpawnBand, snake: &Snake) -> Position {
    let mut candidate = band.sample(rng);
    for _ in 1..MAX_SPAWN_ATTEMPTS {
        if !snake.occupies(candidate) {
            break;
        }
        candidate = band.sample(rng);
    }
    candidate
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::{GridSize, FOOD_SPAWN_MARGIN};
    use crate::input::Direction;

    use super::{spawn_position, SpawnBand};
    use crate::snake::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    #[test]
    fn band_excludes_border_margin() {
        let band = SpawnBand::inset(BOUNDS, FOOD_SPAWN_MARGIN);

        assert_eq!(band.x, 2..18);
        assert_eq!(band.y, 2..18);
        assert!(!band.contains(Position { x: 1, y: 10 }));
        assert!(!band.contains(Position { x: 10, y: 18 }));
        assert!(band.contains(Position { x: 2, y: 17 }));
    }

    #[test]
    fn oversized_margin_falls_back_to_whole_grid() {
        let band = SpawnBand::inset(
            GridSize {
                width: 3,
                height: 8,
            },
            2,
        );

        assert_eq!(band.x, 0..3);
        assert_eq!(band.y, 2..6);
    }

    #[test]
    fn spawned_food_stays_inside_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::new(Position { x: 10, y: 10 }, Direction::Right);
        let band = SpawnBand::inset(BOUNDS, FOOD_SPAWN_MARGIN);

        for _ in 0..500 {
            let position = spawn_position(&mut rng, band.clone(), &snake);
            assert!(band.contains(position), "{position:?} escaped the band");
        }
    }

    #[test]
    fn spawn_avoids_snake_when_free_cells_exist() {
        let mut rng = StdRng::seed_from_u64(11);
        // 3x3 band with the snake covering all but one cell.
        let bounds = GridSize {
            width: 7,
            height: 7,
        };
        let band = SpawnBand::inset(bounds, 2);
        let snake = Snake::from_parts(
            Position { x: 2, y: 2 },
            vec![
                Position { x: 3, y: 2 },
                Position { x: 4, y: 2 },
                Position { x: 4, y: 3 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 2, y: 4 },
                Position { x: 3, y: 4 },
            ],
            Direction::Up,
        );

        let mut free_hits = 0;
        for _ in 0..50 {
            if spawn_position(&mut rng, band.clone(), &snake) == (Position { x: 4, y: 4 }) {
                free_hits += 1;
            }
        }

        // 32 draws at 1/9 each miss the free cell with probability < 3%.
        assert!(free_hits > 40, "free cell chosen only {free_hits} times");
    }
}
