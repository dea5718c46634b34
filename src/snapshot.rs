use crate::config::GridSize;
use crate::snake::Position;

/// What a single grid cell shows, derived from a [`Snapshot`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Head,
    Tail,
    Food,
}

/// Immutable view of the game as of the last completed step.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub bounds: GridSize,
    pub head: Position,
    /// Tail segments, nearest to the head first.
    pub tail: Vec<Position>,
    pub food: Position,
    pub score: u32,
}

impl Snapshot {
    /// Classifies one cell. Head wins over tail, tail over food.
    #[must_use]
    pub fn cell_at(&self, position: Position) -> Cell {
        if position == self.head {
            Cell::Head
        } else if self.tail.contains(&position) {
            Cell::Tail
        } else if position == self.food {
            Cell::Food
        } else {
            Cell::Empty
        }
    }

    /// Iterates every cell row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let width = i32::from(self.bounds.width);
        let height = i32::from(self.bounds.height);

        (0..height).flat_map(move |y| {
            (0..width).map(move |x| {
                let position = Position { x, y };
                (position, self.cell_at(position))
            })
        })
    }
}
