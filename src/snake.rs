use crate::config::GridSize;
use crate::input::{direction_change_is_valid, Direction};

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

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighbouring cell along `direction`, wrapped toroidally.
    #[must_use]
    pub fn stepped(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = match direction {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        };

        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
        .wrapped(bounds)
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}

/// Snake head, its ordered tail chain and current heading.
///
/// `tail[0]` is the segment nearest the head.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    head: Position,
    tail: Vec<Position>,
    heading: Direction,
}

impl Snake {
    /// Creates a tail-less snake at `start`.
    #[must_use]
    pub fn new(start: Position, heading: Direction) -> Self {
        Self {
            head: start,
            tail: Vec::new(),
            heading,
        }
    }

    /// Creates a snake from an explicit head and tail chain.
    #[must_use]
    pub fn from_parts(head: Position, tail: Vec<Position>, heading: Direction) -> Self {
        Self {
            head,
            tail,
            heading,
        }
    }

    /// Replaces the heading unless `requested` reverses it.
    ///
    /// Returns whether the heading was accepted.
    pub fn steer(&mut self, requested: Direction) -> bool {
        if !direction_change_is_valid(self.heading, requested) {
            return false;
        }
        self.heading = requested;
        true
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self, bounds: GridSize) -> Position {
        self.head.stepped(self.heading, bounds)
    }

    /// Returns true if any tail segment occupies `position`.
    #[must_use]
    pub fn tail_occupies(&self, position: Position) -> bool {
        self.tail.contains(&position)
    }

    /// Returns true if the head or any tail segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.head == position || self.tail_occupies(position)
    }

    /// Moves the head to `next_head`, dragging the tail one tick behind.
    ///
    /// With `grow` set, one segment is appended in the slot the chain just
    /// vacated, so the snake is one longer after this call.
    pub fn advance(&mut self, next_head: Position, grow: bool) {
        let vacated = self.tail.last().copied().unwrap_or(self.head);

        for i in (1..self.tail.len()).rev() {
            self.tail[i] = self.tail[i - 1];
        }
        if let Some(first) = self.tail.first_mut() {
            *first = self.head;
        }

        self.head = next_head;

        if grow {
            self.tail.push(vacated);
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    /// Returns tail segments from nearest to farthest.
    #[must_use]
    pub fn tail(&self) -> &[Position] {
        &self.tail
    }

    /// Returns current segment count, head included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// A snake always has a head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }
}
