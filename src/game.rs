use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, FOOD_SPAWN_MARGIN};
use crate::food::{Food, SpawnBand};
use crate::input::Direction;
use crate::snake::{Position, Snake};
use crate::snapshot::Snapshot;

/// Outcome of advancing the simulation by one tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StepResult {
    Continuing(Snapshot),
    GameOver { final_score: u32 },
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    over: bool,
    bounds: GridSize,
    band: SpawnBand,
    rng: StdRng,
}

impl GameState {
    /// Creates a game with entropy-seeded food placement.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let start = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let snake = Snake::new(start, Direction::Right);
        let band = SpawnBand::inset(bounds, FOOD_SPAWN_MARGIN);
        let food = Food::spawn(&mut rng, band.clone(), &snake);

        Self {
            snake,
            food,
            score: 0,
            over: false,
            bounds,
            band,
            rng,
        }
    }

    /// Advances the simulation by exactly one tick.
    ///
    /// `requested` of `None` keeps the current heading; a reversal is ignored.
    /// Once a step has returned `GameOver` the state is frozen and every later
    /// call returns the same result.
    pub fn step(&mut self, requested: Option<Direction>) -> StepResult {
        if self.over {
            return self.game_over();
        }

        if let Some(direction) = requested {
            self.snake.steer(direction);
        }

        let next_head = self.snake.next_head_position(self.bounds);
        if self.snake.tail_occupies(next_head) {
            self.over = true;
            return self.game_over();
        }

        let ate = next_head == self.food.position;
        self.snake.advance(next_head, ate);

        if ate {
            self.score += 1;
            self.food = Food::spawn(&mut self.rng, self.band.clone(), &self.snake);
        }

        StepResult::Continuing(self.snapshot())
    }

    /// Returns a consistent copy of the state after the last completed step.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bounds: self.bounds,
            head: self.snake.head(),
            tail: self.snake.tail().to_vec(),
            food: self.food.position,
            score: self.score,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the band food is placed in.
    #[must_use]
    pub fn spawn_band(&self) -> &SpawnBand {
        &self.band
    }

    #[must_use]
    pub fn heading(&self) -> Direction {
        self.snake.heading()
    }

    fn game_over(&self) -> StepResult {
        StepResult::GameOver {
            final_score: self.score,
        }
    }
}
