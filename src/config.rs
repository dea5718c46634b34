use ratatui::style::Color;
use thiserror::Error;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Solid block colors for the three drawable entities.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_tail: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub status_fg: Color,
}

/// Green snake on dark blue, red food.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::Rgb(0, 255, 77),
    snake_tail: Color::Rgb(0, 255, 153),
    food: Color::Rgb(255, 0, 0),
    play_bg: Color::Rgb(0, 0, 102),
    border_fg: Color::White,
    status_fg: Color::White,
};

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Terminal columns used for one grid cell so cells render roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Base tick interval in milliseconds.
pub const BASE_TICK_INTERVAL_MS: u64 = 150;

/// Interval reduction applied per reached score multiple.
pub const TICK_INTERVAL_STEP_MS: u64 = 5;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 90;

/// Score multiple that triggers a speed-up.
pub const POINTS_PER_SPEED_UP: u32 = 5;

/// Cells kept free of food along each border.
pub const FOOD_SPAWN_MARGIN: u16 = 2;

/// Invalid launch settings.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: u16, height: u16 },
    #[error("grid {width}x{height} leaves no room for food inside a {margin}-cell margin")]
    SpawnBandEmpty { width: u16, height: u16, margin: u16 },
}

/// Launch settings for one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Settings {
    pub bounds: GridSize,
    pub seed: Option<u64>,
}

impl Settings {
    /// Checks that the grid can host a snake and a food spawn band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GridSize { width, height } = self.bounds;
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }

        let margin = FOOD_SPAWN_MARGIN;
        if width <= margin * 2 || height <= margin * 2 {
            return Err(ConfigError::SpawnBandEmpty {
                width,
                height,
                margin,
            });
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounds: GridSize::default(),
            seed: None,
        }
    }
}
