use serde::{Deserialize, Serialize};

/// Configuration for the game
///
/// Positions are measured in pixels; the board is `width` x `height` pixels
/// divided into `cell_size` squares.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in pixels
    pub width: i32,
    /// Board height in pixels
    pub height: i32,
    /// Side length of one grid cell in pixels
    pub cell_size: i32,
    /// Points awarded per food eaten
    pub food_points: u32,
    /// Game ticks per second
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            cell_size: 20,
            food_points: 10,
            tick_rate: 10,
        }
    }
}

impl GameConfig {
    /// Number of grid columns
    pub fn cols(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of grid rows
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self {
            width: 100,
            height: 100,
            ..Default::default()
        }
    }
}
