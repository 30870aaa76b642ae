use serde::{Deserialize, Serialize};

pub use board::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod config;
mod error;
mod generator;
mod tile;
mod types;

pub mod input;
pub mod platform;
pub mod program;
pub mod render;
pub mod selector;
pub mod session;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: u32 = 320;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 222;
/// Height of the HUD strip above the board.
pub const HUD_HEIGHT: u32 = 22;
/// Edge length of one board tile in pixels.
pub const TILE_SIZE: u32 = 20;
/// Largest board that fits under the HUD.
pub const GRID_SIZE: Coord2 = (16, 10);
/// Default mine count for the full-size board.
pub const MINE_AMOUNT: CellCount = 25;

/// Tiles kept mine-free around the first uncover: the clicked tile and its
/// eight neighbors.
pub const SAFE_ZONE_TILES: CellCount = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates the board against the screen grid and checks that mine
    /// placement can always terminate.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let (size_x, size_y) = size;
        if size_x == 0 || size_y == 0 || size_x > GRID_SIZE.0 || size_y > GRID_SIZE.1 {
            return Err(GameError::InvalidBoardSize(size, GRID_SIZE));
        }

        let max = Self::max_mines(size);
        if mines > max {
            return Err(GameError::TooManyMines {
                requested: mines,
                max,
            });
        }

        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn max_mines(size: Coord2) -> CellCount {
        mult(size.0, size.1).saturating_sub(SAFE_ZONE_TILES)
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_tiles(&self) -> CellCount {
        self.total_tiles() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(GRID_SIZE, MINE_AMOUNT)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();

        assert_eq!(GameConfig::new(config.size, config.mines), Ok(config));
        assert_eq!(config.safe_tiles(), 135);
    }

    #[test]
    fn rejects_boards_larger_than_screen() {
        assert_eq!(
            GameConfig::new((17, 10), 10),
            Err(GameError::InvalidBoardSize((17, 10), GRID_SIZE))
        );
        assert!(GameConfig::new((0, 4), 0).is_err());
    }

    #[test]
    fn rejects_mines_that_cannot_fit_around_safe_start() {
        assert_eq!(
            GameConfig::new((4, 4), 8),
            Err(GameError::TooManyMines {
                requested: 8,
                max: 7
            })
        );
        assert!(GameConfig::new((4, 4), 7).is_ok());
    }
}
