use serde::{Deserialize, Serialize};

/// One cell of the minefield.
///
/// Every tile starts with `needs_redraw` set so the first paint covers the
/// whole board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub(crate) is_mined: bool,
    pub(crate) neighboring_mine_count: u8,
    pub(crate) is_uncovered: bool,
    pub(crate) is_flagged: bool,
    pub(crate) needs_redraw: bool,
}

impl Tile {
    pub const fn is_mined(&self) -> bool {
        self.is_mined
    }

    pub const fn neighboring_mine_count(&self) -> u8 {
        self.neighboring_mine_count
    }

    pub const fn is_uncovered(&self) -> bool {
        self.is_uncovered
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    // whether the tile is visually closed
    pub const fn is_covered(&self) -> bool {
        !self.is_uncovered
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            is_mined: false,
            neighboring_mine_count: 0,
            is_uncovered: false,
            is_flagged: false,
            needs_redraw: true,
        }
    }
}
