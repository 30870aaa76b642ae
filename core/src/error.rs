use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size {0:?} does not fit the screen grid (max {1:?})")]
    InvalidBoardSize(Coord2, Coord2),
    #[error("Too many mines: {requested} requested but at most {max} fit around a safe start")]
    TooManyMines { requested: CellCount, max: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
