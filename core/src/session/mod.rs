//! The two screens of the program and what they share.

use serde::{Deserialize, Serialize};

pub use game::*;
pub use menu::*;

mod game;
mod menu;

/// Which session the program loop runs next.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramState {
    Menu,
    Game,
    Quit,
}

/// State that outlives a single round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Fastest win in whole seconds, `None` until the first win.
    pub best_score: Option<u32>,
}

impl SessionContext {
    /// Keeps `seconds` if it beats the current best. Returns whether it did.
    pub fn record_win(&mut self, seconds: u32) -> bool {
        let improved = self.best_score.is_none_or(|best| seconds < best);
        if improved {
            self.best_score = Some(seconds);
        }
        improved
    }
}
