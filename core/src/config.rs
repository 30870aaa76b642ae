use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a host can tune, grouped the way it appears in a config file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: BoardSettings,
    pub input: InputSettings,
    pub session: SessionSettings,
}

impl Settings {
    pub fn game_config(&self) -> Result<GameConfig> {
        GameConfig::new((self.game.width, self.game.height), self.game.mines)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: GRID_SIZE.0,
            height: GRID_SIZE.1,
            mines: MINE_AMOUNT,
        }
    }
}

/// Auto-repeat timing for the directional keys.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub initial_delay_ms: u64,
    pub repeat_delay_ms: u64,
}

impl InputSettings {
    pub const fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub const fn repeat_delay(&self) -> Duration {
        Duration::from_millis(self.repeat_delay_ms)
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            initial_delay_ms: 250,
            repeat_delay_ms: 50,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Pause after a win or loss before returning to the menu.
    pub end_pause_ms: u64,
    /// Sleep between ticks; zero polls as fast as possible.
    pub tick_interval_ms: u64,
    /// Seed for mine placement, random when absent.
    pub seed: Option<u64>,
}

impl SessionSettings {
    pub const fn end_pause(&self) -> Duration {
        Duration::from_millis(self.end_pause_ms)
    }

    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            end_pause_ms: 1000,
            tick_interval_ms: 10,
            seed: None,
        }
    }
}
