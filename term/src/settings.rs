use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pocketsweeper_core::{CellCount, Coord, Settings};

/// Command line values that take precedence over the config file.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub width: Option<Coord>,
    pub height: Option<Coord>,
    pub mines: Option<CellCount>,
    pub seed: Option<u64>,
}

impl Overrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(width) = self.width {
            settings.game.width = width;
        }
        if let Some(height) = self.height {
            settings.game.height = height;
        }
        if let Some(mines) = self.mines {
            settings.game.mines = mines;
        }
        if let Some(seed) = self.seed {
            settings.session.seed = Some(seed);
        }
    }
}

pub fn parse(text: &str) -> Result<Settings> {
    Ok(toml::from_str(text)?)
}

/// Reads a TOML settings file, or returns the defaults when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read config file {}", path.display()))?;
    let settings =
        parse(&text).with_context(|| format!("invalid config file {}", path.display()))?;
    log::debug!("loaded {settings:?} from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_use_defaults() {
        let settings = parse("[game]\nmines = 40\n").unwrap();

        assert_eq!(settings.game.mines, 40);
        assert_eq!(settings.game.width, 16);
        assert_eq!(settings.input.initial_delay_ms, 250);
        assert_eq!(settings.session.seed, None);
    }

    #[test]
    fn full_file_round_trips_session_values() {
        let text = r#"
            [game]
            width = 9
            height = 9
            mines = 10

            [input]
            initial_delay_ms = 300
            repeat_delay_ms = 40

            [session]
            end_pause_ms = 0
            tick_interval_ms = 16
            seed = 1234
        "#;

        let settings = parse(text).unwrap();

        assert_eq!((settings.game.width, settings.game.height), (9, 9));
        assert_eq!(settings.input.repeat_delay_ms, 40);
        assert_eq!(settings.session.tick_interval_ms, 16);
        assert_eq!(settings.session.seed, Some(1234));
        assert!(settings.game_config().is_ok());
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(parse("[game]\nwidth = \"wide\"\n").is_err());
        assert!(parse("[game]\nwidth = 300\n").is_err());
    }

    #[test]
    fn overrides_win_over_file() {
        let mut settings = parse("[game]\nwidth = 9\nmines = 10\n").unwrap();
        let overrides = Overrides {
            mines: Some(12),
            seed: Some(5),
            ..Overrides::default()
        };

        overrides.apply(&mut settings);

        assert_eq!(settings.game.width, 9);
        assert_eq!(settings.game.mines, 12);
        assert_eq!(settings.session.seed, Some(5));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(load(None).unwrap(), Settings::default());
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let err = load(Some(Path::new("/nonexistent/pocketsweeper.toml"))).unwrap_err();

        assert!(format!("{err:#}").contains("/nonexistent/pocketsweeper.toml"));
    }
}
