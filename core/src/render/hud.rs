use super::*;
use crate::{HUD_HEIGHT, SCREEN_WIDTH};

/// The strip above the board: flags left and seconds elapsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Hud {
    theme: Theme,
    flags_left: NumberDisplayer,
    time_taken: NumberDisplayer,
}

impl Hud {
    const FLAG_SPRITE_POS: (i32, i32) = (107, 2);
    const FLAG_NUM_POS: (i32, i32) = (130, 8);
    const CLOCK_SPRITE_POS: (i32, i32) = (168, 1);
    const CLOCK_NUM_POS: (i32, i32) = (193, 8);
    const NUM_SPACING: i32 = 9;

    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            flags_left: Self::flags_displayer(&theme),
            time_taken: Self::time_displayer(&theme),
        }
    }

    fn flags_displayer(theme: &Theme) -> NumberDisplayer {
        NumberDisplayer::new(
            Self::FLAG_NUM_POS,
            theme.hud_numbers,
            theme.hud_bg,
            1,
            Self::NUM_SPACING,
            2,
        )
    }

    fn time_displayer(theme: &Theme) -> NumberDisplayer {
        NumberDisplayer::new(
            Self::CLOCK_NUM_POS,
            theme.hud_numbers,
            theme.hud_bg,
            1,
            Self::NUM_SPACING,
            3,
        )
    }

    /// Paints the background and icons, then shows zero on both counters.
    pub fn reset<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.fill_rect(0, 0, SCREEN_WIDTH, HUD_HEIGHT, self.theme.hud_bg);
        draw_sprite(surface, Self::FLAG_SPRITE_POS, &sprites::FLAG, self.theme.hud_flag, 1);
        draw_sprite(surface, Self::CLOCK_SPRITE_POS, &sprites::CLOCK, self.theme.hud_clock, 1);

        self.flags_left = Self::flags_displayer(&self.theme);
        self.time_taken = Self::time_displayer(&self.theme);
        self.update_flags_left(surface, 0);
        self.update_time_taken(surface, 0);
    }

    pub fn update_flags_left<S: Surface + ?Sized>(&mut self, surface: &mut S, flags_left: u16) {
        self.flags_left.update(surface, flags_left.into());
    }

    pub fn update_time_taken<S: Surface + ?Sized>(&mut self, surface: &mut S, seconds: u32) {
        self.time_taken.update(surface, seconds.into());
    }

    pub fn flags_left(&self) -> &NumberDisplayer {
        &self.flags_left
    }

    pub fn time_taken(&self) -> &NumberDisplayer {
        &self.time_taken
    }
}
