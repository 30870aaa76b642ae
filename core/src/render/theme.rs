use crate::platform::Rgb;

/// Colors for the board, HUD and menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub covered: [Rgb; 2],
    pub uncovered: [Rgb; 2],
    pub uncovered_border: Rgb,
    /// Number glyphs for counts 1, 2, 3 and 4 and up.
    pub numbers: [Rgb; 4],
    pub flag: Rgb,
    pub mine: Rgb,
    pub selection_border: Rgb,

    pub hud_bg: Rgb,
    pub hud_flag: Rgb,
    pub hud_clock: Rgb,
    pub hud_numbers: Rgb,

    pub menu_bg: Rgb,
    pub menu_text: Rgb,
    pub menu_numbers: Rgb,
    pub menu_arrow: Rgb,
}

impl Theme {
    pub const DEFAULT: Self = Self {
        covered: [Rgb(255, 157, 62), Rgb(245, 181, 84)],
        uncovered: [Rgb(44, 201, 78), Rgb(141, 227, 93)],
        uncovered_border: Rgb(250, 103, 53),
        numbers: [
            Rgb(76, 137, 238),
            Rgb(11, 157, 95),
            Rgb(232, 35, 55),
            Rgb(105, 29, 140),
        ],
        flag: Rgb(232, 35, 55),
        mine: Rgb(232, 35, 55),
        selection_border: Rgb(255, 245, 122),

        hud_bg: Rgb(35, 124, 128),
        hud_flag: Rgb(232, 35, 55),
        hud_clock: Rgb(105, 29, 140),
        hud_numbers: Rgb(4, 5, 25),

        menu_bg: Rgb(245, 181, 84),
        menu_text: Rgb(75, 8, 67),
        menu_numbers: Rgb(75, 8, 67),
        menu_arrow: Rgb(75, 8, 67),
    };

    /// Checkerboard background: the darker shade where `x + y` is even.
    pub const fn tile_bg(&self, (x, y): (u8, u8), uncovered: bool) -> Rgb {
        let shade = (x as usize + y as usize) % 2;
        if uncovered {
            self.uncovered[shade]
        } else {
            self.covered[shade]
        }
    }

    pub const fn number(&self, count: u8) -> Rgb {
        match count {
            0 | 1 => self.numbers[0],
            2 => self.numbers[1],
            3 => self.numbers[2],
            _ => self.numbers[3],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
