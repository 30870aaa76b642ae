use super::*;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Full-screen menu: title, three items, an arrow beside the selected one
/// and the best score underneath.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuDisplay {
    theme: Theme,
    selector_pos: Option<usize>,
    best_score: NumberDisplayer,
}

impl MenuDisplay {
    const TITLE_POS: (i32, i32) = (35, 17);
    const ITEMS: [((i32, i32), &'static Sprite); 3] = [
        ((134, 76), &sprites::PLAY),
        ((90, 111), &sprites::RESET_SCORE),
        ((137, 145), &sprites::QUIT),
    ];
    const ARROWS: [(i32, i32); 3] = [(55, 78), (55, 113), (55, 148)];
    /// Square wiped when the arrow leaves a row.
    const ARROW_BOX: u32 = 17;

    const BEST_SCORE_POS: (i32, i32) = (136, 192);
    const NUM_SPACING: i32 = 18;

    pub const ITEM_COUNT: usize = Self::ITEMS.len();

    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            selector_pos: None,
            best_score: Self::score_displayer(&theme),
        }
    }

    fn score_displayer(theme: &Theme) -> NumberDisplayer {
        NumberDisplayer::new(
            Self::BEST_SCORE_POS,
            theme.menu_numbers,
            theme.menu_bg,
            3,
            Self::NUM_SPACING,
            3,
        )
    }

    pub fn selector_pos(&self) -> Option<usize> {
        self.selector_pos
    }

    pub fn best_score(&self) -> &NumberDisplayer {
        &self.best_score
    }

    /// Repaints the whole screen and points the arrow at the first item.
    /// The best score area is left blank.
    pub fn reset<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let theme = self.theme;
        surface.fill_rect(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT, theme.menu_bg);

        draw_sprite(surface, Self::TITLE_POS, &sprites::TITLE, theme.menu_text, 5);
        for (pos, sprite) in Self::ITEMS {
            draw_sprite(surface, pos, sprite, theme.menu_text, 3);
        }

        self.selector_pos = None;
        self.update_selector_pos(surface, 0);
        self.best_score = Self::score_displayer(&theme);
    }

    /// Moves the arrow; nothing is drawn when `pos` is already selected.
    pub fn update_selector_pos<S: Surface + ?Sized>(&mut self, surface: &mut S, pos: usize) {
        if self.selector_pos == Some(pos) {
            return;
        }
        let Some(&arrow) = Self::ARROWS.get(pos) else {
            log::warn!("Menu has no item {pos}");
            return;
        };

        if let Some(old) = self.selector_pos.and_then(|old| Self::ARROWS.get(old)) {
            surface.fill_rect(old.0, old.1, Self::ARROW_BOX, Self::ARROW_BOX, self.theme.menu_bg);
        }

        draw_sprite(surface, arrow, &sprites::ARROW, self.theme.menu_arrow, 2);
        self.selector_pos = Some(pos);
    }

    pub fn update_best_score<S: Surface + ?Sized>(&mut self, surface: &mut S, seconds: u32) {
        self.best_score.update(surface, seconds.into());
    }

    pub fn clear_best_score<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.best_score.clear(surface);
    }
}
