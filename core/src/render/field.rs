use bitflags::bitflags;

use super::*;
use crate::{Board, Coord2, MinePicker};

bitflags! {
    /// Sides of an uncovered tile that touch a covered neighbor.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Borders: u8 {
        const TOP    = 1;
        const BOTTOM = 1 << 1;
        const LEFT   = 1 << 2;
        const RIGHT  = 1 << 3;
    }
}

/// Paints board tiles on a grid of `tile_size` squares starting at `offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardDisplay {
    offset: (i32, i32),
    tile_size: u32,
    theme: Theme,
}

impl BoardDisplay {
    pub const BORDER_WEIGHT: u32 = 2;
    const NUMBER_OFFSET: (i32, i32) = (7, 6);

    pub fn new(offset: (i32, i32), tile_size: u32, theme: Theme) -> Self {
        Self {
            offset,
            tile_size,
            theme,
        }
    }

    /// Top-left screen pixel of a tile.
    pub fn screen_pos(&self, (x, y): Coord2) -> (i32, i32) {
        (
            self.offset.0 + i32::from(x) * self.tile_size as i32,
            self.offset.1 + i32::from(y) * self.tile_size as i32,
        )
    }

    /// Orthogonal neighbors that exist and are still covered.
    pub fn tile_borders<P: MinePicker>(board: &Board<P>, coords: Coord2) -> Borders {
        let covered = |delta| {
            board
                .tile_at_offset(coords, delta)
                .is_some_and(|tile| tile.is_covered())
        };

        let mut borders = Borders::empty();
        borders.set(Borders::TOP, covered((0, -1)));
        borders.set(Borders::BOTTOM, covered((0, 1)));
        borders.set(Borders::LEFT, covered((-1, 0)));
        borders.set(Borders::RIGHT, covered((1, 0)));
        borders
    }

    /// Repaints every tile flagged for redraw, plus all of its neighbors so
    /// their border strokes follow the new covered/uncovered state.
    pub fn draw_dirty_tiles<S, P>(&self, surface: &mut S, board: &mut Board<P>)
    where
        S: Surface + ?Sized,
        P: MinePicker,
    {
        for coords in board.coords() {
            let needs_redraw = board.get_tile(coords).is_some_and(|tile| tile.needs_redraw());
            if !needs_redraw {
                continue;
            }

            self.draw_tile(surface, board, coords);
            board.clear_redraw(coords);

            for neighbor in board.get_neighbors(coords) {
                self.draw_tile(surface, board, neighbor);
            }
        }
    }

    pub fn draw_tile<S, P>(&self, surface: &mut S, board: &Board<P>, coords: Coord2)
    where
        S: Surface + ?Sized,
        P: MinePicker,
    {
        let Some(tile) = board.get_tile(coords) else {
            return;
        };
        let (screen_x, screen_y) = self.screen_pos(coords);
        let size = self.tile_size;

        let bg_color = self.theme.tile_bg(coords, tile.is_uncovered());
        surface.fill_rect(screen_x, screen_y, size, size, bg_color);

        if tile.is_uncovered() {
            let borders = Self::tile_borders(board, coords);
            let color = self.theme.uncovered_border;
            let w = Self::BORDER_WEIGHT;
            let far = (size - w) as i32;

            if borders.contains(Borders::TOP) {
                surface.fill_rect(screen_x, screen_y, size, w, color);
            }
            if borders.contains(Borders::BOTTOM) {
                surface.fill_rect(screen_x, screen_y + far, size, w, color);
            }
            if borders.contains(Borders::LEFT) {
                surface.fill_rect(screen_x, screen_y, w, size, color);
            }
            if borders.contains(Borders::RIGHT) {
                surface.fill_rect(screen_x + far, screen_y, w, size, color);
            }
        }

        let count = tile.neighboring_mine_count();
        if tile.is_uncovered() && !tile.is_mined() && count > 0 {
            let pos = (
                screen_x + Self::NUMBER_OFFSET.0,
                screen_y + Self::NUMBER_OFFSET.1,
            );
            draw_digit(surface, pos, count, self.theme.number(count), 1);
        }

        if tile.is_flagged() {
            draw_sprite(surface, (screen_x, screen_y), &sprites::FLAG, self.theme.flag, 1);
        }

        if tile.is_uncovered() && tile.is_mined() {
            draw_sprite(surface, (screen_x, screen_y), &sprites::MINE, self.theme.mine, 1);
        }
    }

    /// Frames the cursor cell. Erasing the old frame is the caller's job:
    /// mark that tile dirty before the next [`Self::draw_dirty_tiles`].
    pub fn draw_selection_border<S: Surface + ?Sized>(&self, surface: &mut S, coords: Coord2) {
        let (x, y) = self.screen_pos(coords);
        let t = self.tile_size;
        let w = Self::BORDER_WEIGHT;
        let far = (t - w) as i32;
        let color = self.theme.selection_border;

        surface.fill_rect(x, y, t, w, color);
        surface.fill_rect(x, y + far, t, w, color);
        surface.fill_rect(x, y, w, t, color);
        surface.fill_rect(x + far, y, w, t, color);
    }
}
