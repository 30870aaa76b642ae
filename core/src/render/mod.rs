//! Everything that turns game state into `fill_rect` calls.
//!
//! Drawing is destructive: sprites paint their set bits over whatever is
//! there and erasing means filling the footprint with a background color.

use crate::platform::{Rgb, Surface};

pub use field::*;
pub use hud::*;
pub use menu::*;
pub use number::*;
pub use theme::*;

mod field;
mod hud;
mod menu;
mod number;
pub mod sprites;
mod theme;

/// Monochrome bitmap, 1 bit per pixel, MSB first, each row padded to whole
/// bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    width: u16,
    height: u16,
    data: &'static [u8],
}

impl Sprite {
    pub const fn new(width: u16, height: u16, data: &'static [u8]) -> Self {
        assert!(data.len() == Self::bytes_per_row(width) * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    const fn bytes_per_row(width: u16) -> usize {
        (width as usize).div_ceil(8)
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub fn is_set(&self, col: u16, row: u16) -> bool {
        let offset = row as usize * Self::bytes_per_row(self.width) + (col as usize >> 3);
        self.data[offset] & (0x80 >> (col & 7)) != 0
    }

    /// Horizontal spans of set pixels as `(row, start_col, len)`, row by row.
    pub fn runs(&self) -> impl Iterator<Item = (u16, u16, u16)> + '_ {
        (0..self.height).flat_map(move |row| {
            let mut col = 0;
            core::iter::from_fn(move || {
                while col < self.width && !self.is_set(col, row) {
                    col += 1;
                }
                if col >= self.width {
                    return None;
                }
                let start = col;
                while col < self.width && self.is_set(col, row) {
                    col += 1;
                }
                Some((row, start, col - start))
            })
        })
    }
}

/// Paints every run of set bits as one rectangle, scaled by `scale`.
pub fn draw_sprite<S: Surface + ?Sized>(
    surface: &mut S,
    (x, y): (i32, i32),
    sprite: &Sprite,
    color: Rgb,
    scale: u32,
) {
    for (row, start, len) in sprite.runs() {
        surface.fill_rect(
            x + (u32::from(start) * scale) as i32,
            y + (u32::from(row) * scale) as i32,
            u32::from(len) * scale,
            scale,
            color,
        );
    }
}

/// Fills the sprite's whole footprint with the background.
pub fn erase_sprite<S: Surface + ?Sized>(
    surface: &mut S,
    (x, y): (i32, i32),
    sprite: &Sprite,
    bg_color: Rgb,
    scale: u32,
) {
    surface.fill_rect(
        x,
        y,
        u32::from(sprite.width) * scale,
        u32::from(sprite.height) * scale,
        bg_color,
    );
}

pub fn draw_digit<S: Surface + ?Sized>(
    surface: &mut S,
    pos: (i32, i32),
    digit: u8,
    color: Rgb,
    scale: u32,
) {
    draw_sprite(surface, pos, &sprites::DIGITS[usize::from(digit)], color, scale);
}

/// All digit glyphs share one footprint.
pub fn erase_digit<S: Surface + ?Sized>(surface: &mut S, pos: (i32, i32), bg_color: Rgb, scale: u32) {
    erase_sprite(surface, pos, &sprites::DIGITS[0], bg_color, scale);
}
