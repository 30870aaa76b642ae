use smallvec::SmallVec;

use super::*;

/// Fixed-width, zero-padded decimal counter that only repaints the digits
/// that changed since the last update.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberDisplayer {
    pos: (i32, i32),
    color: Rgb,
    bg_color: Rgb,
    scale: u32,
    spacing: i32,
    /// Last drawn digit per cell, `None` when the cell is blank.
    digits: SmallVec<[Option<u8>; 4]>,
}

impl NumberDisplayer {
    pub fn new(
        pos: (i32, i32),
        color: Rgb,
        bg_color: Rgb,
        scale: u32,
        spacing: i32,
        max_digits: usize,
    ) -> Self {
        Self {
            pos,
            color,
            bg_color,
            scale,
            spacing,
            digits: SmallVec::from_elem(None, max_digits),
        }
    }

    pub fn max_digits(&self) -> usize {
        self.digits.len()
    }

    /// Largest value that fits; anything above shows as all nines.
    pub fn max_value(&self) -> u32 {
        10u32.saturating_pow(self.digits.len() as u32) - 1
    }

    pub fn digits(&self) -> &[Option<u8>] {
        &self.digits
    }

    fn cell_pos(&self, index: usize) -> (i32, i32) {
        (self.pos.0 + index as i32 * self.spacing, self.pos.1)
    }

    /// Shows `num`, clamped to `0..=max_value`.
    pub fn update<S: Surface + ?Sized>(&mut self, surface: &mut S, num: i64) {
        let mut rest = num.clamp(0, i64::from(self.max_value())) as u32;

        for index in (0..self.digits.len()).rev() {
            let digit = (rest % 10) as u8;
            rest /= 10;

            if self.digits[index] != Some(digit) {
                let pos = self.cell_pos(index);
                erase_digit(surface, pos, self.bg_color, self.scale);
                draw_digit(surface, pos, digit, self.color, self.scale);
                self.digits[index] = Some(digit);
            }
        }
    }

    /// Blanks every cell; the next update redraws all digits.
    pub fn clear<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for index in 0..self.digits.len() {
            erase_digit(surface, self.cell_pos(index), self.bg_color, self.scale);
            self.digits[index] = None;
        }
    }
}
