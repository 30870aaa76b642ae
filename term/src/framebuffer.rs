use std::io::{self, Write};

use crossterm::{cursor, queue, style};
use pocketsweeper_core::platform::Rgb;
use pocketsweeper_core::{SCREEN_HEIGHT, SCREEN_WIDTH};

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// The logical screen in memory, shown as upper-half blocks: each terminal
/// cell carries two vertically stacked samples.
pub struct Framebuffer {
    px: Vec<Rgb>,
    dirty: bool,
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            px: vec![Rgb(0, 0, 0); WIDTH * HEIGHT],
            dirty: true,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * WIDTH + x]
    }

    /// Clips to the screen; rectangles entirely outside are ignored.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        let clip = |start: i32, len: u32, max: usize| {
            let lo = i64::from(start).clamp(0, max as i64) as usize;
            let hi = (i64::from(start) + i64::from(len)).clamp(0, max as i64) as usize;
            lo..hi
        };
        let cols = clip(x, width, WIDTH);
        let rows = clip(y, height, HEIGHT);
        if cols.is_empty() || rows.is_empty() {
            return;
        }

        for row in rows {
            self.px[row * WIDTH + cols.start..row * WIDTH + cols.end].fill(color);
        }
        self.dirty = true;
    }

    /// Terminal size in cells needed to show the screen at `scale`.
    pub fn cells(scale: u32) -> (u16, u16) {
        let scale = scale.max(1) as usize;
        let cols = WIDTH.div_ceil(scale);
        let rows = HEIGHT.div_ceil(scale).div_ceil(2);
        (cols as u16, rows as u16)
    }

    /// Writes the frame with one sample per `scale`×`scale` block and clears
    /// the dirty flag.
    pub fn render(&mut self, out: &mut impl Write, scale: u32) -> io::Result<()> {
        let step = scale.max(1) as usize;
        let (cols, rows) = Self::cells(scale);

        queue!(out, cursor::MoveTo(0, 0))?;
        let mut prev_fg = None;
        let mut prev_bg = None;

        for row in 0..usize::from(rows) {
            for col in 0..usize::from(cols) {
                let x = col * step;
                let top = self.get(x, row * 2 * step);
                let bottom_y = (row * 2 + 1) * step;
                let bot = if bottom_y < HEIGHT {
                    self.get(x, bottom_y)
                } else {
                    top
                };

                if prev_bg != Some(bot) {
                    queue!(out, style::SetBackgroundColor(color(bot)))?;
                    prev_bg = Some(bot);
                }
                if top == bot {
                    queue!(out, style::Print(' '))?;
                } else {
                    if prev_fg != Some(top) {
                        queue!(out, style::SetForegroundColor(color(top)))?;
                        prev_fg = Some(top);
                    }
                    queue!(out, style::Print('\u{2580}'))?;
                }
            }
            queue!(out, style::ResetColor, cursor::MoveToNextLine(1))?;
            prev_fg = None;
            prev_bg = None;
        }

        out.flush()?;
        self.dirty = false;
        Ok(())
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn color(Rgb(r, g, b): Rgb) -> style::Color {
    style::Color::Rgb { r, g, b }
}
