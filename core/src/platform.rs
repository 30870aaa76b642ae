//! Seams to the host: pixels out, keys in, time.
//!
//! The game only ever fills rectangles, polls keys and reads a monotonic
//! clock, so a host needs nothing more than these traits to run it.

use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The input device: a four-way pad and three buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Confirms a menu item.
    Ok,
    /// Uncovers the tile under the cursor.
    Uncover,
    /// Toggles a flag on the tile under the cursor.
    Flag,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Ok,
        Key::Uncover,
        Key::Flag,
    ];
}

pub trait Surface {
    /// Paints a solid axis-aligned rectangle in screen pixels, clipping
    /// whatever falls outside the screen.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb);

    /// Called once per tick after all drawing, for hosts that buffer.
    fn present(&mut self) {}
}

pub trait Keypad {
    /// Instantaneous, non-blocking poll.
    fn is_key_down(&mut self, key: Key) -> bool;

    /// Set when the host wants the program to stop (window closed, Ctrl+C).
    fn interrupted(&self) -> bool {
        false
    }
}

pub trait Clock {
    /// Monotonic time since an arbitrary epoch.
    fn now(&self) -> Duration;

    fn sleep(&mut self, duration: Duration);
}

pub trait Platform: Surface + Keypad + Clock {}

impl<T: Surface + Keypad + Clock + ?Sized> Platform for T {}

/// Wall clock backed by [`Instant`] and a blocking thread sleep.
#[derive(Copy, Clone, Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
