use crate::input::RepeatingKey;
use crate::platform::{Clock, Key, Keypad};
use crate::{Coord, Coord2, InputSettings};

/// Cursor over a `[0, max_x] × [0, max_y]` grid, driven by four
/// auto-repeating direction keys.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalSelector {
    up: RepeatingKey,
    down: RepeatingKey,
    left: RepeatingKey,
    right: RepeatingKey,
    max: Coord2,
    pos: Coord2,
}

impl DirectionalSelector {
    pub fn new(max: Coord2, timing: &InputSettings) -> Self {
        let key = |key| RepeatingKey::new(key, timing.initial_delay(), timing.repeat_delay());
        Self {
            up: key(Key::Up),
            down: key(Key::Down),
            left: key(Key::Left),
            right: key(Key::Right),
            max,
            pos: (0, 0),
        }
    }

    pub fn pos(&self) -> Coord2 {
        self.pos
    }

    pub fn max(&self) -> Coord2 {
        self.max
    }

    pub fn set_pos(&mut self, (x, y): Coord2) {
        self.pos = (x.min(self.max.0), y.min(self.max.1));
    }

    /// Polls all four keys once and moves the cursor, clamping each axis.
    pub fn update<P: Keypad + Clock + ?Sized>(&mut self, platform: &mut P) -> Coord2 {
        let mut dx: i16 = 0;
        let mut dy: i16 = 0;

        if self.up.is_triggered(platform) {
            dy -= 1;
        }
        if self.down.is_triggered(platform) {
            dy += 1;
        }
        if self.left.is_triggered(platform) {
            dx -= 1;
        }
        if self.right.is_triggered(platform) {
            dx += 1;
        }

        self.pos = (
            step(self.pos.0, dx, self.max.0),
            step(self.pos.1, dy, self.max.1),
        );
        self.pos
    }
}

fn step(value: Coord, delta: i16, max: Coord) -> Coord {
    (i16::from(value) + delta).clamp(0, i16::from(max)) as Coord
}
