use core::time::Duration;

use crate::platform::{Clock, Key, Keypad};

/// Fires once per press, on the transition from released to held.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TapKey {
    key: Key,
    is_down: bool,
}

impl TapKey {
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            is_down: false,
        }
    }

    pub fn is_triggered<K: Keypad + ?Sized>(&mut self, keypad: &mut K) -> bool {
        let down = keypad.is_key_down(self.key);
        let triggered = down && !self.is_down;
        self.is_down = down;
        triggered
    }

    /// Adopts the current key state without firing, so a key still held from
    /// the previous screen does not count as a new press.
    pub fn sync<K: Keypad + ?Sized>(&mut self, keypad: &mut K) {
        self.is_down = keypad.is_key_down(self.key);
    }
}

/// Fires on press, then keeps firing while held: first after
/// `initial_delay`, then every `repeat_delay`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RepeatingKey {
    key: Key,
    initial_delay: Duration,
    repeat_delay: Duration,
    is_down: bool,
    next_time: Duration,
}

impl RepeatingKey {
    pub const fn new(key: Key, initial_delay: Duration, repeat_delay: Duration) -> Self {
        Self {
            key,
            initial_delay,
            repeat_delay,
            is_down: false,
            next_time: Duration::ZERO,
        }
    }

    pub fn is_triggered<P: Keypad + Clock + ?Sized>(&mut self, platform: &mut P) -> bool {
        let now = platform.now();

        if !platform.is_key_down(self.key) {
            self.is_down = false;
            return false;
        }

        if !self.is_down {
            self.is_down = true;
            self.next_time = now + self.initial_delay;
            true
        } else if now > self.next_time {
            self.next_time = now + self.repeat_delay;
            true
        } else {
            false
        }
    }
}
