use std::time::{Duration, Instant};

use bitflags::bitflags;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hashbrown::HashMap;
use pocketsweeper_core::platform::Key;

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct KeySet: u8 {
        const UP      = 1;
        const DOWN    = 1 << 1;
        const LEFT    = 1 << 2;
        const RIGHT   = 1 << 3;
        const OK      = 1 << 4;
        const UNCOVER = 1 << 5;
        const FLAG    = 1 << 6;
    }
}

impl From<Key> for KeySet {
    fn from(key: Key) -> Self {
        match key {
            Key::Up => Self::UP,
            Key::Down => Self::DOWN,
            Key::Left => Self::LEFT,
            Key::Right => Self::RIGHT,
            Key::Ok => Self::OK,
            Key::Uncover => Self::UNCOVER,
            Key::Flag => Self::FLAG,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Interrupt,
}

/// Keyboard layout: arrows or WASD, Enter, Space, F or Backspace, and Esc or
/// Ctrl+C to leave.
pub fn map_key(event: &KeyEvent) -> Option<Input> {
    let input = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Input::Interrupt,
        KeyCode::Esc => Input::Interrupt,
        KeyCode::Up | KeyCode::Char('w' | 'W') => Input::Key(Key::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Input::Key(Key::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Input::Key(Key::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Input::Key(Key::Right),
        KeyCode::Enter => Input::Key(Key::Ok),
        KeyCode::Char(' ') => Input::Key(Key::Uncover),
        KeyCode::Char('f' | 'F') | KeyCode::Backspace => Input::Key(Key::Flag),
        _ => return None,
    };
    Some(input)
}

/// Turns key events into a held/released state.
///
/// Terminals with the keyboard enhancement protocol report releases, so the
/// held set is exact. Elsewhere only presses and auto-repeats arrive, and a
/// key counts as held until `hold_window` passes without another event.
#[derive(Clone, Debug)]
pub struct KeyTracker {
    reports_release: bool,
    hold_window: Duration,
    held: KeySet,
    last_seen: HashMap<Key, Instant>,
}

impl KeyTracker {
    pub const HOLD_WINDOW: Duration = Duration::from_millis(150);

    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            hold_window: Self::HOLD_WINDOW,
            held: KeySet::empty(),
            last_seen: HashMap::new(),
        }
    }

    pub fn record(&mut self, key: Key, kind: KeyEventKind, now: Instant) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held.insert(key.into());
                self.last_seen.insert(key, now);
            }
            KeyEventKind::Release => {
                self.held.remove(key.into());
                self.last_seen.remove(&key);
            }
        }
    }

    pub fn is_down(&self, key: Key, now: Instant) -> bool {
        if self.reports_release {
            self.held.contains(key.into())
        } else {
            self.last_seen
                .get(&key)
                .is_some_and(|&seen| now.saturating_duration_since(seen) < self.hold_window)
        }
    }
}
