use std::io::{self, Stdout, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, KeyboardEnhancementFlags};
use crossterm::{cursor, execute, terminal};
use pocketsweeper_core::platform::{Clock, Key, Keypad, Rgb, Surface, SystemClock};

use crate::framebuffer::Framebuffer;
use crate::keys::{Input, KeyTracker, map_key};

/// Raw mode and the alternate screen, undone on drop.
struct TerminalGuard {
    enhanced: bool,
}

impl TerminalGuard {
    fn enter(out: &mut Stdout) -> Result<Self> {
        terminal::enable_raw_mode().context("could not enable raw mode")?;
        let mut guard = Self { enhanced: false };

        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::Clear(terminal::ClearType::All),
        )
        .context("could not set up the terminal")?;

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                out,
                event::PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )
            .context("could not enable key release events")?;
            guard.enhanced = true;
        }
        log::debug!("keyboard enhancement: {}", guard.enhanced);

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.enhanced {
            let _ = execute!(out, event::PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the game in a true-color terminal.
pub struct TerminalPlatform {
    out: Stdout,
    frame: Framebuffer,
    scale: u32,
    keys: KeyTracker,
    clock: SystemClock,
    interrupted: bool,
    error: Option<io::Error>,
    // dropped last so the screen is restored after everything else
    _guard: TerminalGuard,
}

impl TerminalPlatform {
    pub fn new(scale: u32) -> Result<Self> {
        let mut out = stdout();
        let guard = TerminalGuard::enter(&mut out)?;

        let (cols, rows) = Framebuffer::cells(scale);
        if let Ok((width, height)) = terminal::size() {
            if width < cols || height < rows {
                log::warn!("terminal is {width}x{height}, the screen needs {cols}x{rows}");
            }
        }

        Ok(Self {
            out,
            frame: Framebuffer::new(),
            scale,
            keys: KeyTracker::new(guard.enhanced),
            clock: SystemClock::new(),
            interrupted: false,
            error: None,
            _guard: guard,
        })
    }

    /// The first terminal error hit while running, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn fail(&mut self, err: io::Error) {
        log::error!("terminal error: {err}");
        self.error.get_or_insert(err);
        self.interrupted = true;
    }

    fn pump_events(&mut self) {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => return self.fail(err),
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(err) => return self.fail(err),
            };

            match event {
                Event::Key(key_event) => match map_key(&key_event) {
                    Some(Input::Key(key)) => {
                        self.keys.record(key, key_event.kind, Instant::now());
                    }
                    Some(Input::Interrupt) if key_event.kind == KeyEventKind::Press => {
                        log::debug!("interrupt requested");
                        self.interrupted = true;
                    }
                    _ => {}
                },
                Event::Resize(..) | Event::FocusGained => {
                    let _ = execute!(self.out, terminal::Clear(terminal::ClearType::All));
                    self.force_redraw();
                }
                _ => {}
            }
        }
    }

    fn force_redraw(&mut self) {
        if let Err(err) = self.frame.render(&mut self.out, self.scale) {
            self.fail(err);
        }
    }
}

impl Surface for TerminalPlatform {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        self.frame.fill_rect(x, y, width, height, color);
    }

    fn present(&mut self) {
        if self.frame.is_dirty() {
            self.force_redraw();
        }
    }
}

impl Keypad for TerminalPlatform {
    fn is_key_down(&mut self, key: Key) -> bool {
        self.pump_events();
        self.keys.is_down(key, Instant::now())
    }

    fn interrupted(&self) -> bool {
        self.interrupted
    }
}

impl Clock for TerminalPlatform {
    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn sleep(&mut self, duration: Duration) {
        self.clock.sleep(duration);
    }
}
