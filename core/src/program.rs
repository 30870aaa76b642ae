//! The top-level loop that hands control between the menu and the game.

use core::time::Duration;

use crate::platform::Platform;
use crate::session::*;
use crate::{MinePicker, RandomMinePicker, Result, Settings};

pub struct Program<M = RandomMinePicker> {
    game: GameSession<M>,
    menu: MenuSession,
    ctx: SessionContext,
    tick_interval: Duration,
}

impl Program<RandomMinePicker> {
    pub fn new(settings: &Settings) -> Result<Self> {
        let game = GameSession::new(settings)?;
        Ok(Self::with_game(game, settings))
    }
}

impl<M: MinePicker> Program<M> {
    pub fn with_game(game: GameSession<M>, settings: &Settings) -> Self {
        Self {
            game,
            menu: MenuSession::new(&settings.input),
            ctx: SessionContext::default(),
            tick_interval: settings.session.tick_interval(),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    /// Runs from the menu until Quit is chosen or the host interrupts.
    ///
    /// Every tick updates the current session, presents the frame, enters
    /// the next session if it changed, then sleeps the tick interval.
    pub fn run<P: Platform + ?Sized>(&mut self, platform: &mut P) -> SessionContext {
        let mut state = ProgramState::Menu;
        self.menu.enter(platform, &self.ctx);

        while !platform.interrupted() {
            let next = match state {
                ProgramState::Menu => self.menu.update(platform, &mut self.ctx),
                ProgramState::Game => self.game.update(platform, &mut self.ctx),
                ProgramState::Quit => break,
            };
            platform.present();

            if next != state {
                log::info!("{state:?} -> {next:?}");
                match next {
                    ProgramState::Menu => self.menu.enter(platform, &self.ctx),
                    ProgramState::Game => self.game.enter(platform),
                    ProgramState::Quit => break,
                }
                state = next;
            }

            platform.sleep(self.tick_interval);
        }

        if platform.interrupted() {
            log::info!("interrupted in {state:?}");
        }
        self.ctx.clone()
    }
}
