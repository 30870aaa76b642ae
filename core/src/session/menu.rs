use super::*;
use crate::InputSettings;
use crate::input::TapKey;
use crate::platform::{Key, Platform};
use crate::render::{MenuDisplay, Theme};
use crate::selector::DirectionalSelector;

const PLAY: u8 = 0;
const RESET_SCORE: u8 = 1;
const QUIT: u8 = 2;

/// Title screen with Play, Reset score and Quit.
#[derive(Clone, Debug)]
pub struct MenuSession {
    selector: DirectionalSelector,
    ok_key: TapKey,
    display: MenuDisplay,
}

impl MenuSession {
    pub fn new(input: &InputSettings) -> Self {
        Self {
            selector: DirectionalSelector::new((0, QUIT), input),
            ok_key: TapKey::new(Key::Ok),
            display: MenuDisplay::new(Theme::DEFAULT),
        }
    }

    pub fn selected(&self) -> usize {
        self.selector.pos().1.into()
    }

    pub fn display(&self) -> &MenuDisplay {
        &self.display
    }

    pub fn enter<P: Platform + ?Sized>(&mut self, platform: &mut P, ctx: &SessionContext) {
        self.selector.set_pos((0, PLAY));
        self.display.reset(platform);
        if let Some(best) = ctx.best_score {
            self.display.update_best_score(platform, best);
        }
        self.ok_key.sync(platform);
    }

    pub fn update<P: Platform + ?Sized>(
        &mut self,
        platform: &mut P,
        ctx: &mut SessionContext,
    ) -> ProgramState {
        let (_, item) = self.selector.update(platform);
        self.display.update_selector_pos(platform, item.into());

        if !self.ok_key.is_triggered(platform) {
            return ProgramState::Menu;
        }

        match item {
            PLAY => ProgramState::Game,
            RESET_SCORE => {
                log::info!("best score cleared");
                ctx.best_score = None;
                self.display.clear_best_score(platform);
                ProgramState::Menu
            }
            QUIT => ProgramState::Quit,
            _ => ProgramState::Menu,
        }
    }
}
