use core::time::Duration;

use super::*;
use crate::input::TapKey;
use crate::platform::{Key, Platform};
use crate::render::{BoardDisplay, Hud, Theme};
use crate::selector::DirectionalSelector;
use crate::*;

/// One round of minesweeper: cursor, board, HUD and the clock.
#[derive(Clone, Debug)]
pub struct GameSession<M = RandomMinePicker> {
    board: Board<M>,
    display: BoardDisplay,
    hud: Hud,
    theme: Theme,
    selector: DirectionalSelector,
    flag_key: TapKey,
    uncover_key: TapKey,
    start_time: Duration,
    time_taken: u32,
    end_pause: Duration,
}

impl GameSession<RandomMinePicker> {
    pub fn new(settings: &Settings) -> Result<Self> {
        let config = settings.game_config()?;
        let board = Board::new(config, settings.session.seed);
        Ok(Self::with_board(board, settings))
    }
}

impl<M: MinePicker> GameSession<M> {
    /// Session around an existing board; its size and mines are kept and the
    /// `game` part of `settings` is ignored.
    pub fn with_board(board: Board<M>, settings: &Settings) -> Self {
        let theme = Theme::DEFAULT;
        let (width, height) = board.size();
        Self {
            display: BoardDisplay::new((0, HUD_HEIGHT as i32), TILE_SIZE, theme),
            hud: Hud::new(theme),
            theme,
            selector: DirectionalSelector::new(
                (width.saturating_sub(1), height.saturating_sub(1)),
                &settings.input,
            ),
            flag_key: TapKey::new(Key::Flag),
            uncover_key: TapKey::new(Key::Uncover),
            start_time: Duration::ZERO,
            time_taken: 0,
            end_pause: settings.session.end_pause(),
            board,
        }
    }

    pub fn board(&self) -> &Board<M> {
        &self.board
    }

    pub fn cursor(&self) -> Coord2 {
        self.selector.pos()
    }

    /// Whole seconds since the round started, as of the last update.
    pub fn time_taken(&self) -> u32 {
        self.time_taken
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Starts a fresh round and paints the whole screen.
    pub fn enter<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        self.board.reset();

        // boards smaller than the grid leave a margin nothing else paints
        platform.fill_rect(
            0,
            HUD_HEIGHT as i32,
            SCREEN_WIDTH,
            SCREEN_HEIGHT - HUD_HEIGHT,
            self.theme.hud_bg,
        );
        self.display.draw_dirty_tiles(platform, &mut self.board);

        self.selector.set_pos((0, 0));
        self.hud.reset(platform);

        self.flag_key.sync(platform);
        self.uncover_key.sync(platform);

        self.start_time = platform.now();
        self.time_taken = 0;
        log::debug!("new round on {:?}", self.board.config());
    }

    /// One tick of input, board update and drawing.
    pub fn update<P: Platform + ?Sized>(
        &mut self,
        platform: &mut P,
        ctx: &mut SessionContext,
    ) -> ProgramState {
        let elapsed = platform.now().saturating_sub(self.start_time);
        self.time_taken = u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX);

        let prev = self.selector.pos();
        let cursor = self.selector.update(platform);

        if self.flag_key.is_triggered(platform) && self.board.flag_tile(cursor).has_update() {
            log::trace!("flag toggled at {cursor:?}");
        }

        if self.uncover_key.is_triggered(platform) {
            let outcome = self.board.uncover_tile(cursor);
            log::trace!("uncover at {cursor:?}: {outcome:?}");
        }

        if cursor != prev {
            self.board.mark_dirty(prev);
        }

        self.display.draw_dirty_tiles(platform, &mut self.board);
        self.display.draw_selection_border(platform, cursor);

        self.hud.update_flags_left(platform, self.board.flags_left());
        self.hud.update_time_taken(platform, self.time_taken);

        match self.board.game_state() {
            GameState::Won => {
                if ctx.record_win(self.time_taken) {
                    log::info!("new best score: {}s", self.time_taken);
                } else {
                    log::info!("won in {}s", self.time_taken);
                }
                self.finish(platform);
                ProgramState::Menu
            }
            GameState::Lost => {
                log::info!("lost after {}s", self.time_taken);
                self.finish(platform);
                ProgramState::Menu
            }
            GameState::Playing => ProgramState::Game,
        }
    }

    /// Leaves the final board on screen for the end pause.
    fn finish<P: Platform + ?Sized>(&self, platform: &mut P) {
        platform.present();
        platform.sleep(self.end_pause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockPlatform;

    fn session(size: Coord2, mines: &[Coord2]) -> GameSession<ScriptedMinePicker> {
        GameSession::with_board(Board::with_mines(size, mines), &Settings::default())
    }

    /// Holds `key` for one tick, then releases it for another.
    fn tap(
        game: &mut GameSession<ScriptedMinePicker>,
        platform: &mut MockPlatform,
        ctx: &mut SessionContext,
        key: Key,
    ) -> ProgramState {
        platform.press(key);
        let state = game.update(platform, ctx);
        platform.release(key);
        if state != ProgramState::Game {
            return state;
        }
        game.update(platform, ctx)
    }

    #[test]
    fn enter_starts_a_covered_round() {
        let mut platform = MockPlatform::new();
        let mut game = session((4, 4), &[(3, 3)]);

        game.enter(&mut platform);

        assert_eq!(game.board().uncovered_tiles_amount(), 0);
        assert!(game.board().is_first_click());
        assert_eq!(game.cursor(), (0, 0));
        assert_eq!(game.hud().time_taken().digits(), &[Some(0), Some(0), Some(0)]);
    }

    #[test]
    fn clearing_the_board_records_best_score() {
        let mut platform = MockPlatform::new();
        let mut ctx = SessionContext::default();
        let mut game = session((4, 4), &[(3, 3)]);
        game.enter(&mut platform);
        platform.advance(Duration::from_millis(3400));

        let state = tap(&mut game, &mut platform, &mut ctx, Key::Uncover);

        assert_eq!(state, ProgramState::Menu);
        assert_eq!(game.board().game_state(), GameState::Won);
        assert_eq!(ctx.best_score, Some(3));
        assert_eq!(platform.slept, Duration::from_millis(1000));
        assert_eq!(platform.presents, 1);
    }

    #[test]
    fn slower_win_keeps_old_best_score() {
        let mut platform = MockPlatform::new();
        let mut ctx = SessionContext { best_score: Some(2) };
        let mut game = session((4, 4), &[(3, 3)]);
        game.enter(&mut platform);
        platform.advance(Duration::from_secs(9));

        tap(&mut game, &mut platform, &mut ctx, Key::Uncover);

        assert_eq!(ctx.best_score, Some(2));
    }

    #[test]
    fn stepping_on_a_mine_returns_to_menu() {
        let mut platform = MockPlatform::new();
        let mut ctx = SessionContext::default();
        let mut game = session((5, 3), &[(2, 2), (4, 0)]);
        game.enter(&mut platform);

        assert_eq!(tap(&mut game, &mut platform, &mut ctx, Key::Uncover), ProgramState::Game);
        assert_eq!(game.board().uncovered_tiles_amount(), 10);

        for key in [Key::Right, Key::Right, Key::Down, Key::Down] {
            assert_eq!(tap(&mut game, &mut platform, &mut ctx, key), ProgramState::Game);
        }
        assert_eq!(game.cursor(), (2, 2));

        let state = tap(&mut game, &mut platform, &mut ctx, Key::Uncover);

        assert_eq!(state, ProgramState::Menu);
        assert_eq!(game.board().game_state(), GameState::Lost);
        assert_eq!(ctx.best_score, None);
        assert_eq!(platform.slept, Duration::from_millis(1000));
    }

    #[test]
    fn flag_key_updates_hud_counter() {
        let mut platform = MockPlatform::new();
        let mut ctx = SessionContext::default();
        let mut game = session((5, 3), &[(2, 2), (4, 0)]);
        game.enter(&mut platform);

        tap(&mut game, &mut platform, &mut ctx, Key::Flag);

        assert!(game.board().get_tile((0, 0)).unwrap().is_flagged());
        assert_eq!(game.hud().flags_left().digits(), &[Some(0), Some(1)]);

        tap(&mut game, &mut platform, &mut ctx, Key::Flag);
        assert_eq!(game.hud().flags_left().digits(), &[Some(0), Some(2)]);
    }

    #[test]
    fn held_button_from_menu_does_not_act() {
        let mut platform = MockPlatform::new();
        let mut ctx = SessionContext::default();
        let mut game = session((4, 4), &[(3, 3)]);
        platform.press(Key::Uncover);

        game.enter(&mut platform);
        game.update(&mut platform, &mut ctx);

        assert_eq!(game.board().uncovered_tiles_amount(), 0);
    }

    #[test]
    fn moving_cursor_repaints_previous_tile() {
        let mut platform = MockPlatform::new();
        let mut ctx = SessionContext::default();
        let mut game = session((4, 4), &[(3, 3)]);
        game.enter(&mut platform);
        game.update(&mut platform, &mut ctx);
        platform.take_rects();

        platform.press(Key::Right);
        game.update(&mut platform, &mut ctx);

        let covered_bg = Theme::DEFAULT.tile_bg((0, 0), false);
        let origin = HUD_HEIGHT as i32;
        assert!(platform.rects.iter().any(|rect| {
            (rect.x, rect.y, rect.width, rect.height, rect.color)
                == (0, origin, TILE_SIZE, TILE_SIZE, covered_bg)
        }));
        assert_eq!(game.cursor(), (1, 0));
    }

    #[test]
    fn clock_shows_whole_seconds() {
        let mut platform = MockPlatform::new();
        let mut ctx = SessionContext::default();
        let mut game = session((4, 4), &[(3, 3)]);
        game.enter(&mut platform);

        platform.advance(Duration::from_millis(2999));
        game.update(&mut platform, &mut ctx);
        assert_eq!(game.time_taken(), 2);

        platform.advance(Duration::from_millis(1));
        game.update(&mut platform, &mut ctx);
        assert_eq!(game.hud().time_taken().digits(), &[Some(0), Some(0), Some(3)]);
    }

    #[test]
    fn random_session_rejects_bad_settings() {
        let mut settings = Settings::default();
        settings.game.mines = 500;

        assert!(matches!(
            GameSession::new(&settings),
            Err(GameError::TooManyMines { .. })
        ));
    }
}
