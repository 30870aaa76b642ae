use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Both end states hold until [`Board::reset`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// The minefield: tiles, counters and the win/loss state.
///
/// Mines are placed lazily by the first successful [`Board::uncover_tile`], so
/// the first uncover always lands on an empty tile.
#[derive(Clone, Debug)]
pub struct Board<P = RandomMinePicker> {
    config: GameConfig,
    tiles: Array2<Tile>,
    picker: P,
    uncovered_tiles_amount: CellCount,
    flags_left: CellCount,
    game_state: GameState,
    is_first_click: bool,
}

impl Board<RandomMinePicker> {
    /// Board with a random picker; `seed` makes the sequence of boards
    /// reproducible.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let picker = match seed {
            Some(seed) => RandomMinePicker::new(seed),
            None => RandomMinePicker::from_entropy(),
        };
        log::debug!("board {:?} using seed {}", config, picker.seed());
        Self::with_picker(config, picker)
    }
}

impl Board<ScriptedMinePicker> {
    /// Board with a fixed mine layout, as if the first uncover already
    /// happened. The layout is replayed as picks after a reset.
    pub fn with_mines(size: Coord2, mines: &[Coord2]) -> Self {
        let picks = if mines.is_empty() {
            vec![(0, 0)]
        } else {
            mines.to_vec()
        };
        let config = GameConfig::new_unchecked(size, mines.len() as CellCount);
        let mut board = Self::with_picker(config, ScriptedMinePicker::new(picks));
        for &coords in mines {
            board.place_mine(coords);
        }
        board.is_first_click = false;
        board
    }
}

impl<P: MinePicker> Board<P> {
    pub fn with_picker(config: GameConfig, picker: P) -> Self {
        Self {
            config,
            tiles: Array2::default([config.size.1.into(), config.size.0.into()]),
            picker,
            uncovered_tiles_amount: 0,
            flags_left: config.mines,
            game_state: GameState::default(),
            is_first_click: true,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn width(&self) -> Coord {
        self.config.size.0
    }

    pub fn height(&self) -> Coord {
        self.config.size.1
    }

    pub fn mine_amount(&self) -> CellCount {
        self.config.mines
    }

    pub fn uncovered_tiles_amount(&self) -> CellCount {
        self.uncovered_tiles_amount
    }

    pub fn flags_left(&self) -> CellCount {
        self.flags_left
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn is_first_click(&self) -> bool {
        self.is_first_click
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    pub fn is_within_bounds(&self, (x, y): Coord2) -> bool {
        x < self.width() && y < self.height()
    }

    /// Bounds-checked lookup; `None` outside the grid.
    pub fn get_tile(&self, coords: Coord2) -> Option<&Tile> {
        if self.is_within_bounds(coords) {
            Some(&self.tiles[coords.to_nd_index()])
        } else {
            None
        }
    }

    /// Looks up the tile `delta` away from `coords`; `None` past any edge.
    pub fn tile_at_offset(&self, coords: Coord2, delta: (i8, i8)) -> Option<&Tile> {
        let coords = apply_delta(coords, delta, self.size())?;
        self.get_tile(coords)
    }

    pub fn get_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Places exactly `mine_amount` mines by rejection sampling, keeping the
    /// 3×3 square around `first` clear.
    ///
    /// Terminates only when enough tiles lie outside that square, which
    /// [`GameConfig::new`] guarantees.
    pub fn generate_mines(&mut self, first: Coord2) {
        let size = self.size();
        let mut placed: CellCount = 0;
        let mut rejected: usize = 0;

        while placed < self.config.mines {
            let coords = self.picker.pick(size);

            if !self.is_within_bounds(coords) {
                log::warn!("Mine picker returned out-of-bounds {:?}", coords);
                rejected += 1;
                continue;
            }

            if self.tiles[coords.to_nd_index()].is_mined || is_within_one(coords, first) {
                rejected += 1;
                continue;
            }

            self.place_mine(coords);
            placed += 1;
        }

        log::debug!(
            "Placed {} mines around first click {:?}, {} candidates rejected",
            placed,
            first,
            rejected
        );
    }

    fn place_mine(&mut self, coords: Coord2) {
        self.tiles[coords.to_nd_index()].is_mined = true;
        for pos in self.get_neighbors(coords) {
            self.tiles[pos.to_nd_index()].neighboring_mine_count += 1;
        }
    }

    /// Uncovers a tile, flood-filling through empty tiles.
    pub fn uncover_tile(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        let Some(tile) = self.get_tile(coords) else {
            log::warn!("Ignoring uncover outside the board at {:?}", coords);
            return NoChange;
        };

        if self.game_state.is_finished() || tile.is_uncovered || tile.is_flagged {
            return NoChange;
        }

        if self.is_first_click {
            self.generate_mines(coords);
            self.is_first_click = false;
        }

        let mut visited = HashSet::new();
        let mut to_visit = VecDeque::from([coords]);
        log::trace!("Starting flood-fill from {:?}", coords);

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            let tile = &mut self.tiles[visit_coords.to_nd_index()];

            // skip flagged or already uncovered tiles
            if tile.is_uncovered || tile.is_flagged {
                continue;
            }

            tile.is_uncovered = true;
            tile.needs_redraw = true;
            let (is_mined, count) = (tile.is_mined, tile.neighboring_mine_count);
            self.uncovered_tiles_amount += 1;

            if is_mined {
                log::debug!("Hit mine at {:?}", visit_coords);
                self.game_state = GameState::Lost;
                return HitMine;
            }

            log::trace!("Uncovered {:?}, mine count: {}", visit_coords, count);

            // only empty tiles spread the fill
            if count == 0 {
                to_visit.extend(
                    self.get_neighbors(visit_coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }

        if self.is_game_won() {
            log::debug!("All {} safe tiles uncovered", self.uncovered_tiles_amount);
            self.game_state = GameState::Won;
            Won
        } else {
            Revealed
        }
    }

    /// Toggles the flag on a covered tile. Placing a flag needs one left.
    pub fn flag_tile(&mut self, coords: Coord2) -> MarkOutcome {
        use MarkOutcome::*;

        if !self.is_within_bounds(coords) {
            log::warn!("Ignoring flag outside the board at {:?}", coords);
            return NoChange;
        }
        if self.game_state.is_finished() {
            return NoChange;
        }

        let tile = &mut self.tiles[coords.to_nd_index()];
        if tile.is_uncovered {
            return NoChange;
        }

        if tile.is_flagged {
            tile.is_flagged = false;
            self.flags_left += 1;
        } else {
            if self.flags_left == 0 {
                return NoChange;
            }
            tile.is_flagged = true;
            self.flags_left -= 1;
        }

        tile.needs_redraw = true;
        Changed
    }

    /// Every safe tile is uncovered. Flags play no part.
    pub fn is_game_won(&self) -> bool {
        self.config.safe_tiles() == self.uncovered_tiles_amount
    }

    /// Fresh board of the same size, ready for a new first click.
    pub fn reset(&mut self) {
        self.tiles.fill(Tile::default());
        self.uncovered_tiles_amount = 0;
        self.flags_left = self.config.mines;
        self.game_state = GameState::Playing;
        self.is_first_click = true;
    }

    /// Forces a repaint of the tile, e.g. to erase a cursor frame drawn over it.
    pub fn mark_dirty(&mut self, coords: Coord2) {
        if self.is_within_bounds(coords) {
            self.tiles[coords.to_nd_index()].needs_redraw = true;
        }
    }

    pub(crate) fn clear_redraw(&mut self, coords: Coord2) {
        self.tiles[coords.to_nd_index()].needs_redraw = false;
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<P> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn flagged_tiles_amount(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.is_flagged).count() as CellCount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uncovered(board: &Board<impl MinePicker>) -> Vec<Coord2> {
        board
            .coords()
            .filter(|&pos| board.get_tile(pos).unwrap().is_uncovered())
            .collect()
    }

    fn mines(board: &Board<impl MinePicker>) -> Vec<Coord2> {
        board
            .coords()
            .filter(|&pos| board.get_tile(pos).unwrap().is_mined())
            .collect()
    }

    #[test]
    fn get_tile_outside_is_absent() {
        let board = Board::new(GameConfig::default(), Some(1));

        assert!(board.get_tile((15, 9)).is_some());
        assert!(board.get_tile((16, 0)).is_none());
        assert!(board.get_tile((0, 10)).is_none());
        assert!(board.tile_at_offset((0, 0), (-1, 0)).is_none());
        assert!(board.tile_at_offset((0, 0), (0, 1)).is_some());
    }

    #[test]
    fn first_click_area_stays_clear() {
        for seed in 0..50 {
            for &first in &[(0, 0), (7, 4), (15, 9), (0, 9)] {
                let mut board = Board::new(GameConfig::default(), Some(seed));

                board.generate_mines(first);

                let placed = mines(&board);
                assert_eq!(placed.len(), 25);
                assert!(placed.iter().all(|&pos| !is_within_one(pos, first)));
            }
        }
    }

    #[test]
    fn neighbor_counts_match_mines() {
        let mut board = Board::new(GameConfig::default(), Some(42));
        board.generate_mines((3, 3));

        for pos in board.coords() {
            let expected = board
                .get_neighbors(pos)
                .filter(|&n| board.get_tile(n).unwrap().is_mined())
                .count() as u8;
            assert_eq!(
                board.get_tile(pos).unwrap().neighboring_mine_count(),
                expected,
                "count at {:?}",
                pos
            );
        }
    }

    #[test]
    fn scripted_picks_in_safe_zone_are_rejected() {
        let config = GameConfig::new_unchecked((4, 4), 1);
        let picker = ScriptedMinePicker::new([(0, 0), (1, 1), (1, 0), (0, 1), (3, 3)]);
        let mut board = Board::with_picker(config, picker);

        board.generate_mines((0, 0));

        assert_eq!(mines(&board), vec![(3, 3)]);
        assert_eq!(board.picker().issued(), 5);
        assert_eq!(board.get_tile((2, 2)).unwrap().neighboring_mine_count(), 1);
    }

    #[test]
    fn repeated_pick_is_rejected() {
        let config = GameConfig::new_unchecked((4, 4), 2);
        let picker = ScriptedMinePicker::new([(3, 3), (3, 3), (0, 3)]);
        let mut board = Board::with_picker(config, picker);

        board.generate_mines((0, 0));

        assert_eq!(mines(&board), vec![(0, 3), (3, 3)]);
        assert_eq!(board.picker().issued(), 3);
    }

    #[test]
    fn first_uncover_places_mines_and_is_safe() {
        let mut board = Board::new(GameConfig::default(), Some(9));
        assert!(board.is_first_click());

        let outcome = board.uncover_tile((8, 5));

        assert!(!board.is_first_click());
        assert_ne!(outcome, RevealOutcome::HitMine);
        assert_eq!(mines(&board).len(), 25);
        assert_eq!(
            board.get_tile((8, 5)).unwrap().neighboring_mine_count(),
            0
        );
    }

    #[test]
    fn uncover_flagged_tile_is_noop() {
        let mut board = Board::with_mines((3, 3), &[(2, 2)]);
        board.flag_tile((0, 0));

        let outcome = board.uncover_tile((0, 0));

        assert_eq!(outcome, RevealOutcome::NoChange);
        assert_eq!(board.uncovered_tiles_amount(), 0);
        assert!(board.get_tile((0, 0)).unwrap().is_flagged());
    }

    #[test]
    fn flood_fill_opens_region_and_its_border_only() {
        // column x=2 is a wall of mines, the right side must stay covered
        let wall = [(2, 0), (2, 1), (2, 2), (2, 3)];
        let mut board = Board::with_mines((5, 4), &wall);

        let outcome = board.uncover_tile((0, 0));

        assert_eq!(outcome, RevealOutcome::Revealed);
        let expected: Vec<Coord2> = board.coords().filter(|&(x, _)| x < 2).collect();
        assert_eq!(uncovered(&board), expected);
        assert_eq!(board.uncovered_tiles_amount(), 8);
    }

    #[test]
    fn numbered_tile_does_not_spread() {
        let mut board = Board::with_mines((3, 3), &[(2, 2)]);

        let outcome = board.uncover_tile((1, 1));

        assert_eq!(outcome, RevealOutcome::Revealed);
        assert_eq!(uncovered(&board), vec![(1, 1)]);
    }

    #[test]
    fn flood_fill_goes_around_flags() {
        let mut board = Board::with_mines((3, 3), &[(2, 2)]);
        board.flag_tile((1, 0));

        board.uncover_tile((0, 0));

        // (2, 0) is only reachable through the flag or a numbered tile
        assert!(!board.get_tile((1, 0)).unwrap().is_uncovered());
        assert!(!board.get_tile((2, 0)).unwrap().is_uncovered());
        assert_eq!(
            uncovered(&board),
            vec![(0, 0), (0, 1), (1, 1), (0, 2), (1, 2)]
        );
        assert_eq!(board.game_state(), GameState::Playing);
    }

    #[test]
    fn hitting_mine_loses_and_keeps_uncovered() {
        let wall = [(2, 0), (2, 1), (2, 2), (2, 3)];
        let mut board = Board::with_mines((5, 4), &wall);
        board.uncover_tile((0, 0));

        let outcome = board.uncover_tile((2, 1));

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(board.game_state(), GameState::Lost);
        assert_eq!(board.uncovered_tiles_amount(), 9);
        assert!(board.get_tile((0, 0)).unwrap().is_uncovered());
        assert!(board.get_tile((2, 1)).unwrap().is_uncovered());
        assert!(!board.get_tile((3, 1)).unwrap().is_uncovered());
    }

    #[test]
    fn finished_board_ignores_actions() {
        let mut board = Board::with_mines((2, 2), &[(0, 0)]);
        board.uncover_tile((0, 0));

        assert_eq!(board.uncover_tile((1, 1)), RevealOutcome::NoChange);
        assert_eq!(board.flag_tile((1, 0)), MarkOutcome::NoChange);
        assert_eq!(board.game_state(), GameState::Lost);
    }

    #[test]
    fn uncovering_all_safe_tiles_wins() {
        let mut board = Board::with_mines((3, 3), &[(2, 2)]);

        let outcome = board.uncover_tile((0, 0));

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(board.game_state(), GameState::Won);
        assert!(board.is_game_won());
        assert_eq!(board.uncovered_tiles_amount(), 8);
    }

    #[test]
    fn flagging_every_mine_does_not_win() {
        let mut board = Board::with_mines((3, 1), &[(0, 0)]);

        board.flag_tile((0, 0));

        assert!(!board.is_game_won());
        assert_eq!(board.game_state(), GameState::Playing);
        assert_eq!(board.uncover_tile((2, 0)), RevealOutcome::Won);
    }

    #[test]
    fn flags_are_limited_and_counted() {
        let mut board = Board::with_mines((4, 1), &[(0, 0), (3, 0)]);

        assert_eq!(board.flag_tile((0, 0)), MarkOutcome::Changed);
        assert_eq!(board.flag_tile((1, 0)), MarkOutcome::Changed);
        assert_eq!(board.flags_left(), 0);
        assert_eq!(board.flag_tile((2, 0)), MarkOutcome::NoChange);
        assert!(!board.get_tile((2, 0)).unwrap().is_flagged());

        assert_eq!(board.flag_tile((1, 0)), MarkOutcome::Changed);
        assert_eq!(board.flags_left(), 1);
        assert_eq!(board.flags_left() + board.flagged_tiles_amount(), 2);
    }

    #[test]
    fn flag_invariant_holds_over_random_actions() {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(5);
        let mut board = Board::new(GameConfig::default(), Some(5));

        for _ in 0..400 {
            let pos = (rng.random_range(0..16), rng.random_range(0..10));
            if rng.random_bool(0.8) {
                board.flag_tile(pos);
            } else if board.uncover_tile(pos) == RevealOutcome::HitMine {
                board.reset();
            }
            assert_eq!(
                board.flags_left() + board.flagged_tiles_amount(),
                board.mine_amount()
            );
            assert_eq!(uncovered(&board).len() as CellCount, board.uncovered_tiles_amount());
            assert!(board
                .coords()
                .map(|pos| board.get_tile(pos).unwrap())
                .all(|tile| !(tile.is_flagged() && tile.is_uncovered())));
        }
    }

    #[test]
    fn flag_on_uncovered_tile_is_noop() {
        let mut board = Board::with_mines((3, 3), &[(2, 2)]);
        board.uncover_tile((1, 1));

        assert_eq!(board.flag_tile((1, 1)), MarkOutcome::NoChange);
        assert_eq!(board.flags_left(), 1);
    }

    #[test]
    fn actions_mark_tiles_dirty() {
        let mut board = Board::with_mines((3, 3), &[(2, 2)]);
        for pos in board.coords().collect::<Vec<_>>() {
            board.clear_redraw(pos);
        }

        board.flag_tile((0, 2));
        board.uncover_tile((1, 1));

        assert!(board.get_tile((0, 2)).unwrap().needs_redraw());
        assert!(board.get_tile((1, 1)).unwrap().needs_redraw());
        assert!(!board.get_tile((0, 0)).unwrap().needs_redraw());
    }

    #[test]
    fn reset_restores_fresh_board() {
        let mut board = Board::new(GameConfig::default(), Some(3));
        board.uncover_tile((0, 0));
        board.flag_tile((15, 9));

        board.reset();

        assert!(board.is_first_click());
        assert_eq!(board.game_state(), GameState::Playing);
        assert_eq!(board.uncovered_tiles_amount(), 0);
        assert_eq!(board.flags_left(), 25);
        assert!(mines(&board).is_empty());
        assert!(board
            .coords()
            .all(|pos| board.get_tile(pos).unwrap().needs_redraw()));
    }

    #[test]
    fn out_of_bounds_actions_are_ignored() {
        let mut board = Board::with_mines((3, 3), &[(2, 2)]);

        assert_eq!(board.uncover_tile((3, 0)), RevealOutcome::NoChange);
        assert_eq!(board.flag_tile((0, 3)), MarkOutcome::NoChange);
        assert_eq!(board.flags_left(), 1);
    }
}
