use crate::*;
pub use random::*;

mod random;

/// Source of candidate mine positions for [`Board::generate_mines`].
///
/// Candidates may repeat or land in the safe zone; the board rejects those and
/// asks again.
pub trait MinePicker {
    fn pick(&mut self, size: Coord2) -> Coord2;
}

impl<P: MinePicker + ?Sized> MinePicker for &mut P {
    fn pick(&mut self, size: Coord2) -> Coord2 {
        (**self).pick(size)
    }
}

/// Replays a fixed list of candidates, cycling when it runs out.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedMinePicker {
    picks: Vec<Coord2>,
    next: usize,
    issued: usize,
}

impl ScriptedMinePicker {
    pub fn new(picks: impl Into<Vec<Coord2>>) -> Self {
        let picks = picks.into();
        assert!(!picks.is_empty(), "scripted picker needs at least one pick");
        Self {
            picks,
            next: 0,
            issued: 0,
        }
    }

    /// How many candidates were handed out so far.
    pub fn issued(&self) -> usize {
        self.issued
    }
}

impl MinePicker for ScriptedMinePicker {
    fn pick(&mut self, _size: Coord2) -> Coord2 {
        let pick = self.picks[self.next];
        self.next = (self.next + 1) % self.picks.len();
        self.issued += 1;
        pick
    }
}
