use rand::prelude::*;

use super::*;

/// Uniformly random candidates from a seeded small RNG, so a seed reproduces a
/// whole sequence of boards.
#[derive(Clone, Debug)]
pub struct RandomMinePicker {
    seed: u64,
    rng: SmallRng,
}

impl RandomMinePicker {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Picks a fresh seed from the thread-local RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinePicker for RandomMinePicker {
    fn pick(&mut self, (width, height): Coord2) -> Coord2 {
        (
            self.rng.random_range(0..width),
            self.rng.random_range(0..height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_stay_in_bounds() {
        let mut picker = RandomMinePicker::new(7);

        for _ in 0..500 {
            let (x, y) = picker.pick((4, 3));
            assert!(x < 4 && y < 3);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomMinePicker::new(1234);
        let mut b = RandomMinePicker::new(1234);

        let a: Vec<_> = (0..32).map(|_| a.pick((16, 10))).collect();
        let b: Vec<_> = (0..32).map(|_| b.pick((16, 10))).collect();

        assert_eq!(a, b);
    }
}
