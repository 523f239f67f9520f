//! Move selection strategies. These only choose among moves the engine
//! already declared legal; they never judge legality themselves.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use gambit_core::{Move, MoveList, Position};

/// Picks one move from a legal move list.
pub trait MoveSelector {
    /// Choose a move, or `None` when `moves` is empty.
    fn select(&mut self, pos: &Position, moves: &MoveList) -> Option<Move>;

    /// Display name used in logs.
    fn name(&self) -> &str;

    /// Restart any random stream from `seed`. Deterministic selectors ignore it.
    fn reseed(&mut self, _seed: u64) {}
}

/// Uniformly random choice, reproducible when seeded.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// A selector seeded from `seed`, or from OS entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new(None)
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, _pos: &Position, moves: &MoveList) -> Option<Move> {
        moves.as_slice().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "random"
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Always the first generated move. Deterministic, for tests and scripting.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMoveSelector;

impl MoveSelector for FirstMoveSelector {
    fn select(&mut self, _pos: &Position, moves: &MoveList) -> Option<Move> {
        moves.as_slice().first().copied()
    }

    fn name(&self) -> &str {
        "first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_core::generate_legal_moves;

    #[test]
    fn random_selector_returns_legal_move() {
        let pos = Position::starting_position();
        let moves = generate_legal_moves(&pos, None);
        let mut selector = RandomSelector::new(Some(7));
        let mv = selector.select(&pos, &moves).unwrap();
        assert!(moves.as_slice().contains(&mv));
    }

    #[test]
    fn same_seed_same_choices() {
        let pos = Position::starting_position();
        let moves = generate_legal_moves(&pos, None);
        let mut a = RandomSelector::new(Some(99));
        let mut b = RandomSelector::new(Some(1));
        b.reseed(99);
        for _ in 0..10 {
            assert_eq!(a.select(&pos, &moves), b.select(&pos, &moves));
        }
    }

    #[test]
    fn selectors_handle_checkmate() {
        let pos: Position = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1"
            .parse()
            .unwrap();
        let moves = generate_legal_moves(&pos, None);
        assert!(RandomSelector::default().select(&pos, &moves).is_none());
        assert!(FirstMoveSelector.select(&pos, &moves).is_none());
    }

    #[test]
    fn first_selector_is_deterministic() {
        let pos = Position::starting_position();
        let moves = generate_legal_moves(&pos, None);
        assert_eq!(FirstMoveSelector.select(&pos, &moves), Some(moves[0]));
    }
}
