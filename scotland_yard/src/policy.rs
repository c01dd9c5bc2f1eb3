use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{Move, Player};

/// Decides which of the legal moves a player makes.
///
/// `moves` is never empty and is sorted, so a deterministic policy replays
/// the same game for the same board and start stations.
pub trait MovePolicy {
    fn choose(&mut self, player: &Player, moves: &[Move]) -> Move;
}

impl<F> MovePolicy for F
where
    F: FnMut(&Player, &[Move]) -> Move,
{
    fn choose(&mut self, player: &Player, moves: &[Move]) -> Move {
        (*self)(player, moves)
    }
}

/// Picks each legal move with the same probability.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, _player: &Player, moves: &[Move]) -> Move {
        *moves.choose(&mut self.rng).unwrap() // Can't fail, moves is never empty
    }
}

/// Always takes the smallest move, i.e. the lowest destination.
pub struct FirstMovePolicy;

impl MovePolicy for FirstMovePolicy {
    fn choose(&mut self, _player: &Player, moves: &[Move]) -> Move {
        moves[0]
    }
}
