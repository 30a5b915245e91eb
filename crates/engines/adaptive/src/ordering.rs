//! Move ordering from adaptive memory plus random exploration.

use chess_core::RulesAdapter;
use rand::Rng;

use crate::memory::MoveMemory;

/// Random perturbation of ordering keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exploration {
    /// Independent per-move probability of a nudge, in `[0, 1]`
    pub rate: f64,
    /// Nudges are uniform in `[-magnitude, magnitude]`
    pub magnitude: f64,
}

impl Exploration {
    /// No perturbation: ordering is a pure function of memory.
    pub const NONE: Exploration = Exploration {
        rate: 0.0,
        magnitude: 0.0,
    };
}

/// Orders `moves` best-first by remembered score.
///
/// Each move's key is its [`MoveMemory`] estimate; with probability
/// `exploration.rate` a fresh uniform nudge is added. The sort is stable, so
/// equal keys keep the move generator's order.
pub fn order_moves<P, R>(
    pos: &P,
    moves: Vec<P::Move>,
    memory: &MoveMemory,
    exploration: Exploration,
    rng: &mut R,
) -> Vec<P::Move>
where
    P: RulesAdapter + ?Sized,
    R: Rng,
{
    let mut keyed: Vec<(f64, P::Move)> = moves
        .into_iter()
        .map(|mv| {
            let key = ordering_key(memory.get(&pos.notation(&mv)), exploration, rng);
            (key, mv)
        })
        .collect();

    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, mv)| mv).collect()
}

/// A remembered score, nudged with probability `exploration.rate`.
fn ordering_key<R: Rng>(remembered: f64, exploration: Exploration, rng: &mut R) -> f64 {
    if exploration.rate > 0.0 && rng.gen::<f64>() < exploration.rate {
        let m = exploration.magnitude;
        remembered + rng.gen_range(-m..=m)
    } else {
        remembered
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
