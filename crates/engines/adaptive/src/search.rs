//! Root move selection plus two reply searches.
//!
//! Both searches follow strict apply/undo nesting: every move applied at a
//! node is taken back before that node looks at the child's result, so the
//! position is restored on cutoffs and on child errors alike.

use chess_core::{AdapterError, Color, RulesAdapter};
use rand::Rng;
use tracing::trace;

use crate::config::{CaptureDepth, EngineConfig, Perspective, SearchStrategy};
use crate::error::EngineError;
use crate::eval::{evaluate, relative, PRIVILEGED};
use crate::memory::MoveMemory;
use crate::ordering::order_moves;

/// Search window bound, well outside any evaluation.
pub const INFINITY: i32 = 1_000_000;

/// Knobs the capture search needs at every node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuiescenceOptions {
    pub capture_depth: CaptureDepth,
    pub perspective: Perspective,
}

impl From<&EngineConfig> for QuiescenceOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            capture_depth: config.capture_depth,
            perspective: config.perspective,
        }
    }
}

/// The move chosen at the root and what it scored.
#[derive(Debug, Clone)]
pub struct RootOutcome<M> {
    pub best_move: M,
    /// Coordinate notation of `best_move` in the root position
    pub notation: String,
    pub score: i32,
}

/// Picks a move from the root position.
///
/// Legal moves are ordered by [`order_moves`], then each one is played and
/// scored by the configured [`SearchStrategy`] from the mover's side. The
/// first move with the strictly highest score wins.
pub fn pick_best_move<P, R>(
    pos: &mut P,
    config: &EngineConfig,
    memory: &MoveMemory,
    rng: &mut R,
    nodes: &mut u64,
) -> Result<RootOutcome<P::Move>, EngineError>
where
    P: RulesAdapter + ?Sized,
    R: Rng,
{
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }
    let ordered = order_moves(pos, moves, memory, config.exploration(), rng);

    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let depth = config.depth.saturating_sub(1);
    let mut best: Option<RootOutcome<P::Move>> = None;

    for mv in ordered {
        let notation = pos.notation(&mv);

        pos.apply(&mv)?;
        *nodes += 1;
        let result = score_reply(pos, config, depth, alpha, beta, nodes);
        pos.undo()?;
        let score = result?;

        trace!(mv = %notation, score, "root move scored");

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(RootOutcome {
                best_move: mv,
                notation,
                score,
            });
        }

        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    best.ok_or(EngineError::NoLegalMoves)
}

/// Scores the position just reached by a root move, for the side that played it.
fn score_reply<P>(
    pos: &mut P,
    config: &EngineConfig,
    depth: u8,
    alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> Result<i32, AdapterError>
where
    P: RulesAdapter + ?Sized,
{
    let to_move = pos.side_to_move();
    match config.strategy {
        SearchStrategy::CaptureExtended => {
            let opts = QuiescenceOptions::from(config);
            let score = quiescence(pos, depth, -beta, -alpha, to_move, opts, nodes)?;
            Ok(-score)
        }
        SearchStrategy::FixedDepth => {
            let maximizing = to_move == PRIVILEGED;
            let score = minimax(pos, depth, -INFINITY, INFINITY, maximizing, nodes)?;
            Ok(relative(score, to_move.other()))
        }
    }
}

/// Capture-only negamax search with a stand-pat floor.
///
/// `side` is the side to move at this node. Non-capturing lines end at the
/// static score; captures are searched further with the window negated and
/// swapped. The result always lies in `[alpha, beta]`.
///
/// With [`CaptureDepth::Bounded`] no captures are tried once `depth` is 0.
/// With [`CaptureDepth::Unbounded`] depth is carried along but never stops
/// the recursion.
pub fn quiescence<P>(
    pos: &mut P,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    side: Color,
    opts: QuiescenceOptions,
    nodes: &mut u64,
) -> Result<i32, AdapterError>
where
    P: RulesAdapter + ?Sized,
{
    let stand_pat = match opts.perspective {
        Perspective::Fixed => evaluate(pos),
        Perspective::SideToMove => relative(evaluate(pos), side),
    };
    if stand_pat >= beta {
        return Ok(beta);
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    if depth == 0 && opts.capture_depth == CaptureDepth::Bounded {
        return Ok(alpha);
    }

    for mv in pos.legal_moves() {
        if !pos.is_capture(&mv) {
            continue;
        }

        pos.apply(&mv)?;
        *nodes += 1;
        let result = quiescence(
            pos,
            depth.saturating_sub(1),
            -beta,
            -alpha,
            side.other(),
            opts,
            nodes,
        );
        pos.undo()?;
        let score = -result?;

        if score >= beta {
            return Ok(beta);
        }
        if score > alpha {
            alpha = score;
        }
    }

    Ok(alpha)
}

/// Fixed-depth minimax with alpha-beta pruning.
///
/// Scores are White-relative throughout: White maximises, Black minimises.
/// Stops at depth 0 or when the game is over and returns the static score.
pub fn minimax<P>(
    pos: &mut P,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> Result<i32, AdapterError>
where
    P: RulesAdapter + ?Sized,
{
    if depth == 0 || pos.is_game_over() {
        return Ok(evaluate(pos));
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };

    for mv in pos.legal_moves() {
        pos.apply(&mv)?;
        *nodes += 1;
        let result = minimax(pos, depth - 1, alpha, beta, !maximizing, nodes);
        pos.undo()?;
        let eval = result?;

        if maximizing {
            best = best.max(eval);
            alpha = alpha.max(eval);
        } else {
            best = best.min(eval);
            beta = beta.min(eval);
        }
        if beta <= alpha {
            break; // Cutoff
        }
    }

    Ok(best)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
