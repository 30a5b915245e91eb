//! Material plus piece-square evaluation.

use chess_core::{all_squares, mirror_square, Color, Piece, RulesAdapter, Square};

use crate::pst;

/// The side every static score is measured for.
pub const PRIVILEGED: Color = Color::White;

/// Score of a checkmate, before sign.
pub const MATE_SCORE: i32 = 10_000;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [100, 300, 300, 500, 900, 0];

/// Evaluates the position from White's perspective, whoever is to move.
///
/// Returns a score in centipawns:
/// - `-MATE_SCORE` if White is checkmated, `MATE_SCORE` if Black is
/// - 0 for stalemate or insufficient material
/// - otherwise material plus piece-square bonuses, White minus Black
pub fn evaluate<P: RulesAdapter + ?Sized>(pos: &P) -> i32 {
    if pos.is_checkmate() {
        return if pos.side_to_move() == PRIVILEGED {
            -MATE_SCORE
        } else {
            MATE_SCORE
        };
    }
    if pos.is_stalemate() || pos.is_insufficient_material() {
        return 0;
    }

    all_squares()
        .filter_map(|sq| pos.occupant(sq).map(|pc| piece_score(pc, sq)))
        .sum()
}

/// Signed contribution of one piece standing on `sq`.
#[inline]
pub fn piece_score(pc: Piece, sq: Square) -> i32 {
    let value = PIECE_VALUES[pc.kind.idx()];
    if pc.color == PRIVILEGED {
        value + pst::bonus(pc.kind, sq)
    } else {
        -(value + pst::bonus(pc.kind, mirror_square(sq)))
    }
}

/// Converts a White-relative score to `side`'s point of view.
#[inline]
pub fn relative(score: i32, side: Color) -> i32 {
    if side == PRIVILEGED {
        score
    } else {
        -score
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
