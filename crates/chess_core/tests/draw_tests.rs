//! Tests for terminal-state predicates
//!
//! This module tests the game-ending conditions the adapter reports:
//! - Checkmate
//! - Stalemate
//! - Insufficient material
//! - Fifty-move rule

use chess_core::{Position, RulesAdapter};

// =============================================================================
// Checkmate Tests
// =============================================================================

#[test]
fn test_scholars_mate_is_checkmate() {
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
    assert!(pos.is_game_over());
    assert!(pos.legal_moves().is_empty());
}

#[test]
fn test_check_is_not_checkmate() {
    // Rook on e1 checks along the file, the king can step aside
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
    assert!(pos.in_check());
    assert!(!pos.is_checkmate());
    assert!(!pos.is_game_over());
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(pos.is_stalemate());
    assert!(!pos.is_checkmate());
    assert!(pos.is_game_over());
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let pos = Position::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(pos.is_stalemate());
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_bare_kings() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(pos.is_insufficient_material());
    assert!(pos.is_game_over());
}

#[test]
fn test_single_minor_piece() {
    let knight = Position::from_fen("4k3/8/8/8/8/8/8/4KN2 w - - 0 1").unwrap();
    assert!(knight.is_insufficient_material());
    let bishop = Position::from_fen("4k3/8/8/8/8/8/8/4KB2 w - - 0 1").unwrap();
    assert!(bishop.is_insufficient_material());
}

#[test]
fn test_same_coloured_bishops() {
    // c1 and f8 are both dark squares
    let pos = Position::from_fen("4kb2/8/8/8/8/8/8/2B1K3 w - - 0 1").unwrap();
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_opposite_coloured_bishops_can_mate() {
    // c1 dark, c8 light
    let pos = Position::from_fen("2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1").unwrap();
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_two_knights_are_not_flagged() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/3NKN2 w - - 0 1").unwrap();
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_any_pawn_is_sufficient() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
    assert!(!pos.is_insufficient_material());
    assert!(!pos.is_game_over());
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/R7/4K3 w - - 100 80").unwrap();
    assert!(pos.is_fifty_move_draw());
    assert!(pos.is_game_over());

    let pos = Position::from_fen("4k3/8/8/8/8/8/R7/4K3 w - - 99 80").unwrap();
    assert!(!pos.is_fifty_move_draw());
    assert!(!pos.is_game_over());
}

#[test]
fn test_quiet_move_reaches_fifty_move_limit() {
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/R7/4K3 w - - 99 80").unwrap();
    let quiet = pos
        .legal_moves()
        .into_iter()
        .find(|mv| pos.notation(mv) == "a2a3")
        .unwrap();
    pos.apply(&quiet).unwrap();
    assert!(pos.is_fifty_move_draw());
    assert!(pos.is_game_over());

    pos.undo().unwrap();
    assert!(!pos.is_game_over());
}
