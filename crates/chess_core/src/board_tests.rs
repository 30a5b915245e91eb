use super::*;

fn find(pos: &Position, text: &str) -> Move {
    pos.legal_moves()
        .into_iter()
        .find(|mv| pos.notation(mv) == text)
        .unwrap_or_else(|| panic!("{text} should be legal"))
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    // Starting position has 20 legal moves
    assert_eq!(pos.legal_moves().len(), 20);
    assert_eq!(pos.side_to_move(), Color::White);
}

#[test]
fn test_kiwipete_moves() {
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    assert_eq!(pos.legal_moves().len(), 48);
}

#[test]
fn test_apply_undo_restores_position() {
    let mut pos = Position::startpos();
    let before = pos.fen();
    let e4 = find(&pos, "e2e4");
    pos.apply(&e4).unwrap();
    assert_eq!(pos.ply(), 1);
    assert_eq!(pos.side_to_move(), Color::Black);
    pos.undo().unwrap();
    assert_eq!(pos.fen(), before);
    assert_eq!(pos.ply(), 0);
}

#[test]
fn test_undo_on_empty_stack_fails() {
    let mut pos = Position::startpos();
    assert_eq!(pos.undo(), Err(AdapterError::EmptyUndoStack));
}

#[test]
fn test_apply_illegal_move_fails() {
    let mut pos = Position::startpos();
    let e4 = find(&pos, "e2e4");
    pos.apply(&e4).unwrap();
    // Same move again is a white move with black to play
    assert!(matches!(
        pos.apply(&e4),
        Err(AdapterError::IllegalMove { .. })
    ));
    assert_eq!(pos.ply(), 1);
}

#[test]
fn test_invalid_fen_is_error() {
    assert!(matches!(
        Position::from_fen("not a fen"),
        Err(AdapterError::InvalidFen { .. })
    ));
}

#[test]
fn test_castling_notation_uses_king_destination() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let names: Vec<String> = pos.legal_moves().iter().map(|m| pos.notation(m)).collect();
    assert!(names.contains(&"e1g1".to_string()));
    assert!(names.contains(&"e1c1".to_string()));
    assert!(!names.contains(&"e1h1".to_string()));
}

#[test]
fn test_castling_is_not_capture() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let castle = find(&pos, "e1g1");
    assert!(!pos.is_capture(&castle));
}

#[test]
fn test_capture_detection() {
    let pos = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
    assert!(pos.is_capture(&find(&pos, "e4d5")));
    assert!(!pos.is_capture(&find(&pos, "e4e5")));
}

#[test]
fn test_en_passant_is_capture() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    assert!(pos.is_capture(&find(&pos, "e5d6")));
}

#[test]
fn test_promotion_notation() {
    let pos = Position::from_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let names: Vec<String> = pos.legal_moves().iter().map(|m| pos.notation(m)).collect();
    assert!(names.contains(&"e7e8q".to_string()));
    assert!(names.contains(&"e7e8n".to_string()));
}

#[test]
fn test_occupant_reports_piece_and_colour() {
    let pos = Position::startpos();
    assert_eq!(
        pos.occupant(4),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::King
        })
    );
    assert_eq!(
        pos.occupant(59),
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::Queen
        })
    );
    assert_eq!(pos.occupant(28), None);
    assert_eq!(pos.occupant(64), None);
}

#[test]
fn test_threefold_repetition_along_stack() {
    let mut pos = Position::startpos();
    for _ in 0..2 {
        for text in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            let mv = find(&pos, text);
            pos.apply(&mv).unwrap();
        }
    }
    assert!(pos.is_threefold_repetition());
    assert!(pos.is_game_over());
    pos.undo().unwrap();
    assert!(!pos.is_threefold_repetition());
}
