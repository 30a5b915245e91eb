use super::*;
use crate::types::Color;

#[test]
fn test_parse_uci_move_accepts_human_input() {
    let pos = Position::startpos();
    let mv = parse_uci_move(&pos, "  E2E4 ").expect("e2e4 is legal");
    assert_eq!(pos.notation(&mv), "e2e4");
}

#[test]
fn test_parse_uci_move_rejects_garbage() {
    let pos = Position::startpos();
    assert!(parse_uci_move(&pos, "e2e5").is_none());
    assert!(parse_uci_move(&pos, "xx").is_none());
    assert!(parse_uci_move(&pos, "").is_none());
}

#[test]
fn test_set_position_startpos_with_moves() {
    let mut pos = Position::startpos();
    set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4", "e7e5", "g1f3"]).unwrap();
    assert_eq!(pos.ply(), 3);
    assert_eq!(pos.side_to_move(), Color::Black);
}

#[test]
fn test_set_position_fen() {
    let mut pos = Position::startpos();
    let args = ["fen", "4k3/8/8/8/8/8/8/R3K2R", "w", "KQ", "-", "0", "1", "moves", "e1g1"];
    set_position_from_uci(&mut pos, &args).unwrap();
    assert_eq!(pos.side_to_move(), Color::Black);
    // King on g1, rook hopped to f1
    assert_eq!(pos.occupant(6).map(|p| p.kind), Some(crate::PieceKind::King));
    assert_eq!(pos.occupant(5).map(|p| p.kind), Some(crate::PieceKind::Rook));
    assert_eq!(pos.occupant(7), None);
}

#[test]
fn test_set_position_bad_move_leaves_position() {
    let mut pos = Position::startpos();
    let before = pos.fen();
    let err = set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4", "e2e4"]);
    assert_eq!(
        err,
        Err(AdapterError::UnknownMove {
            text: "e2e4".to_string()
        })
    );
    assert_eq!(pos.fen(), before);
}
