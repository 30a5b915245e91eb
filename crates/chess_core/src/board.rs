use std::fmt;

use cozy_chess::{Board, File};

use crate::error::AdapterError;
use crate::types::*;
use crate::RulesAdapter;

pub use cozy_chess::Move;

/// A chess position with a take-back stack.
///
/// Every [`apply`](RulesAdapter::apply) saves the board it replaces so that
/// [`undo`](RulesAdapter::undo) restores it exactly. The hash of every board
/// on the stack is kept for repetition detection.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    stack: Vec<Board>,
    hashes: Vec<u64>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    /// Parses Forsyth-Edwards Notation. Standard (non-Shredder) castling
    /// fields are expected.
    pub fn from_fen(fen: &str) -> Result<Self, AdapterError> {
        let board = Board::from_fen(fen.trim(), false).map_err(|e| AdapterError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    fn from_board(board: Board) -> Self {
        let hashes = vec![board.hash()];
        Self {
            board,
            stack: Vec::new(),
            hashes,
        }
    }

    /// Number of moves applied since construction that have not been undone.
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn has_legal_moves(&self) -> bool {
        let mut found = false;
        self.board.generate_moves(|moves| {
            found = !moves.is_empty();
            found
        });
        found
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// True once the current position has occurred three times along the
    /// applied move stack.
    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.board.hash();
        self.hashes.iter().filter(|&&h| h == current).count() >= 3
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl RulesAdapter for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    fn apply(&mut self, mv: &Move) -> Result<(), AdapterError> {
        if !self.board.is_legal(*mv) {
            return Err(AdapterError::IllegalMove {
                notation: self.notation(mv),
            });
        }
        self.stack.push(self.board.clone());
        self.board.play_unchecked(*mv);
        self.hashes.push(self.board.hash());
        Ok(())
    }

    fn undo(&mut self) -> Result<(), AdapterError> {
        let prev = self.stack.pop().ok_or(AdapterError::EmptyUndoStack)?;
        self.board = prev;
        self.hashes.pop();
        Ok(())
    }

    fn is_capture(&self, mv: &Move) -> bool {
        let us = self.board.side_to_move();
        // Castling is encoded as king-takes-own-rook, so colour matters here
        if let Some(victim) = self.board.color_on(mv.to) {
            return victim != us;
        }
        // En passant: a pawn changing file onto an empty square
        self.board.piece_on(mv.from) == Some(cozy_chess::Piece::Pawn)
            && mv.from.file() != mv.to.file()
    }

    fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }

    fn is_insufficient_material(&self) -> bool {
        use cozy_chess::Piece as P;

        let b = &self.board;
        let heavy = b.pieces(P::Pawn) | b.pieces(P::Rook) | b.pieces(P::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = b.pieces(P::Knight);
        let bishops = b.pieces(P::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }

        // Bishops only: a draw when they all share one square colour
        let mut shades = bishops
            .into_iter()
            .map(|s| (s.file() as u8 + s.rank() as u8) % 2);
        let first = shades.next();
        shades.all(|shade| Some(shade) == first)
    }

    fn side_to_move(&self) -> Color {
        color_from_cozy(self.board.side_to_move())
    }

    // Claimable draws (fifty moves, threefold) count as terminal
    fn is_game_over(&self) -> bool {
        !self.has_legal_moves()
            || self.is_insufficient_material()
            || self.is_fifty_move_draw()
            || self.is_threefold_repetition()
    }

    fn notation(&self, mv: &Move) -> String {
        let mut shown = *mv;
        let is_castle = self.board.piece_on(mv.from) == Some(cozy_chess::Piece::King)
            && self.board.color_on(mv.to) == self.board.color_on(mv.from);
        if is_castle {
            // King-takes-rook becomes the usual king destination (g- or c-file)
            let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
                File::G
            } else {
                File::C
            };
            shown.to = cozy_chess::Square::new(file, mv.from.rank());
        }
        shown.to_string()
    }

    fn occupant(&self, sq: Square) -> Option<Piece> {
        if sq >= 64 {
            return None;
        }
        let square = cozy_chess::Square::index(sq as usize);
        let kind = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some(Piece {
            color: color_from_cozy(color),
            kind: kind_from_cozy(kind),
        })
    }
}

fn color_from_cozy(color: cozy_chess::Color) -> Color {
    match color {
        cozy_chess::Color::White => Color::White,
        cozy_chess::Color::Black => Color::Black,
    }
}

fn kind_from_cozy(piece: cozy_chess::Piece) -> PieceKind {
    match piece {
        cozy_chess::Piece::Pawn => PieceKind::Pawn,
        cozy_chess::Piece::Knight => PieceKind::Knight,
        cozy_chess::Piece::Bishop => PieceKind::Bishop,
        cozy_chess::Piece::Rook => PieceKind::Rook,
        cozy_chess::Piece::Queen => PieceKind::Queen,
        cozy_chess::Piece::King => PieceKind::King,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
