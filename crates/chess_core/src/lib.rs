//! Chess rules for ML-chess engines.
//!
//! Move generation and legality come from `cozy-chess`; this crate wraps them
//! in a reversible [`Position`] and exposes the narrow [`RulesAdapter`]
//! surface that search code is written against.

pub mod board;
pub mod error;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::AdapterError;
pub use types::*;
pub use uci::*;

// =============================================================================
// Rules adapter trait: everything an engine may ask of the game rules
// =============================================================================

/// The rules-engine services a move-selection engine consumes.
///
/// Implementors own the position state. Engines only ever mutate it through
/// [`apply`](RulesAdapter::apply) / [`undo`](RulesAdapter::undo), and those
/// calls nest strictly like a stack.
pub trait RulesAdapter {
    /// An action in the game. Cheap to clone.
    type Move: Clone + std::fmt::Debug;

    /// All legal moves, in the move generator's order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays `mv`, pushing the previous state for a later [`undo`](Self::undo).
    fn apply(&mut self, mv: &Self::Move) -> Result<(), AdapterError>;

    /// Takes back the most recently applied move.
    fn undo(&mut self) -> Result<(), AdapterError>;

    /// Whether `mv` removes an opposing piece (en passant included).
    fn is_capture(&self, mv: &Self::Move) -> bool;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    fn is_insufficient_material(&self) -> bool;

    fn side_to_move(&self) -> Color;

    /// Checkmate, stalemate, insufficient material or a claimable draw.
    fn is_game_over(&self) -> bool;

    /// Stable coordinate notation for `mv`, e.g. `e2e4` or `e7e8q`.
    fn notation(&self, mv: &Self::Move) -> String;

    /// The piece standing on `sq`, if any.
    fn occupant(&self, sq: Square) -> Option<Piece>;
}
