//! Adaptive Chess Engine
//!
//! Shallow capture-extended search with a piece-square evaluation and a move
//! memory that biases ordering by how past decisions scored.

mod config;
mod error;
mod eval;
mod memory;
mod ordering;
mod pst;
mod search;

use chess_core::RulesAdapter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

pub use config::{CaptureDepth, EngineConfig, Perspective, SearchStrategy, MAX_DEPTH};
pub use error::EngineError;
pub use eval::{evaluate, piece_score, relative, MATE_SCORE, PIECE_VALUES, PRIVILEGED};
pub use memory::{MoveMemory, DEFAULT_HISTORY_LEN};
pub use ordering::{order_moves, Exploration};
pub use pst::TABLES as PIECE_SQUARE_TABLES;
pub use search::{minimax, pick_best_move, quiescence, QuiescenceOptions, RootOutcome, INFINITY};

/// Summary of the most recent decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Notation of the chosen move
    pub best_move: String,
    /// Its score from the mover's side
    pub score: i32,
    /// Configured depth
    pub depth: u8,
    /// Moves applied while deciding
    pub nodes: u64,
}

/// Chess engine combining capture-extended search with adaptive move ordering.
///
/// The engine owns its move memory and random source. Memory lives as long
/// as the engine and is only reset by [`clear_memory`](Self::clear_memory).
#[derive(Debug, Clone)]
pub struct AdaptiveEngine<R = StdRng> {
    config: EngineConfig,
    memory: MoveMemory,
    rng: R,
    /// Node counter for statistics
    nodes: u64,
    last: Option<SearchReport>,
}

impl AdaptiveEngine<StdRng> {
    /// Engine with default settings and an entropy-seeded RNG.
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self::build(config, StdRng::from_entropy())
    }

    /// Engine with `config`, seeded from `config.seed` when set.
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for AdaptiveEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AdaptiveEngine<R> {
    /// Engine with `config` drawing exploration noise from `rng`.
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: EngineConfig, rng: R) -> Self {
        let memory = MoveMemory::new(config.history_len, config.memory_capacity);
        Self {
            config,
            memory,
            rng,
            nodes: 0,
            last: None,
        }
    }

    /// Chooses a move for the side to move in `pos`.
    ///
    /// The position is searched in place and handed back unchanged. The
    /// chosen move's score is folded into the move memory and its notation
    /// appended to the decision history.
    ///
    /// Fails with [`EngineError::NoLegalMoves`] if there is nothing to play,
    /// and with [`EngineError::Adapter`] if the rules engine rejects an apply
    /// or undo.
    pub fn choose_move<P>(&mut self, pos: &mut P) -> Result<P::Move, EngineError>
    where
        P: RulesAdapter + ?Sized,
    {
        self.nodes = 0;
        let outcome = pick_best_move(
            pos,
            &self.config,
            &self.memory,
            &mut self.rng,
            &mut self.nodes,
        )?;

        self.memory.update(&outcome.notation, f64::from(outcome.score));
        self.memory.record_history(&outcome.notation);

        debug!(
            best = %outcome.notation,
            score = outcome.score,
            nodes = self.nodes,
            remembered = self.memory.len(),
            "move chosen"
        );

        self.last = Some(SearchReport {
            best_move: outcome.notation,
            score: outcome.score,
            depth: self.config.depth,
            nodes: self.nodes,
        });
        Ok(outcome.best_move)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn memory(&self) -> &MoveMemory {
        &self.memory
    }

    pub fn last_search(&self) -> Option<&SearchReport> {
        self.last.as_ref()
    }

    /// Sets a UCI-style option. Returns true if the option was recognized and
    /// its value accepted.
    pub fn set_option(&mut self, name: &str, value: &str) -> bool {
        let mut next = self.config.clone();
        let parsed = match name.to_ascii_lowercase().as_str() {
            "depth" => value.parse().map(|d| next.depth = d).is_ok(),
            "explorationrate" => value.parse().map(|r| next.exploration_rate = r).is_ok(),
            "strategy" => match value.to_ascii_lowercase().as_str() {
                "capture_extended" | "captureextended" => {
                    next.strategy = SearchStrategy::CaptureExtended;
                    true
                }
                "fixed_depth" | "fixeddepth" => {
                    next.strategy = SearchStrategy::FixedDepth;
                    true
                }
                _ => false,
            },
            "perspective" => match value.to_ascii_lowercase().as_str() {
                "fixed" => {
                    next.perspective = Perspective::Fixed;
                    true
                }
                "side_to_move" | "sidetomove" => {
                    next.perspective = Perspective::SideToMove;
                    true
                }
                _ => false,
            },
            _ => false,
        };
        if !parsed || next.validate().is_err() {
            return false;
        }
        self.config = next;
        true
    }

    pub fn name(&self) -> &str {
        "Adaptive v1.0"
    }

    pub fn author(&self) -> &str {
        "ML-chess"
    }

    /// Resets per-game statistics. Move memory carries over between games.
    pub fn new_game(&mut self) {
        self.nodes = 0;
        self.last = None;
    }

    /// Forgets all remembered scores and history.
    pub fn clear_memory(&mut self) {
        self.memory.clear();
    }
}
