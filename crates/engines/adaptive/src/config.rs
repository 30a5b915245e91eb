//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! depth = 3
//! strategy = "capture_extended"
//! capture_depth = "bounded"
//! perspective = "fixed"
//! exploration_rate = 0.1
//! exploration_magnitude = 200.0
//! history_len = 5
//! memory_capacity = 4096
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::EngineError;
use crate::memory::DEFAULT_HISTORY_LEN;
use crate::ordering::Exploration;

/// Deepest search the engine accepts.
pub const MAX_DEPTH: u8 = 8;

/// How each root move is scored once it has been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Stand-pat plus captures only, below the root.
    #[default]
    CaptureExtended,
    /// Full-width minimax with alpha-beta to `depth - 1` plies.
    FixedDepth,
}

/// Whether the capture search honours its depth argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureDepth {
    /// Captures stop being explored once depth reaches 0.
    #[default]
    Bounded,
    /// Depth is threaded but ignored; recursion ends when captures run out.
    Unbounded,
}

/// Which side the capture search's stand-pat score is measured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
    /// The evaluator's White-relative score, used unchanged at every ply.
    #[default]
    Fixed,
    /// The evaluator's score turned to the side to move at each node.
    SideToMove,
}

/// Tunable engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Nominal search depth in plies; the root searches replies at `depth - 1`
    pub depth: u8,
    pub strategy: SearchStrategy,
    pub capture_depth: CaptureDepth,
    pub perspective: Perspective,
    /// Chance that a move's ordering key gets a random nudge
    pub exploration_rate: f64,
    /// Nudges are drawn uniformly from `[-magnitude, magnitude]`
    pub exploration_magnitude: f64,
    /// Number of recent decisions remembered
    pub history_len: usize,
    /// Bound on remembered move notations (None = unbounded)
    pub memory_capacity: Option<usize>,
    /// RNG seed for reproducible ordering (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            strategy: SearchStrategy::default(),
            capture_depth: CaptureDepth::default(),
            perspective: Perspective::default(),
            exploration_rate: 0.1,
            exploration_magnitude: 200.0,
            history_len: DEFAULT_HISTORY_LEN,
            memory_capacity: None,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parses and validates TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(EngineError::Config(format!(
                "depth {} is outside [1, {MAX_DEPTH}]",
                self.depth
            )));
        }
        if !(0.0..=1.0).contains(&self.exploration_rate) {
            return Err(EngineError::Config(format!(
                "exploration_rate {} is outside [0, 1]",
                self.exploration_rate
            )));
        }
        if !self.exploration_magnitude.is_finite() || self.exploration_magnitude < 0.0 {
            return Err(EngineError::Config(format!(
                "exploration_magnitude {} must be finite and non-negative",
                self.exploration_magnitude
            )));
        }
        if self.history_len == 0 {
            return Err(EngineError::Config("history_len must be at least 1".into()));
        }
        if self.memory_capacity == Some(0) {
            return Err(EngineError::Config(
                "memory_capacity must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }

    pub fn exploration(&self) -> Exploration {
        Exploration {
            rate: self.exploration_rate,
            magnitude: self.exploration_magnitude,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
