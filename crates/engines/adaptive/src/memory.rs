//! Adaptive move memory.
//!
//! A heuristic ordering hint keyed by move notation alone, so `e2e4` shares
//! one score across every position it is played from. It is not a
//! transposition table and is never consulted for a position's value.

use std::collections::{HashMap, VecDeque};

/// Default bound on the recent-decision history.
pub const DEFAULT_HISTORY_LEN: usize = 5;

#[derive(Debug, Clone, Copy)]
struct Entry {
    score: f64,
    /// Update tick, for least-recently-updated eviction.
    touched: u64,
}

/// Running score estimates per move notation, plus the most recent decisions.
#[derive(Debug, Clone)]
pub struct MoveMemory {
    scores: HashMap<String, Entry>,
    history: VecDeque<String>,
    history_len: usize,
    capacity: Option<usize>,
    tick: u64,
}

impl Default for MoveMemory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN, None)
    }
}

impl MoveMemory {
    /// Creates an empty memory.
    ///
    /// `capacity` of `None` lets the score table grow without bound. With
    /// `Some(n)`, inserting an (n+1)th notation evicts the one updated least
    /// recently.
    pub fn new(history_len: usize, capacity: Option<usize>) -> Self {
        Self {
            scores: HashMap::new(),
            history: VecDeque::with_capacity(history_len + 1),
            history_len,
            capacity,
            tick: 0,
        }
    }

    /// Current estimate for `notation`, 0 if never recorded.
    pub fn get(&self, notation: &str) -> f64 {
        self.scores.get(notation).map_or(0.0, |e| e.score)
    }

    pub fn contains(&self, notation: &str) -> bool {
        self.scores.contains_key(notation)
    }

    /// Folds `score` into the estimate for `notation`.
    ///
    /// The first score is stored as is; later ones replace the estimate with
    /// the mean of the old estimate and the new score.
    pub fn update(&mut self, notation: &str, score: f64) {
        self.tick += 1;
        let tick = self.tick;

        if let Some(entry) = self.scores.get_mut(notation) {
            entry.score = (entry.score + score) / 2.0;
            entry.touched = tick;
            return;
        }

        if let Some(cap) = self.capacity {
            while self.scores.len() >= cap {
                if !self.evict_stalest() {
                    break;
                }
            }
        }
        self.scores.insert(
            notation.to_string(),
            Entry {
                score,
                touched: tick,
            },
        );
    }

    fn evict_stalest(&mut self) -> bool {
        let stalest = self
            .scores
            .iter()
            .min_by_key(|(_, e)| e.touched)
            .map(|(k, _)| k.clone());
        match stalest {
            Some(key) => self.scores.remove(&key).is_some(),
            None => false,
        }
    }

    /// Appends a decision to the history, dropping the oldest past the bound.
    ///
    /// Nothing reads the history back when choosing moves; it is kept for
    /// inspection and reporting.
    pub fn record_history(&mut self, notation: &str) {
        self.history.push_back(notation.to_string());
        while self.history.len() > self.history_len {
            self.history.pop_front();
        }
    }

    /// Recent decisions, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// Number of notations with a stored estimate.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Forgets all estimates and history.
    pub fn clear(&mut self) {
        self.scores.clear();
        self.history.clear();
        self.tick = 0;
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
