// src/state/mod.rs
use tracing::debug;

use crate::analysis::{AnalysisResult, Summary};

pub mod history;

pub use history::{HistoryEntry, SessionHistory};

pub const DEFAULT_RATING: u8 = 4;

/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Analyzed {
        result: AnalysisResult,
        summary: Summary,
    },
    Warning(String),
}

// Per-session state; lives as long as the window
#[derive(Debug)]
pub struct Session {
    pub text: String,
    pub history: SessionHistory,
    pub rating: u8,
    pub outcome: Option<Outcome>,
}

impl Session {
    pub fn new(rating: u8) -> Self {
        Self {
            text: String::new(),
            history: SessionHistory::default(),
            rating: rating.clamp(1, 5),
            outcome: None,
        }
    }

    /// Reset the input. History is kept.
    pub fn clear(&mut self) {
        self.text.clear();
        self.outcome = None;
        debug!(history_len = self.history.len(), "session cleared");
    }

    /// The shown result describes text that is no longer in the box.
    pub fn text_edited(&mut self) {
        self.outcome = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_RATING)
    }
}
