// src/state/history.rs
use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::analysis::{round3, AnalysisResult, Label};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How many entries the recent list shows.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    id: Uuid,
    text: String,
    score: f64,
    label: Label,
    timestamp: String,
}

impl HistoryEntry {
    pub fn new(text: &str, result: &AnalysisResult, at: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            score: round3(result.polarity()),
            label: result.label(),
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Append-only log of the session's analyses, oldest first.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Up to `limit` entries, most recent first.
    pub fn recent(&self, limit: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    pub fn list_recent(&self) -> Vec<&HistoryEntry> {
        self.recent(RECENT_LIMIT)
    }
}
