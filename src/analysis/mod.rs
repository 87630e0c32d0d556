// src/analysis/mod.rs
pub mod analyzer;
pub mod chart;
pub mod cloud;
pub mod lexicon;
pub mod sentiment;

// Re-export commonly used types
pub use analyzer::{SessionAnalyzer, Summary};
pub use chart::PolarityBar;
pub use cloud::{CloudSettings, WordCloud};
pub use sentiment::{round3, AnalysisResult, Label};
