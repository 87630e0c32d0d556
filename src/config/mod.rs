// src/config/mod.rs
pub mod settings;

// Re-export commonly used types
pub use settings::AppSettings;
