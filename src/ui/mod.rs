// src/ui/mod.rs
pub mod cloud;
pub mod header;
pub mod history;
pub mod input;
pub mod rating;
pub mod summary;
