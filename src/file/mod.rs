// src/file/mod.rs
use anyhow::Result;
use std::path::Path;

pub mod launch_records;

pub use launch_records::LaunchRecordsHandler;

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
}
