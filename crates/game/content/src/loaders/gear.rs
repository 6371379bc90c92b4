//! Gear catalog loader.

use std::path::Path;

use angler_core::Gear;

use crate::loaders::{LoadResult, read_file};

/// Loader for the gear catalog from RON files.
pub struct GearLoader;

impl GearLoader {
    /// Load gear from a RON file.
    ///
    /// RON format: `Vec<(String, Gear)>`, keyed by gear id.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, Gear)>> {
        let content = read_file(path)?;
        let gear: Vec<(String, Gear)> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse gear RON: {}", e))?;
        Ok(gear)
    }
}
