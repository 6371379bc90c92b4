//! Game configuration loader.

use std::path::Path;

use angler_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] value.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.diagonal_cost <= config.cardinal_cost {
            anyhow::bail!(
                "diagonal_cost ({}) must exceed cardinal_cost ({})",
                config.diagonal_cost,
                config.cardinal_cost
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "occupancy_penalty = 4\nstruggle_fatigue = [2, 3]").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.occupancy_penalty, 4);
        assert_eq!(config.struggle_fatigue, (2, 3));
        assert_eq!(config.flee_min_distance, GameConfig::DEFAULT_FLEE_MIN_DISTANCE);
    }

    #[test]
    fn cheap_diagonals_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "diagonal_cost = 2").unwrap();
        assert!(ConfigLoader::load(file.path()).is_err());
    }
}
