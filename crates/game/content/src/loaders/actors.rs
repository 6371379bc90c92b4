//! Actor catalog loader.
//!
//! Loads species templates (player included) from RON files.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::templates::ActorTemplate;

/// Loader for actor catalog from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load actor catalog from a RON file.
    ///
    /// RON format: `Vec<(String, ActorTemplate)>`, keyed by species id.
    /// Species ids must be unique.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let content = read_file(path)?;
        let actors: Vec<(String, ActorTemplate)> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        let mut seen = std::collections::BTreeSet::new();
        for (kind, template) in &actors {
            if !seen.insert(kind.as_str()) {
                anyhow::bail!("Duplicate actor id '{}' in {}", kind, path.display());
            }
            let damage = template
                .weapon
                .map_or((template.stats.min_damage, template.stats.max_damage), |w| {
                    (w.min, w.max)
                });
            if damage.0 > damage.1 {
                anyhow::bail!(
                    "Actor '{}' has min damage {} above max damage {}",
                    kind,
                    damage.0,
                    damage.1
                );
            }
        }

        Ok(actors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::BehaviorSpec;
    use std::io::Write;

    fn write(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_species_with_defaults() {
        let file = write(
            r#"[
                ("goldfish", (
                    name: "Goldfish",
                    color: (255, 215, 0),
                    stats: (hp: 8, max_hp: 8, min_damage: 1, max_damage: 8, difficulty: 60),
                    behavior: Goldfish(rare_kin: "great_goldfish"),
                )),
                ("rock", (name: "Rock", stats: ())),
            ]"#,
        );

        let actors = ActorLoader::load(file.path()).unwrap();
        assert_eq!(actors.len(), 2);
        let (kind, goldfish) = &actors[0];
        assert_eq!(kind, "goldfish");
        assert_eq!(goldfish.stats.difficulty, 60);
        assert_eq!(
            goldfish.behavior,
            BehaviorSpec::Goldfish {
                rare_kin: "great_goldfish".into()
            }
        );
        assert!(actors[1].1.blocks_movement);
        assert_eq!(actors[1].1.behavior, BehaviorSpec::Idle);
    }

    #[test]
    fn loaded_meters_are_clamped() {
        let file = write(
            r#"[
                ("eel", (name: "Eel", stats: (fatigue: 500, hooked: -40))),
                ("carp", (name: "Carp", stats: (fatigue: 35, hooked: 100))),
            ]"#,
        );

        let actors = ActorLoader::load(file.path()).unwrap();
        let eel = &actors[0].1.stats;
        assert_eq!((eel.fatigue(), eel.hooked()), (100, 0));
        let carp = &actors[1].1.stats;
        assert_eq!((carp.fatigue(), carp.hooked()), (35, 100));
    }

    #[test]
    fn rejects_duplicates_and_bad_ranges() {
        let file = write(r#"[("a", (name: "A", stats: ())), ("a", (name: "B", stats: ()))]"#);
        assert!(ActorLoader::load(file.path()).is_err());

        let file = write(r#"[("a", (name: "A", stats: (min_damage: 5, max_damage: 2)))]"#);
        let error = ActorLoader::load(file.path()).unwrap_err();
        assert!(error.to_string().contains("min damage"));
    }
}
