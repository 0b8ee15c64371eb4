//! World store - an explicit load/commit repository over one YAML document.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use sengoku_rules::{World, WorldError};
use thiserror::Error;

/// Errors from loading or saving the world document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read world store {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("world store {path} is not a valid world document: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("world store {path} failed validation: {source}")]
    Invalid { path: PathBuf, source: WorldError },
    #[error("failed to write world store {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize world document: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Repository for the world document.
///
/// The document is loaded wholesale at startup and written back wholesale at
/// commit; there is no partial persistence. The store is not safe against
/// concurrent sessions on the same file - last commit wins.
pub struct WorldStore {
    path: PathBuf,
}

impl WorldStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the world document.
    pub fn load(&self) -> Result<World, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let world: World = serde_yaml::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        world.validate().map_err(|source| StoreError::Invalid {
            path: self.path.clone(),
            source,
        })?;
        info!(
            "loaded world store {} ({} characters, {} provinces)",
            self.path.display(),
            world.characters.len(),
            world.provinces.len()
        );
        Ok(world)
    }

    /// Write the world document back.
    ///
    /// The document goes to a sibling temp file first and is renamed into
    /// place, so a crash mid-write leaves the previous save intact.
    pub fn commit(&self, world: &World) -> Result<(), StoreError> {
        let raw = serde_yaml::to_string(world)?;
        let tmp = self.path.with_extension("tmp");
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        fs::write(&tmp, raw).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        debug!("committed world store {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sengoku_rules::Province;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn sample_world() -> World {
        let mut world = World::new();
        world.attributes = vec!["str".to_string(), "wit".to_string()];
        world.family_names = vec!["Oda".to_string()];
        world.provinces.insert(
            "Kyoto".to_string(),
            Province {
                baseline: BTreeMap::from([("str".to_string(), 5.0)]),
                ..Default::default()
            },
        );
        world
    }

    #[test]
    fn test_commit_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = WorldStore::new(dir.path().join("gamedata.yaml"));

        store.commit(&sample_world()).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.attributes, vec!["str", "wit"]);
        assert_eq!(loaded.family_names, vec!["Oda"]);
        assert!(loaded.provinces.contains_key("Kyoto"));
    }

    #[test]
    fn test_document_keeps_historical_keys() {
        let dir = TempDir::new().unwrap();
        let store = WorldStore::new(dir.path().join("gamedata.yaml"));

        store.commit(&sample_world()).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();

        assert!(raw.contains("family-names"));
        assert!(raw.contains("players"));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let store = WorldStore::new(dir.path().join("absent.yaml"));
        assert!(matches!(store.load(), Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gamedata.yaml");
        fs::write(&path, "attributes: {not: [a, world]}").unwrap();

        let store = WorldStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_commit_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = WorldStore::new(dir.path().join("gamedata.yaml"));

        store.commit(&sample_world()).unwrap();
        assert!(!dir.path().join("gamedata.tmp").exists());
    }
}
