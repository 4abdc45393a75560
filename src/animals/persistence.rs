//! # Persistence Backends
//!
//! Every save rewrites the whole record list. The JSON file backend writes
//! pretty-printed `{ "animals": [...] }` either in place or through a
//! temporary file renamed over the target.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::errors::{AnimalError, AnimalResult};
use super::record::{AnimalDocument, AnimalRecord};

/// Backend trait for the record list
pub trait Persistence: Send + Sync + std::fmt::Debug {
    /// Load the full record list
    fn load(&self) -> AnimalResult<Vec<AnimalRecord>>;

    /// Replace the stored list with `animals`
    fn save(&self, animals: &[AnimalRecord]) -> AnimalResult<()>;
}

/// How the JSON file backend replaces the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate and rewrite in place. A crash mid-write can leave a torn file.
    #[default]
    Overwrite,

    /// Write a sibling temp file, then rename it over the target.
    Atomic,
}

/// Serialize a record list the way it is stored on disk
pub fn to_document_json(animals: &[AnimalRecord]) -> AnimalResult<String> {
    let doc = AnimalDocument::new(animals.to_vec());
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// JSON file backend
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
    mode: WriteMode,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_mode(path, WriteMode::default())
    }

    pub fn with_mode(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    fn io_error(&self, e: std::io::Error) -> AnimalError {
        AnimalError::Io(format!("{}: {}", self.path.display(), e))
    }

    fn write_atomic(&self, contents: &[u8]) -> AnimalResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(contents).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

impl Persistence for JsonFileBackend {
    fn load(&self) -> AnimalResult<Vec<AnimalRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let doc: AnimalDocument = serde_json::from_str(&content).map_err(|e| {
            AnimalError::Serialization(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(doc.animals)
    }

    fn save(&self, animals: &[AnimalRecord]) -> AnimalResult<()> {
        let json = to_document_json(animals)?;

        match self.mode {
            WriteMode::Overwrite => fs::write(&self.path, json).map_err(|e| self.io_error(e)),
            WriteMode::Atomic => self.write_atomic(json.as_bytes()),
        }
    }
}

/// In-memory backend
#[derive(Debug, Default)]
pub struct MemoryBackend {
    animals: Mutex<Vec<AnimalRecord>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animals(animals: Vec<AnimalRecord>) -> Self {
        Self {
            animals: Mutex::new(animals),
        }
    }

    /// Snapshot of what was last saved
    pub fn saved(&self) -> AnimalResult<Vec<AnimalRecord>> {
        self.load()
    }
}

impl Persistence for MemoryBackend {
    fn load(&self) -> AnimalResult<Vec<AnimalRecord>> {
        let animals = self.animals.lock().map_err(|_| AnimalError::LockPoisoned)?;
        Ok(animals.clone())
    }

    fn save(&self, animals: &[AnimalRecord]) -> AnimalResult<()> {
        let mut stored = self.animals.lock().map_err(|_| AnimalError::LockPoisoned)?;
        *stored = animals.to_vec();
        Ok(())
    }
}
