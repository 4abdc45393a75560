//! # Animal Record Types

use serde::{Deserialize, Serialize};

/// A single animal as served by the API and stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalRecord {
    /// Stringified list position at insertion time
    pub id: String,
    pub name: String,
    pub species: String,
    pub diet: String,
    pub personality_traits: Vec<String>,
}

impl AnimalRecord {
    pub fn has_trait(&self, personality_trait: &str) -> bool {
        self.personality_traits.iter().any(|t| t == personality_trait)
    }
}

/// On-disk layout of the backing file: `{ "animals": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimalDocument {
    pub animals: Vec<AnimalRecord>,
}

impl AnimalDocument {
    pub fn new(animals: Vec<AnimalRecord>) -> Self {
        Self { animals }
    }
}
