//! CLI Configuration

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use registro_core::{Identity, Person};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// JSON file holding the known profiles.
    pub people_path: Option<PathBuf>,
    /// Print JSON instead of tables.
    pub json: bool,
}

impl CliConfig {
    /// Loads the known profiles.
    pub fn load_people(&self) -> Result<Vec<Person>> {
        let Some(path) = &self.people_path else {
            bail!("No profile file given. Use --people <FILE> or set REGISTRO_PEOPLE.");
        };
        let people: Vec<Person> = read_json(path)?;
        debug!(count = people.len(), path = %path.display(), "loaded profiles");
        Ok(people)
    }
}

/// Loads a single identity record.
pub fn load_identity(path: &Path) -> Result<Identity> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Invalid JSON in {}", path.display()))
}
