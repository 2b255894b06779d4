use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};

/// Fallback model identifier when no configuration is persisted
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Selectable models, paired with their provider-qualified identifiers
pub const MODEL_CATALOG: &[(&str, &str)] = &[
    ("gpt-4o", "openai:gpt-4o"),
    ("gpt-4o-mini", "openai:gpt-4o-mini"),
    ("gpt-5", "openai:gpt-5"),
];

/// Persisted model selection, stored as `model_config.json`
///
/// The store is an external collaborator: the pipeline only reads
/// `default_model` from it and falls back to [`DEFAULT_MODEL`] when the file
/// is absent or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "fallback_model")]
    pub default_model: String,
}

fn fallback_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            default_model: fallback_model(),
        }
    }
}

impl ModelConfig {
    /// Loads the configuration from a JSON file, tolerating absence and
    /// malformed content
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("malformed model configuration {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Persists the configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CorpusError::Config(format!("{}", e)))?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = ModelConfig::load(&dir.path().join("model_config.json"));
        assert_eq!(config.default_model, DEFAULT_MODEL);
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model_config.json");
        fs::write(&path, "{ not json").unwrap();
        let config = ModelConfig::load(&path);
        assert_eq!(config.default_model, DEFAULT_MODEL);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model_config.json");

        let config = ModelConfig {
            default_model: "gpt-5".to_string(),
        };
        config.save(&path).unwrap();

        assert_eq!(ModelConfig::load(&path), config);
    }

    #[test]
    fn test_missing_key_uses_serde_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model_config.json");
        fs::write(&path, "{}").unwrap();
        let config = ModelConfig::load(&path);
        assert_eq!(config.default_model, DEFAULT_MODEL);
    }

    #[test]
    fn test_catalog_contains_fallback() {
        assert!(MODEL_CATALOG.iter().any(|(name, _)| *name == DEFAULT_MODEL));
    }
}
