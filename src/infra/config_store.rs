// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes RagConfig as pretty-printed JSON.
//
//   config.json            ← optional; absent fields use defaults
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::config::RagConfig;

/// Loads and saves a RagConfig at a fixed path.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the config file. A missing file is an error here; callers
    /// that treat the file as optional should not build a store.
    pub fn load(&self) -> Result<RagConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config '{}'", self.path.display()))?;

        let config: RagConfig = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config JSON in '{}'", self.path.display()))?;

        tracing::debug!("Loaded config from '{}'", self.path.display());
        Ok(config)
    }

    /// Write `config` as pretty JSON, creating parent directories.
    pub fn save(&self, config: &RagConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(config)?)
            .with_context(|| format!("Cannot write config '{}'", self.path.display()))?;

        tracing::info!("Saved config to '{}'", self.path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir   = tempfile::tempdir().unwrap();
        let path  = dir.path().join("config.json");
        fs::write(&path, r#"{ "top_k": 2, "book_title": "Automate the Boring Stuff" }"#).unwrap();

        let config = ConfigStore::new(&path).load().unwrap();
        assert_eq!(config.top_k, 2);
        assert_eq!(config.book_title, "Automate the Boring Stuff");
        assert_eq!(config.chapters_dir, RagConfig::default().chapters_dir);
        assert_eq!(config.main_snippet_len, 1500);
    }

    #[test]
    fn test_save_then_load() {
        let dir    = tempfile::tempdir().unwrap();
        let store  = ConfigStore::new(dir.path().join("nested").join("config.json"));
        let config = RagConfig {
            top_k: 7,
            ..RagConfig::default()
        };

        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigStore::new(dir.path().join("absent.json")).load().is_err());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = ConfigStore::new(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains("Invalid config JSON"));
    }
}
