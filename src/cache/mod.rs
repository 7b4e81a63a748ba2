use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Two-tier JSON file cache: raw API responses keyed by tab name, plus
/// parsed snapshots keyed by report name. Lets every report run offline
/// after an ingest.
pub struct Cache {
    raw_dir: PathBuf,
    parsed_dir: PathBuf,
}

impl Cache {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        let raw_dir = cache_dir.join("raw");
        let parsed_dir = cache_dir.join("parsed");

        fs::create_dir_all(&raw_dir).context("Failed to create raw cache directory")?;
        fs::create_dir_all(&parsed_dir).context("Failed to create parsed cache directory")?;

        Ok(Self {
            raw_dir,
            parsed_dir,
        })
    }

    /// Save a raw API response under a tab name.
    pub fn save_raw(&self, tab: &str, data: &Value) -> Result<()> {
        let file_path = self.raw_path(tab);
        self.write_json(&file_path, data)?;
        info!("Saved raw tab to cache: {}", file_path.display());
        Ok(())
    }

    pub fn load_raw(&self, tab: &str) -> Result<Option<Value>> {
        self.read_json_opt(&self.raw_path(tab))
    }

    /// Save a parsed snapshot under a report key.
    pub fn save_parsed<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = self.parsed_path(key);
        self.write_json(&file_path, data)?;
        info!("Saved parsed snapshot to cache: {}", file_path.display());
        Ok(())
    }

    pub fn load_parsed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        self.read_json_opt(&self.parsed_path(key))
    }

    // --- Helper Methods ---

    fn raw_path(&self, tab: &str) -> PathBuf {
        self.raw_dir.join(format!("{}.json", sanitize_key(tab)))
    }

    fn parsed_path(&self, key: &str) -> PathBuf {
        self.parsed_dir.join(format!("{}.json", sanitize_key(key)))
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
        fs::write(path, json).context("Failed to write cache file")?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path).context("Failed to read cache file")?;
        let data = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse cached JSON from {:?}", path))?;
        Ok(Some(data))
    }
}

/// Tab names ("Week 3", "Race_Results") become filesystem-safe keys.
fn sanitize_key(key: &str) -> String {
    key.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
