use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based cache for reference feeds (standards tables).
///
/// Entries are written once after a successful fetch and only read back
/// afterwards; results feeds are never cached.
pub struct Cache {
    cache_dir: PathBuf,
    raw_dir: PathBuf,
}

impl Cache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        let raw_dir = cache_dir.join("raw");

        fs::create_dir_all(&raw_dir).context("Failed to create raw cache directory")?;

        Ok(Self { cache_dir, raw_dir })
    }

    /// Save a raw feed to cache
    pub fn save_raw(&self, key: &str, data: &Value) -> Result<()> {
        let file_path = self.build_raw_path(key);
        self.write_json(&file_path, data)?;
        info!("Saved raw data to cache: {}", file_path.display());
        Ok(())
    }

    /// Load a raw feed from cache
    pub fn load_raw(&self, key: &str) -> Result<Option<Value>> {
        let file_path = self.build_raw_path(key);
        let value = self.read_json_opt(&file_path)?;
        if value.is_some() {
            debug!("Loaded raw data from cache: {}", file_path.display());
        }
        Ok(value)
    }

    /// Check if a raw feed is cached
    pub fn exists(&self, key: &str) -> bool {
        self.build_raw_path(key).exists()
    }

    /// Clear all cached data
    pub fn clear(&self) -> Result<()> {
        fs::remove_dir_all(&self.cache_dir).context("Failed to clear cache")?;
        fs::create_dir_all(&self.raw_dir).context("Failed to recreate cache directory")?;

        info!("Cleared cache directory");
        Ok(())
    }

    // --- Helper Methods ---

    fn build_raw_path(&self, key: &str) -> PathBuf {
        let file_name = key.trim_end_matches(".json").replace(['/', '\\'], "_");
        self.raw_dir.join(format!("{}.json", file_name))
    }

    fn write_json(&self, path: &Path, data: &Value) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json).context("Failed to write cache file")?;
        Ok(())
    }

    fn read_json_opt(&self, path: &Path) -> Result<Option<Value>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cache_save_and_load_raw() {
        let temp_dir = std::env::temp_dir().join("swim_standards_test_cache");
        let cache = Cache::new(&temp_dir).unwrap();
        cache.clear().unwrap();

        let feed = json!({ "Girls": { "12": { "SCY": { "FR": { "50": { "CUT": "30.09" } } } } } });

        assert!(cache.load_raw("agc_25_girls.json").unwrap().is_none());
        cache.save_raw("agc_25_girls.json", &feed).unwrap();

        assert!(cache.exists("agc_25_girls.json"));
        assert_eq!(cache.load_raw("agc_25_girls.json").unwrap(), Some(feed));

        // Cleanup
        cache.clear().unwrap();
        assert!(!cache.exists("agc_25_girls.json"));
    }

    #[test]
    fn test_corrupt_cache_entry_is_an_error() {
        let temp_dir = std::env::temp_dir().join("swim_standards_test_cache_corrupt");
        let cache = Cache::new(&temp_dir).unwrap();

        fs::write(temp_dir.join("raw").join("broken.json"), "{ not json").unwrap();
        assert!(cache.load_raw("broken.json").is_err());

        cache.clear().unwrap();
    }
}
