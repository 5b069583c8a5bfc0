//! Last-pattern persistence cache
//!
//! Best-effort caching of the most recently loaded pattern text so a new
//! session can restore it. A missing cache is not an error and a failed
//! write is only logged; nothing here is allowed to break the editor.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::types::Result;
use crate::cube::store::CubeStore;
use crate::io::loader::{load_pattern_str, LoadKind};

/// Fixed cache file name
pub const CACHE_FILE_NAME: &str = "cached_pattern.json";

/// File-backed pattern cache at a fixed path
#[derive(Clone, Debug)]
pub struct PatternCache {
    path: PathBuf,
}

impl PatternCache {
    /// Cache at an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Cache file inside the given directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CACHE_FILE_NAME))
    }

    /// Cache file under the user cache directory, when one exists
    pub fn in_user_cache_dir() -> Option<Self> {
        dirs::cache_dir().map(|dir| Self::in_dir(dir.join("logocube")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the raw pattern text. Best effort: failures are logged and
    /// swallowed.
    pub fn save_last_pattern(&self, json: &str) {
        if let Err(e) = self.try_save(json) {
            log::warn!("failed to cache pattern at {}: {e}", self.path.display());
        }
    }

    fn try_save(&self, json: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)
    }

    /// Check whether a cached pattern exists
    pub fn has_cached_pattern(&self) -> bool {
        self.path.exists()
    }

    /// Restore the cached pattern into the store, if one exists.
    ///
    /// Returns whether a pattern was loaded. Absence of a cache is a
    /// quiet `false`; a present-but-broken cache is logged.
    pub fn load_last_pattern(&self, store: &mut CubeStore) -> bool {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return false,
            Err(e) => {
                log::warn!("failed to read cached pattern at {}: {e}", self.path.display());
                return false;
            }
        };

        match load_pattern_str(store, &json) {
            Ok(kind) => {
                log::info!("restored cached pattern ({kind:?})");
                true
            }
            Err(e) => {
                log::error!("cached pattern failed to load: {e}");
                false
            }
        }
    }

    /// Load pattern text and, on success, remember it in the cache
    pub fn load_and_remember(&self, store: &mut CubeStore, json: &str) -> Result<LoadKind> {
        let kind = load_pattern_str(store, json)?;
        self.save_last_pattern(json);
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::pattern::export_pattern;
    use crate::pattern::Pattern;

    #[test]
    fn test_missing_cache_is_quiet_noop() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PatternCache::in_dir(dir.path());
        let mut store = CubeStore::default();
        let revision = store.revision();

        assert!(!cache.has_cached_pattern());
        assert!(!cache.load_last_pattern(&mut store));
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PatternCache::in_dir(dir.path());

        let mut source = CubeStore::default();
        source.apply_pattern(Pattern::Sphere);
        let json = serde_json::to_string(&export_pattern(&source)).unwrap();
        cache.save_last_pattern(&json);
        assert!(cache.has_cached_pattern());

        let mut store = CubeStore::new(5);
        assert!(cache.load_last_pattern(&mut store));
        assert_eq!(store.cubes(), source.cubes());
    }

    #[test]
    fn test_load_and_remember_caches_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PatternCache::in_dir(dir.path());

        let source = CubeStore::default();
        let json = serde_json::to_string(&export_pattern(&source)).unwrap();

        let mut store = CubeStore::new(5);
        assert!(cache.load_and_remember(&mut store, &json).is_ok());
        assert!(cache.has_cached_pattern());

        // A rejected document must not overwrite the cache
        let mut other = CubeStore::new(5);
        assert!(cache.load_and_remember(&mut other, r#"{"foo": 1}"#).is_err());
        let mut restored = CubeStore::new(5);
        assert!(cache.load_last_pattern(&mut restored));
        assert_eq!(restored.cubes(), source.cubes());
    }

    #[test]
    fn test_broken_cache_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PatternCache::in_dir(dir.path());
        cache.save_last_pattern("{broken");

        let mut store = CubeStore::default();
        assert!(!cache.load_last_pattern(&mut store));
    }
}
