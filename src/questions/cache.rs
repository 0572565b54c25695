//! Explicit question bank cache.
//!
//! Entries are keyed by canonical path and remember the file's modification
//! time; a changed file is reloaded on the next lookup. Nothing is cached
//! process-wide: callers own the cache and decide when to invalidate it.

use super::loader::load_question_bank;
use super::QuestionBank;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::debug;

#[derive(Debug, Clone)]
struct CachedBank {
    modified: Option<SystemTime>,
    bank: Arc<QuestionBank>,
}

#[derive(Debug, Default)]
pub struct QuestionCache {
    entries: HashMap<PathBuf, CachedBank>,
}

impl QuestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached bank for `path`, loading it when absent or stale.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<QuestionBank>> {
        let key = fs::canonicalize(path)
            .with_context(|| format!("Failed to resolve question bank {}", path.display()))?;
        let modified = fs::metadata(&key).and_then(|m| m.modified()).ok();

        if let Some(entry) = self.entries.get(&key) {
            if entry.modified.is_some() && entry.modified == modified {
                debug!(path = %key.display(), "question bank cache hit");
                return Ok(Arc::clone(&entry.bank));
            }
        }

        debug!(path = %key.display(), "loading question bank");
        let bank = Arc::new(load_question_bank(&key)?);
        self.entries.insert(
            key,
            CachedBank {
                modified,
                bank: Arc::clone(&bank),
            },
        );
        Ok(bank)
    }

    /// Drop the entry for `path`. Returns whether one existed.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.entries.remove(&key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    const BANK: &str = r#"
[[question]]
profile = "Company"
block = "Access"
text = "Is MFA enforced?"
weight = 1
recommendation = "Enforce MFA."
"#;

    fn bank_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(BANK.as_bytes()).unwrap();
        file
    }

    #[test]
    fn second_lookup_reuses_the_loaded_bank() {
        let file = bank_file();
        let mut cache = QuestionCache::new();

        let first = cache.get_or_load(file.path()).unwrap();
        let second = cache.get_or_load(file.path()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalidate_forces_a_reload() {
        let file = bank_file();
        let mut cache = QuestionCache::new();

        let first = cache.get_or_load(file.path()).unwrap();
        assert!(cache.invalidate(file.path()));
        assert!(cache.is_empty());

        let second = cache.get_or_load(file.path()).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn changed_modification_time_reloads_the_bank() {
        let file = bank_file();
        let mut cache = QuestionCache::new();
        let first = cache.get_or_load(file.path()).unwrap();

        fs::write(file.path(), BANK.replace("Enforce MFA.", "Enforce MFA everywhere.")).unwrap();
        let handle = fs::OpenOptions::new().write(true).open(file.path()).unwrap();
        handle
            .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000))
            .unwrap();

        let second = cache.get_or_load(file.path()).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.questions()[0].recommendation, "Enforce MFA everywhere.");
        assert_eq!(cache.len(), 1);

        let third = cache.get_or_load(file.path()).unwrap();
        assert!(Arc::ptr_eq(&second, &third));
    }

    #[test]
    fn clear_empties_the_cache() {
        let file = bank_file();
        let mut cache = QuestionCache::new();
        cache.get_or_load(file.path()).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.invalidate(file.path()));
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut cache = QuestionCache::new();
        assert!(cache.get_or_load(Path::new("/nonexistent/bank.toml")).is_err());
    }
}
