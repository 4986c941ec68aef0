//! Persisted abstraction cache.
//!
//! Re-running the abstraction model over an unchanged corpus is the
//! expensive no-op of this pipeline, so abstracts are cached next to a
//! corpus fingerprint: the blake3 hash of every chunk, length-prefixed.
//! Any content change — even one preserving the chunk count — changes
//! the fingerprint and invalidates the cache.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use lectern_core::errors::{LecternResult, PipelineError};

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    fingerprint: String,
    abstracts: Vec<String>,
}

/// File-backed cache of one corpus' abstracts.
pub struct AbstractCache {
    path: PathBuf,
}

impl AbstractCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Blake3 fingerprint of the chunk corpus. Chunks are length-prefixed
    /// so `["ab", "c"]` and `["a", "bc"]` hash differently.
    pub fn fingerprint(chunks: &[String]) -> String {
        let mut hasher = blake3::Hasher::new();
        for chunk in chunks {
            hasher.update(&(chunk.len() as u64).to_le_bytes());
            hasher.update(chunk.as_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }

    /// Cached abstracts for this exact corpus, if any. A missing file, a
    /// stale-format file, or a fingerprint mismatch is a miss, never an
    /// error — the caller just recomputes.
    pub fn lookup(&self, fingerprint: &str) -> Option<Vec<String>> {
        if !self.path.exists() {
            return None;
        }
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "abstraction cache unreadable, recomputing");
                return None;
            }
        };
        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "abstraction cache stale format, recomputing");
                return None;
            }
        };
        if entry.fingerprint != fingerprint {
            debug!(path = %self.path.display(), "corpus changed, abstraction cache invalidated");
            return None;
        }
        Some(entry.abstracts)
    }

    /// Persist abstracts for the given corpus fingerprint.
    pub fn save(&self, fingerprint: &str, abstracts: &[String]) -> LecternResult<()> {
        let entry = CacheEntry {
            fingerprint: fingerprint.to_string(),
            abstracts: abstracts.to_vec(),
        };
        let json = serde_json::to_string_pretty(&entry).map_err(|e| self.err(e))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.err(e))?;
            }
        }
        std::fs::write(&self.path, json).map_err(|e| self.err(e))?;
        Ok(())
    }

    fn err(&self, e: impl std::fmt::Display) -> lectern_core::errors::LecternError {
        PipelineError::Cache {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fingerprint_sensitive_to_content_not_just_count() {
        let a = AbstractCache::fingerprint(&chunks(&["alpha", "beta"]));
        let b = AbstractCache::fingerprint(&chunks(&["alpha", "bets"]));
        assert_ne!(a, b);
    }

    #[test]
    fn fingerprint_sensitive_to_boundaries() {
        let a = AbstractCache::fingerprint(&chunks(&["ab", "c"]));
        let b = AbstractCache::fingerprint(&chunks(&["a", "bc"]));
        assert_ne!(a, b);
    }

    #[test]
    fn save_then_lookup_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = AbstractCache::new(dir.path().join("abstracts.json"));
        let fp = AbstractCache::fingerprint(&chunks(&["one", "two"]));

        assert!(cache.lookup(&fp).is_none());
        cache.save(&fp, &chunks(&["s1", "s2"])).unwrap();
        assert_eq!(cache.lookup(&fp), Some(chunks(&["s1", "s2"])));
    }

    #[test]
    fn mismatched_fingerprint_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = AbstractCache::new(dir.path().join("abstracts.json"));
        cache.save("fp-old", &chunks(&["s1"])).unwrap();
        assert!(cache.lookup("fp-new").is_none());
    }

    #[test]
    fn stale_format_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abstracts.json");
        // A legacy cache file holding a bare array, no fingerprint.
        std::fs::write(&path, r#"["s1", "s2"]"#).unwrap();
        let cache = AbstractCache::new(&path);
        assert!(cache.lookup("anything").is_none());
    }
}
