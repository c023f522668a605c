use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// A persisted record is only honored for resuming if it was saved within
/// this window.
pub const FRESHNESS_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// On-disk shape of the saved position. `total_slides` is informational;
/// validity is judged against the live deck length at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub current_slide: usize,
    pub timestamp: i64,
    pub total_slides: usize,
}

/// Single-slot progress store backed by one JSON file. Both directions fail
/// soft: a load problem means "no record", a save problem is logged and
/// dropped. Nothing here ever surfaces an error to the caller.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Store under the platform config directory, creating it if needed.
    pub fn open_default() -> Result<Self> {
        let dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .context("failed to resolve XDG config directory")?
                .join("lifecycle-deck")
        } else {
            dirs::home_dir()
                .context("failed to resolve home directory")?
                .join(".lifecycle-deck")
        };

        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create config directory: {dir:?}"))?;
            info!("created config directory: {dir:?}");
        }

        Ok(Self {
            path: dir.join("progress.json"),
        })
    }

    /// Store at an explicit file path. Used by tests and `--fresh` runs.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Resume index, or `None` if there is no usable record. Missing file,
    /// corrupt JSON, out-of-range index and stale timestamps all land in
    /// the `None` arm.
    pub fn load(&self, deck_len: usize) -> Option<usize> {
        let record = match self.read_record() {
            Ok(Some(record)) => record,
            Ok(None) => return None,
            Err(e) => {
                warn!("discarding unreadable progress record: {e:#}");
                return None;
            }
        };

        if record.current_slide >= deck_len {
            debug!(
                "discarding progress record: index {} out of range for deck of {}",
                record.current_slide, deck_len
            );
            return None;
        }

        let age_ms = Utc::now().timestamp_millis() - record.timestamp;
        if age_ms >= FRESHNESS_WINDOW_MS {
            debug!("discarding progress record saved {age_ms}ms ago");
            return None;
        }

        debug!("resuming at slide index {}", record.current_slide);
        Some(record.current_slide)
    }

    /// Best-effort save. Called on every index change; errors are logged
    /// here and never propagated.
    pub fn save(&self, current_slide: usize, total_slides: usize) {
        let record = ProgressRecord {
            current_slide,
            timestamp: Utc::now().timestamp_millis(),
            total_slides,
        };
        if let Err(e) = self.write_record(&record) {
            warn!("failed to persist progress: {e:#}");
        }
    }

    fn read_record(&self) -> Result<Option<ProgressRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read progress file: {:?}", self.path))?;
        let record = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse progress file: {:?}", self.path))?;
        Ok(Some(record))
    }

    fn write_record(&self, record: &ProgressRecord) -> Result<()> {
        let content =
            serde_json::to_string(record).context("failed to serialize progress record")?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write progress file: {:?}", self.path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(name: &str) -> ProgressStore {
        let path = std::env::temp_dir().join(format!(
            "lifecycle-deck-test-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        ProgressStore::at(path)
    }

    #[test]
    fn round_trip_resumes_saved_index() {
        let store = scratch_store("round-trip");
        store.save(3, 8);
        assert_eq!(store.load(8), Some(3));
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn missing_file_yields_no_record() {
        let store = scratch_store("missing");
        assert_eq!(store.load(8), None);
    }

    #[test]
    fn out_of_range_index_is_discarded() {
        let store = scratch_store("out-of-range");
        store.save(99, 8);
        assert_eq!(store.load(8), None);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn corrupt_json_is_discarded() {
        let store = scratch_store("corrupt");
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load(8), None);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn stale_record_is_discarded() {
        let store = scratch_store("stale");
        let record = ProgressRecord {
            current_slide: 3,
            timestamp: Utc::now().timestamp_millis() - FRESHNESS_WINDOW_MS - 1,
            total_slides: 8,
        };
        fs::write(store.path(), serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(store.load(8), None);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn stored_total_slides_is_informational_only() {
        let store = scratch_store("total-mismatch");
        store.save(2, 12); // saved against a larger deck
        assert_eq!(store.load(8), Some(2));
        let _ = fs::remove_file(store.path());
    }
}
