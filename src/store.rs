//! Persisted UI state: one JSON document with externally fixed keys.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::StoreError;
use crate::game::RoundSnapshot;

/// Values held by the snapshot document.
///
/// The key names are fixed by the original storage contract; the serde
/// renames pin them against field renames.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize, new)]
pub struct StoredState {
    /// The persisted round, if a game has been played.
    #[serde(rename = "GameState", default)]
    game_state: Option<RoundSnapshot>,
    /// When the last round ended.
    #[serde(rename = "LastRoundTimestamp", default)]
    last_round: Option<DateTime<Utc>>,
}

/// JSON-file persistence for the explorer's UI state.
///
/// Writes are atomic (temp file + rename) so a crash never leaves a
/// half-written document. Reads fail fast on malformed JSON instead of
/// coercing bad data into a running game.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    file_path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store over the given file path.
    #[instrument(skip(file_path))]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        debug!(path = %file_path.display(), "Snapshot store created");
        Self { file_path }
    }

    /// The backing file path.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Loads the persisted state.
    ///
    /// An absent file is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the file cannot be read or does not parse
    /// as the expected document.
    #[instrument(skip(self), fields(path = %self.file_path.display()))]
    pub fn load(&self) -> Result<Option<StoredState>, StoreError> {
        if !self.file_path.exists() {
            debug!("No snapshot on disk");
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.file_path)?;
        let state: StoredState = serde_json::from_str(&contents)
            .map_err(|e| StoreError::new(format!("Malformed snapshot: {}", e)))?;
        info!("Snapshot loaded");
        Ok(Some(state))
    }

    /// Saves the state atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when serialization or the write fails.
    #[instrument(skip(self, state), fields(path = %self.file_path.display()))]
    pub fn save(&self, state: &StoredState) -> Result<(), StoreError> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(state)?;
        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;
        debug!("Snapshot saved");
        Ok(())
    }
}
