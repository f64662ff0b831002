//! JSON file leaderboard storage.
//!
//! One file per storage key, `<data_dir>/<key>.json`. Writes land in a
//! sibling temporary file first and are renamed into place, so readers only
//! ever see a complete board.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::{GameConfig, StoreError};

use super::board::Leaderboard;
use super::store::{decode, encode, LeaderboardStore};

/// Leaderboard persisted as a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    capacity: usize,
}

impl JsonFileStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        assert!(capacity > 0, "Leaderboard must hold at least 1 entry");
        Self {
            path: path.into(),
            capacity,
        }
    }

    /// Store at the location named by the configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.leaderboard_path(), config.capacity)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
        move |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl LeaderboardStore for JsonFileStore {
    fn load(&self) -> Leaderboard {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("{:<32}{}", "no leaderboard yet at", self.path.display());
                return Leaderboard::new(self.capacity);
            }
            Err(e) => {
                log::warn!("{:<32}{} ({})", "unreadable leaderboard", self.path.display(), e);
                return Leaderboard::new(self.capacity);
            }
        };
        match decode(&raw, self.capacity) {
            Ok(board) => board,
            Err(e) => {
                log::warn!("{:<32}{} ({})", "malformed leaderboard", self.path.display(), e);
                Leaderboard::new(self.capacity)
            }
        }
    }

    fn save(&mut self, board: &Leaderboard) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(Self::io_error(dir))?;
        }
        let staging = self.staging_path();
        std::fs::write(&staging, encode(board)?).map_err(Self::io_error(&staging))?;
        std::fs::rename(&staging, &self.path).map_err(Self::io_error(&self.path))?;
        log::debug!("{:<32}{}", "saved leaderboard", self.path.display());
        Ok(())
    }
}
