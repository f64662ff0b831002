//! Game configuration.
//!
//! `GameConfig` gathers everything a session needs from the outside world:
//! where the leaderboard lives, how many entries it keeps, and the RNG seed.
//! The front end builds one from command-line flags; tests build one in code.

use std::path::{Path, PathBuf};

/// Number of leaderboard entries kept.
pub const DEFAULT_CAPACITY: usize = 5;

/// Well-known key the leaderboard is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "rpsLeaderboard";

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "RPS_DATA_DIR";

/// Directory used when neither a flag nor `RPS_DATA_DIR` is given.
pub const DEFAULT_DATA_DIR: &str = ".rps";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Directory holding persisted state.
    pub data_dir: PathBuf,

    /// Storage key for the leaderboard (file stem inside `data_dir`).
    pub storage_key: String,

    /// Maximum leaderboard entries (at least 1).
    pub capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self {
            seed: None,
            data_dir,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the leaderboard capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Leaderboard must hold at least 1 entry");
        self.capacity = capacity;
        self
    }

    /// Data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the persisted leaderboard.
    #[must_use]
    pub fn leaderboard_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.storage_key))
    }
}
