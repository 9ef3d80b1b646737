//! One pretty-printed JSON file per game.

use super::{ProgressStore, SavedProgress};
use crate::constants::PROGRESS_FILE_EXTENSION;
use crate::utils::persistence::{arcade_dir, file_for, load_json, save_json};
use std::io;
use std::path::{Path, PathBuf};

pub struct JsonProgressStore {
    dir: PathBuf,
}

impl JsonProgressStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the per-user data directory.
    pub fn in_default_dir() -> io::Result<Self> {
        Ok(Self::new(arcade_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, game_id: &str) -> PathBuf {
        file_for(
            &self.dir,
            game_id,
            &format!("{}.json", PROGRESS_FILE_EXTENSION),
        )
    }
}

impl ProgressStore for JsonProgressStore {
    fn get_progress(&self, game_id: &str) -> io::Result<Option<SavedProgress>> {
        load_json(&self.path_for(game_id))
    }

    fn set_progress(&mut self, progress: &SavedProgress) -> io::Result<()> {
        save_json(&self.path_for(&progress.game_id), progress)
    }
}
