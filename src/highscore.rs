use crate::app_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk shape: a single fixed key holding the best score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
struct HighScoreFile {
    high_score: u32,
}

/// Persistence collaborator for the best score across sessions.
///
/// Persistence failures are the host environment's concern, never the
/// game's: a missing or unreadable store reads as 0 and a failed save is
/// reported but non-fatal.
pub trait HighScoreStore {
    fn load(&self) -> u32;
    fn save(&self, score: u32) -> io::Result<()>;

    /// Compare a finished session's score against the stored best and
    /// persist only on improvement. Returns true for a new best.
    fn submit(&self, score: u32) -> bool {
        if score > self.load() {
            let _ = self.save(score);
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new() -> Self {
        let path = AppDirs::high_score_path()
            .unwrap_or_else(|| PathBuf::from("tapp_high_score.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileHighScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(file) = serde_json::from_slice::<HighScoreFile>(&bytes) {
                return file.high_score;
            }
        }
        0
    }

    fn save(&self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(&HighScoreFile { high_score: score })
            .unwrap_or_default();
        fs::write(&self.path, data)
    }
}
