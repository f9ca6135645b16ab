use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn high_score_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("tapp");
            Some(state_dir.join("high_score.json"))
        } else {
            ProjectDirs::from("", "", "tapp")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("high_score.json"))
        }
    }
}
