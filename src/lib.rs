// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod audio;
pub mod celebration;
pub mod game;
pub mod highscore;
pub mod runtime;
