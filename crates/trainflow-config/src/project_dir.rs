//! Discovery and management of the `.trainflow/` directory.
//!
//! The `.trainflow/` directory holds a project's configuration. This module
//! finds it by walking up the directory tree and creates it on `init`.

use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// The name of the trainflow metadata directory.
pub const CONFIG_DIR_NAME: &str = ".trainflow";

/// The name of the environment variable that can override the directory.
const CONFIG_DIR_ENV: &str = "TRAINFLOW_DIR";

/// Walk up the directory tree from `start` looking for a `.trainflow/`
/// directory.
///
/// The `TRAINFLOW_DIR` environment variable is checked first (highest
/// priority). Returns `None` if the filesystem root is reached without
/// finding one.
///
/// # Examples
///
/// ```no_run
/// use trainflow_config::project_dir::find_config_dir;
/// use std::path::Path;
///
/// if let Some(dir) = find_config_dir(Path::new(".")) {
///     println!("Found config dir at {}", dir.display());
/// }
/// ```
pub fn find_config_dir(start: &Path) -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV) {
        let env_path = PathBuf::from(&env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }

    // Canonicalize the start path so we get absolute paths.
    let start = start.canonicalize().ok()?;

    let mut current = start.as_path();
    loop {
        let candidate = current.join(CONFIG_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => break,
        }
    }

    None
}

/// Ensure a `.trainflow/` directory exists at the given path.
///
/// If `path` itself is not called `.trainflow`, a `.trainflow/` subdirectory
/// is created under it. Returns the path to the `.trainflow/` directory.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if directory creation fails.
pub fn ensure_config_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let config_dir = if path.ends_with(CONFIG_DIR_NAME) {
        path.to_path_buf()
    } else {
        path.join(CONFIG_DIR_NAME)
    };

    std::fs::create_dir_all(&config_dir)?;
    Ok(config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
