//! Platform-specific paths for store backing files.
//!
//! Each store persists to one TOML file named after the store, so independent
//! stores in the same application never collide. Hosts that need a shared
//! container (the app-group analogue) pass an explicit directory to the
//! builder instead.
//!
//! # Directory Structure
//!
//! - Linux: `~/.config/tweaks/<store>.toml`
//! - macOS: `~/Library/Application Support/tweaks/<store>.toml`
//! - Windows: `%APPDATA%\tweaks\<store>.toml`

use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Application name used for directory paths.
const APP_NAME: &str = "tweaks";

/// Returns the default directory holding store backing files.
///
/// Falls back to the current directory if the platform config directory
/// cannot be determined.
pub fn stores_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the backing file path for a named store in the default location.
pub fn store_file_path(store_name: &str) -> PathBuf {
    store_file_in(&stores_dir(), store_name)
}

/// Returns the backing file path for a named store inside an explicit
/// container directory.
pub fn store_file_in(container: &Path, store_name: &str) -> PathBuf {
    container.join(format!("{store_name}.toml"))
}

/// Ensure the parent directory of a backing file exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(file: &Path) -> Result<(), StoreError> {
    if let Some(parent) = file.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::create_dir(parent, e))?;
    }
    Ok(())
}
