//! Stored admin key: the client-local storage of the admin view.
//!
//! # Storage layout
//!
//! ```text
//! ~/.summit/
//!   admin.yaml      (key + saved_at, mode 0600)
//!   templates/      (optional page template overrides)
//! ```
//!
//! # API pattern
//!
//! Every function has two forms:
//! - `fn_at(home: &Path, …)`: explicit home; used in tests with `TempDir`
//! - `fn(…)`: derives home from `dirs::home_dir()`, delegates to `_at`

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::STATE_DIR;
use crate::error::SessionError;
use crate::types::AdminSessionFile;

const SESSION_FILE: &str = "admin.yaml";

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// `<home>/.summit/`: pure, no I/O.
pub fn state_dir_at(home: &Path) -> PathBuf {
    home.join(STATE_DIR)
}

/// `<home>/.summit/admin.yaml`: pure, no I/O.
pub fn session_path_at(home: &Path) -> PathBuf {
    state_dir_at(home).join(SESSION_FILE)
}

/// `<home>/.summit/templates/`: pure, no I/O.
pub fn templates_dir_at(home: &Path) -> PathBuf {
    state_dir_at(home).join("templates")
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load the stored session. `Ok(None)` when nobody is signed in.
pub fn load_at(home: &Path) -> Result<Option<AdminSessionFile>, SessionError> {
    let path = session_path_at(home);
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)?;
    serde_yaml::from_str(&contents)
        .map(Some)
        .map_err(|source| SessionError::Parse { path, source })
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Option<AdminSessionFile>, SessionError> {
    load_at(&home()?)
}

// ---------------------------------------------------------------------------
// Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically persist `key` to `<home>/.summit/admin.yaml`.
///
/// Write flow: serialize → `admin.yaml.tmp` → `chmod 0600` → `rename`.
pub fn save_at(home: &Path, key: &str) -> Result<AdminSessionFile, SessionError> {
    let dir = state_dir_at(home);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
        set_dir_permissions(&dir)?;
    }

    let session = AdminSessionFile {
        key: key.to_string(),
        saved_at: Utc::now(),
    };
    let path = session_path_at(home);
    let tmp_path = path.with_file_name(format!("{SESSION_FILE}.tmp"));

    let yaml = serde_yaml::to_string(&session)?;
    std::fs::write(&tmp_path, yaml)?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(session)
}

/// `save_at` convenience wrapper.
pub fn save(key: &str) -> Result<AdminSessionFile, SessionError> {
    save_at(&home()?, key)
}

// ---------------------------------------------------------------------------
// Clear
// ---------------------------------------------------------------------------

/// Remove the stored session. Returns `true` if a session existed.
pub fn clear_at(home: &Path) -> Result<bool, SessionError> {
    match std::fs::remove_file(session_path_at(home)) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// `clear_at` convenience wrapper.
pub fn clear() -> Result<bool, SessionError> {
    clear_at(&home()?)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, SessionError> {
    dirs::home_dir().ok_or(SessionError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), SessionError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), SessionError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), SessionError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), SessionError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
