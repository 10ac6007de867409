//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "edu";
const ORGANIZATION: &str = "college";
const APPLICATION: &str = "contactform";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory for persistent data (the draft database).
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Directory for logs.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Directory holding `contactform.toml`.
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the drafts database.
pub fn drafts_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("drafts.db"))
}

/// Get the path to the default config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("contactform.toml"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archived logs kept beside `latest.log`.
const KEPT_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

/// Archive the previous `latest.log` and prune the archive.
pub fn rotate_logs() -> io::Result<()> {
    match cache_dir() {
        Some(dir) if dir.is_dir() => rotate_in(&dir, &archive_name(chrono::Local::now())),
        _ => Ok(()),
    }
}

/// Create the log file at `path`, along with its directory.
pub fn create_log(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    File::create(path)
}

/// Archive file name for a log closed at `at`.
fn archive_name(at: chrono::DateTime<chrono::Local>) -> String {
    format!("{}.log", at.format("%Y%m%d_%H%M%S"))
}

fn rotate_in(dir: &Path, archive: &str) -> io::Result<()> {
    let latest = dir.join(LATEST_LOG);
    if latest.is_file() {
        fs::rename(&latest, dir.join(archive))?;
    }

    let mut archived = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name.ends_with(".log") && name != LATEST_LOG {
            archived.push(name);
        }
    }
    for name in stale_logs(archived, KEPT_LOGS) {
        fs::remove_file(dir.join(name))?;
    }
    Ok(())
}

/// Archive names beyond the newest `keep`.
///
/// Archives are named by timestamp, so name order is age order.
fn stale_logs(mut names: Vec<String>, keep: usize) -> Vec<String> {
    names.sort_unstable_by(|a, b| b.cmp(a));
    names.split_off(keep.min(names.len()))
}
