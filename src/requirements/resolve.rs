//! Executable resolution
//!
//! Lookups go through the `which` crate. Nothing is ever executed: a program
//! counts as present when an executable file with that name is found on the
//! search path.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Resolve `name` against the process search path.
#[must_use]
pub fn resolve_command(name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    which::which(name).ok()
}

/// Whether `name` resolves on the process search path.
#[must_use]
pub fn command_exists(name: &str) -> bool {
    resolve_command(name).is_some()
}

/// Resolve `name` against an explicit search path.
///
/// `search_path` uses the platform's path-list syntax (as in `PATH`); `cwd`
/// anchors relative entries.
#[must_use]
pub fn resolve_command_in<P, C>(name: &str, search_path: Option<P>, cwd: C) -> Option<PathBuf>
where
    P: AsRef<OsStr>,
    C: AsRef<Path>,
{
    if name.is_empty() {
        return None;
    }
    which::which_in(name, search_path, cwd).ok()
}

/// Whether `name` resolves against an explicit search path.
#[must_use]
pub fn command_exists_in<P, C>(name: &str, search_path: Option<P>, cwd: C) -> bool
where
    P: AsRef<OsStr>,
    C: AsRef<Path>,
{
    resolve_command_in(name, search_path, cwd).is_some()
}
