//! Runtime probe for discovering the Python interpreter.
//!
//! The installer needs exactly one capability check before it touches the
//! package manager: is the runtime executable resolvable on the search path?
//! This is a presence check, not a version or compatibility check.
//!
//! # Example
//!
//! ```no_run
//! use mekicopy::requirements::probe::RuntimeProbe;
//!
//! let probe = RuntimeProbe::run("python");
//! match probe.path() {
//!     Some(path) => println!("python at {}", path.display()),
//!     None => println!("python is not installed"),
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Extensions tried on Windows when `PATHEXT` is unset.
#[cfg(windows)]
const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// Result of probing the search path for a runtime executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeProbe {
    /// The runtime name or path that was probed.
    runtime: String,
    /// The resolved executable, if any.
    path: Option<PathBuf>,
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// File names to try for a tool in a single directory.
#[cfg(windows)]
fn candidate_names(tool: &str) -> Vec<String> {
    if Path::new(tool).extension().is_some() {
        return vec![tool.to_string()];
    }
    let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| DEFAULT_PATHEXT.to_string());
    pathext
        .split(';')
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!("{}{}", tool, ext.to_lowercase()))
        .collect()
}

#[cfg(not(windows))]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![tool.to_string()]
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which`/`where` commands; their behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Whether the runtime was given as a path rather than a bare name.
fn is_explicit_path(runtime: &str) -> bool {
    runtime.contains('/') || (cfg!(windows) && runtime.contains('\\'))
}

/// Resolve a runtime name or path.
///
/// Bare names are searched on `path_entries`; anything containing a path
/// separator is checked in place.
pub fn resolve_runtime(runtime: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if runtime.is_empty() {
        return None;
    }
    if is_explicit_path(runtime) {
        let path = PathBuf::from(runtime);
        return (path.is_file() && is_executable(&path)).then_some(path);
    }
    resolve_tool_path(runtime, path_entries)
}

impl RuntimeProbe {
    /// Probe the current process PATH.
    pub fn run(runtime: &str) -> Self {
        Self::run_with_path(runtime, &parse_system_path())
    }

    /// Probe a caller-supplied list of directories.
    pub fn run_with_path(runtime: &str, path_entries: &[PathBuf]) -> Self {
        let path = resolve_runtime(runtime, path_entries);
        tracing::debug!(runtime, resolved = ?path, "probed runtime");
        Self {
            runtime: runtime.to_string(),
            path,
        }
    }

    /// Build a probe result from an already resolved path.
    pub fn from_resolved(runtime: &str, path: Option<PathBuf>) -> Self {
        Self {
            runtime: runtime.to_string(),
            path,
        }
    }

    /// The runtime name or path that was probed.
    pub fn runtime(&self) -> &str {
        &self.runtime
    }

    /// The resolved executable path.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the runtime was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}
