//! Path resolution shared by CLI commands and the resolver core
//!
//! Root and query paths must be compared under the same normalization or
//! prefix matching silently fails (symlinked temp dirs, relative CLI
//! arguments). Everything that ends up in a prefix comparison goes through
//! here first.

use std::path::{Path, PathBuf};

use crate::{EmberNavError, Result};

/// Resolve a path string, treating relative paths as relative to CWD.
///
/// - Absolute paths are returned as-is
/// - Relative paths are joined with the current working directory
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined
/// (only relevant for relative paths).
pub fn resolve_path_or_cwd(path: &str) -> Result<PathBuf> {
    let p = Path::new(path);
    if p.is_absolute() {
        Ok(p.to_path_buf())
    } else {
        let cwd = std::env::current_dir().map_err(|e| EmberNavError::FileNotFound {
            path: format!("current directory: {}", e),
        })?;
        Ok(cwd.join(p))
    }
}

/// Canonicalize path for consistent prefix comparison.
///
/// Attempts to resolve symlinks and get the absolute path. If canonicalization
/// fails (e.g., path doesn't exist), returns the original path unchanged.
pub fn canonicalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Render a path relative to `root` as a slash-separated string with a
/// leading `/`, e.g. `/app/components/foo.js`.
///
/// Returns `None` when `file` is not under `root`. The leading-slash form is
/// what the layout prefix rules (`/app/`, `/addon/`, `/tests/`) match
/// against, independent of the platform separator.
pub fn slash_prefix(file: &Path, root: &Path) -> Option<String> {
    let rel = file.strip_prefix(root).ok()?;
    let mut out = String::new();
    for comp in rel.components() {
        out.push('/');
        out.push_str(&comp.as_os_str().to_string_lossy());
    }
    Some(out)
}
