use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Canonicalize a root path if possible, falling back to the given string
/// relative to the current working directory.
///
/// Used for both store roots and project roots, which may not exist yet when
/// the command runs (e.g. `convert --output` into a fresh directory).
pub fn canonicalize_or_current(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if path == Path::new(".") {
        return env::current_dir().context("Failed to get current directory");
    }
    match path.canonicalize() {
        Ok(p) => Ok(p),
        Err(_) => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Ok(cwd.join(path))
        }
    }
}
