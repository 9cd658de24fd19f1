//! Registry store: building, persisting, and loading the license registry.
//!
//! The registry is a single JSON document mapping canonical license name to
//! [`RegistryRecord`]. It is rebuilt wholesale by scanning the store's
//! `licenses/` directory; there is no incremental update path. Loading a
//! missing or malformed document is fatal to anything that needs the
//! registry, surfaced as [`RegistryError`].

mod layout;
mod models;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

pub use layout::{StoreLayout, LICENSE_EXTENSION, REGISTRY_FILE_NAME};
pub use models::{Registry, RegistryRecord};

/// Error type for registry availability.
///
/// Both variants mean the registry cannot be used at all; retrying without
/// fixing the underlying file is pointless, so callers treat them as fatal.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The persisted registry document could not be read.
    #[error("Registry document not found at {path}: {source}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document exists but does not parse as the expected structure.
    #[error("Registry document at {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Scan the store's licenses directory and rebuild the registry.
///
/// Every `<Name>.txt` file becomes one record keyed by `Name`; other
/// directory entries are skipped silently. Entries are inserted in file-name
/// order so the persisted document and the resolver's scan order are stable
/// across rebuilds. The persisted document is always rewritten in full.
pub fn build_registry(layout: &StoreLayout) -> Result<Registry> {
    let mut license_files: Vec<PathBuf> = Vec::new();

    let entries = fs::read_dir(&layout.licenses_dir).with_context(|| {
        format!("Failed to read licenses directory {}", layout.licenses_dir.display())
    })?;
    for entry in entries {
        let entry = entry.with_context(|| {
            format!("Failed to read entry in {}", layout.licenses_dir.display())
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(LICENSE_EXTENSION) {
            license_files.push(path);
        }
    }

    // read_dir order is platform-dependent; sort for a reproducible registry.
    license_files.sort();

    let mut registry = Registry::new();
    for path in license_files {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let content = fs::read(&path)
            .with_context(|| format!("Failed to read license text {}", path.display()))?;
        registry.insert(name.to_string(), RegistryRecord::for_content(&content));
    }

    save_registry(&registry, &layout.registry_path)?;

    Ok(registry)
}

/// Load the registry from its persisted document.
pub fn load_registry(path: &Path) -> Result<Registry, RegistryError> {
    let json = fs::read_to_string(path)
        .map_err(|source| RegistryError::Missing { path: path.to_path_buf(), source })?;
    serde_json::from_str(&json)
        .map_err(|source| RegistryError::Malformed { path: path.to_path_buf(), source })
}

/// Serialize the registry and write it to `path`, replacing any previous
/// document.
pub fn save_registry(registry: &Registry, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(registry).context("Failed to serialize registry to JSON")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write registry document {}", path.display()))?;
    Ok(())
}
