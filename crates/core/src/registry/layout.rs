use std::path::{Path, PathBuf};

/// File extension canonical license texts must carry to be registered.
pub const LICENSE_EXTENSION: &str = "txt";

/// File name of the persisted registry document.
pub const REGISTRY_FILE_NAME: &str = "LICENSE_REGISTRY.json";

/// Logical layout of a license store on disk.
///
/// This is derived from a chosen root path. It does *not* perform any IO
/// itself; the CLI and the store functions create and read files based on it.
#[derive(Debug, Clone)]
pub struct StoreLayout {
    /// Root directory of the license store.
    pub root: PathBuf,
    /// Directory holding canonical license texts (`<Name>.txt`).
    pub licenses_dir: PathBuf,
    /// Path to the persisted registry document.
    pub registry_path: PathBuf,
}

impl StoreLayout {
    /// Compute the default layout for a store rooted at `root`.
    ///
    /// This does *not* touch the filesystem.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let licenses_dir = root.join("licenses");
        let registry_path = root.join(REGISTRY_FILE_NAME);

        Self { root, licenses_dir, registry_path }
    }

    /// Path of the canonical text for a registered license name.
    pub fn license_text_path(&self, name: &str) -> PathBuf {
        self.licenses_dir.join(format!("{name}.{LICENSE_EXTENSION}"))
    }
}
