//! Resolution: turning a glyph's content identifier into verified canonical
//! text via registry lookup.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::glyph::{glyph_path, Glyph};
use crate::registry::{load_registry, Registry, RegistryError, StoreLayout};

/// Outcome of resolving a glyph against the registry.
///
/// Never partially populated: consumers switch on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The identifier matched a registry entry and the canonical text was
    /// loaded and returned.
    Verified { name: String, cid: String, protocol: String, text: String },
    /// The identifier matched nothing in the registry.
    Unverified { error: String, cid: String },
}

impl Resolution {
    pub fn verified(&self) -> bool {
        matches!(self, Resolution::Verified { .. })
    }
}

/// Outcome of verifying a project's glyph document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The project has no glyph document at the expected path.
    MissingGlyph { path: PathBuf },
    /// The glyph was parsed and resolved (successfully or not).
    Resolved { glyph: Glyph, resolution: Resolution },
}

impl VerifyOutcome {
    pub fn verified(&self) -> bool {
        match self {
            VerifyOutcome::MissingGlyph { .. } => false,
            VerifyOutcome::Resolved { resolution, .. } => resolution.verified(),
        }
    }
}

/// Resolver bundling a store layout with its loaded registry.
///
/// The registry is loaded once at construction and held immutably for the
/// resolver's lifetime; canonical texts are read fresh on each resolution.
#[derive(Debug)]
pub struct Resolver {
    layout: StoreLayout,
    registry: Registry,
}

impl Resolver {
    /// Load the store's registry and construct a resolver over it.
    ///
    /// A missing or malformed registry document is fatal here; nothing
    /// downstream can recover from it.
    pub fn open(layout: StoreLayout) -> Result<Self, RegistryError> {
        let registry = load_registry(&layout.registry_path)?;
        Ok(Self { layout, registry })
    }

    /// Construct a resolver from an already-loaded registry.
    pub fn with_registry(layout: StoreLayout, registry: Registry) -> Self {
        Self { layout, registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolve a glyph's identifier to verified canonical text.
    ///
    /// Scans registry entries in order and stops at the first record whose
    /// stored CID equals the glyph's. No match is an expected outcome and
    /// comes back as [`Resolution::Unverified`]; a matched name whose text
    /// file cannot be read is store corruption and errors out.
    pub fn resolve(&self, glyph: &Glyph) -> Result<Resolution> {
        let cid = glyph.cid().unwrap_or_default();

        for (name, record) in &self.registry {
            if record.cid == cid {
                let path = self.layout.license_text_path(name);
                let text = fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read canonical text for {name} at {}", path.display())
                })?;
                return Ok(Resolution::Verified {
                    name: name.clone(),
                    cid: cid.to_string(),
                    protocol: glyph.protocol().unwrap_or_default().to_string(),
                    text,
                });
            }
        }

        Ok(Resolution::Unverified {
            error: "License not found in registry".to_string(),
            cid: cid.to_string(),
        })
    }

    /// Verify a project's glyph document.
    ///
    /// Looks for `LICENSE.glyph` at the project root; absence is a boolean
    /// failure, not an error. Otherwise the document is parsed and resolved.
    pub fn verify(&self, project_root: impl AsRef<Path>) -> Result<VerifyOutcome> {
        let path = glyph_path(project_root);

        if !path.exists() {
            return Ok(VerifyOutcome::MissingGlyph { path });
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read glyph document {}", path.display()))?;
        let glyph = Glyph::parse(&text);
        let resolution = self.resolve(&glyph)?;

        Ok(VerifyOutcome::Resolved { glyph, resolution })
    }
}
