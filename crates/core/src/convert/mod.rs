//! Conversion of traditional license files into glyph documents.
//!
//! Detection is heuristic: an ordered list of characteristic phrases,
//! checked first to last, first match wins. A reformatted or translated
//! license whose text lacks the exact phrase will not be detected; that is a
//! known limitation of the format, not something to paper over here.

use thiserror::Error;

use crate::glyph::COMMENT_MARKER;
use crate::registry::{Registry, RegistryRecord};

/// Fixed resolver-service URL embedded in emitted glyph documents.
pub const RESOLVER_URL: &str = "https://glyph-resolver.dev/licenses/";

/// Ordered `(characteristic phrase, canonical name)` detector pairs.
///
/// Order is the tie-break for texts containing more than one phrase: the
/// first matching pair wins.
const DETECTORS: &[(&str, &str)] = &[
    ("MIT License", "MIT"),
    ("Apache License", "Apache-2.0"),
    ("GNU GENERAL PUBLIC LICENSE", "GPL-3.0"),
];

/// Error type for conversion failures.
///
/// Both variants are expected outcomes for unrecognized input; no output
/// document is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// No detector phrase matched the input text.
    #[error("Unknown license type")]
    UnknownLicenseType,

    /// A license was detected but the registry has no record for it.
    #[error("License {0} is not present in the registry")]
    Unregistered(String),
}

/// Detect which canonical license a raw text is, if any.
pub fn detect_license_name(text: &str) -> Option<&'static str> {
    DETECTORS.iter().find(|(phrase, _)| text.contains(phrase)).map(|&(_, name)| name)
}

/// Result of a successful conversion: the detected license and the rendered
/// glyph document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedGlyph {
    /// Canonical name the text was classified as.
    pub name: String,
    /// The registry's content identifier for that license.
    pub cid: String,
    /// The rendered reference document, ready to be written out.
    pub document: String,
}

/// Convert a traditional license text into a glyph document.
///
/// Detects the license (see [`detect_license_name`]), looks up its registry
/// record, and renders the reference document. The caller decides where the
/// document is written.
pub fn convert_to_glyph(text: &str, registry: &Registry) -> Result<ConvertedGlyph, ConvertError> {
    let name = detect_license_name(text).ok_or(ConvertError::UnknownLicenseType)?;
    let record = registry.get(name).ok_or_else(|| ConvertError::Unregistered(name.to_string()))?;
    Ok(ConvertedGlyph {
        name: name.to_string(),
        cid: record.cid.clone(),
        document: render_glyph_document(name, record),
    })
}

/// Render the glyph document for a registered license.
///
/// Layout is comment lines followed by `key: value` lines; the exact text of
/// the comments carries no semantics, only the parseable fields do.
pub fn render_glyph_document(name: &str, record: &RegistryRecord) -> String {
    format!(
        "{c} This project is licensed under {name}.\n\
         {c} The canonical text can be resolved and verified via the content identifier below.\n\
         protocol: {protocol}\n\
         cid: {cid}\n\
         name: {name}\n\
         resolver: {RESOLVER_URL}\n",
        c = COMMENT_MARKER,
        protocol = record.protocol,
        cid = record.cid,
    )
}
