//! Glyph documents: the `LICENSE.glyph` reference format.
//!
//! A glyph is a line-oriented document of `key: value` pairs plus `#`
//! comment lines. Parsing is total and lenient: malformed lines are skipped,
//! and no field is required. Validation happens at point of use — the
//! resolver simply finds no match when the identifier is absent.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Conventional file name of a project's glyph document.
pub const GLYPH_FILE_NAME: &str = "LICENSE.glyph";

/// Comment marker: lines starting with this are ignored.
pub const COMMENT_MARKER: char = '#';

/// Path of the glyph document inside a project root.
pub fn glyph_path(project_root: impl AsRef<Path>) -> PathBuf {
    project_root.as_ref().join(GLYPH_FILE_NAME)
}

/// Parsed glyph document: an ordered string-to-string mapping with typed
/// accessors for the fields the resolver cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glyph {
    fields: IndexMap<String, String>,
}

impl Glyph {
    /// Parse a glyph document.
    ///
    /// Rules:
    /// - lines starting with `#` are comments and ignored;
    /// - remaining lines are split on the *first* colon, so a value may
    ///   itself contain colons (e.g. a URL);
    /// - key and value are trimmed of surrounding whitespace;
    /// - lines with no colon, or whose key or value is empty after trimming,
    ///   are skipped silently;
    /// - a duplicated key keeps the last occurrence.
    pub fn parse(text: &str) -> Self {
        let mut fields = IndexMap::new();

        for line in text.lines() {
            if line.starts_with(COMMENT_MARKER) {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            fields.insert(key.to_string(), value.to_string());
        }

        Self { fields }
    }

    /// Look up an arbitrary field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The content identifier this glyph points at, if present.
    pub fn cid(&self) -> Option<&str> {
        self.get("cid")
    }

    /// The addressing-scheme tag, if present.
    pub fn protocol(&self) -> Option<&str> {
        self.get("protocol")
    }

    /// The license name the author claims, if present.
    ///
    /// Informational only; resolution goes by `cid`.
    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    /// Number of parsed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no line parsed into a field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
