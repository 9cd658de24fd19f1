//! Content identifier derivation.
//!
//! A CID here is a pure function of a byte sequence: SHA-256, encoded as
//! URL-safe unpadded base64, lowercased, capped at [`CID_BODY_LEN`] chars,
//! and prefixed with [`CID_PREFIX`]. This is a simplified rendition of a
//! self-describing multiformat identifier; it is *not* interoperable with
//! real IPFS CIDs, but it is stable across implementations that follow the
//! same recipe, which is what registry round-trips rely on.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Constant tag marking the addressing scheme and version.
pub const CID_PREFIX: &str = "bafkrei";

/// Protocol tag stored in registry records and emitted glyph documents.
pub const PROTOCOL: &str = "ipfs";

/// Hash algorithm tag stored in registry records.
pub const HASH_ALGORITHM: &str = "sha256";

/// Maximum length of the encoded digest portion of a CID.
///
/// An unpadded base64 encoding of a 256-bit digest is 43 chars, so the cap
/// never truncates in practice; it fixes the identifier shape by
/// construction.
pub const CID_BODY_LEN: usize = 52;

/// Derive the content identifier for `content`.
///
/// Total and deterministic: identical bytes always yield the identical
/// string, and any change to the input yields a different string with
/// overwhelming probability (inherited from SHA-256).
pub fn derive_cid(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    let mut body = URL_SAFE_NO_PAD.encode(digest).to_ascii_lowercase();
    body.truncate(CID_BODY_LEN);
    format!("{CID_PREFIX}{body}")
}
