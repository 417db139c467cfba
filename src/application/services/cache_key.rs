use sha2::{Digest, Sha256};

use crate::domain::SourceKind;

const KEY_NAMESPACE: &str = "grammar_check";

/// Deterministic fingerprint for a (content, source) pair, shaped
/// `grammar_check:<sha256-hex>:<file|text>`.
///
/// The hash is cryptographic because the key space is shared: a fast
/// non-cryptographic hash would let crafted content collide with someone
/// else's cached report. Identical content submitted as a file and as raw
/// text yields two different keys; the channels are never equivalent.
pub fn generate_cache_key(content: &str, source: SourceKind) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!("{}:{}:{}", KEY_NAMESPACE, hex::encode(digest), source.as_str())
}
