//! URL signature computation
//!
//! Signs the canonical path+query with the host's secret token so the
//! rendering service can reject tampered parameters. The digest must match
//! the server-side verifier exactly: a 128-bit MD5 over the concatenation
//! `token + path_and_query`, rendered as 32 lowercase hex characters.

use md5::{Digest, Md5};

/// Compute the signature for an already-encoded path+query.
///
/// `path_and_query` is the exact byte sequence the URL will carry before
/// the signature parameter itself is appended. Deterministic: identical
/// (token, path_and_query) pairs always produce the same digest.
pub fn sign(token: &str, path_and_query: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(token.as_bytes());
    hasher.update(path_and_query.as_bytes());
    hex::encode(hasher.finalize())
}
