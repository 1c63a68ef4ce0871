//! Path and query-string encoding
//!
//! Two encoding surfaces share this module:
//! - path sanitization: `/images/demo.png` or a full third-party URL is
//!   normalized into a canonical, percent-encoded path segment
//! - query encoding: an ordered parameter list is rendered into the
//!   canonical query string that gets signed
//!
//! Percent-encoding covers every byte outside `[A-Za-z0-9_.~-]`, so
//! reserved delimiters, spaces, and multi-byte UTF-8 sequences are all
//! escaped byte-wise. Space encodes as `%20`, never `+`.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Normalize a user-supplied path into a canonical path segment.
///
/// The returned string always carries exactly one leading `/`. Three modes:
/// - `disable_path_encoding` leaves all other characters untouched
/// - paths starting with `http://` or `https://` are proxy requests; the
///   entire remainder is percent-encoded as one opaque component
/// - everything else is split on `/` and each segment is percent-encoded
///   independently, so the separators survive
///
/// Assumes the input is not already encoded.
pub fn sanitize_path(path: &str, disable_path_encoding: bool) -> String {
    // remove the leading "/", we'll add it back after encoding
    let path = path.strip_prefix('/').unwrap_or(path);

    if disable_path_encoding {
        format!("/{}", path)
    } else if path.starts_with("http://") || path.starts_with("https://") {
        encode_proxy_path(path)
    } else {
        encode_path_segments(path)
    }
}

/// Percent-encode an entire third-party URL as one opaque path component.
fn encode_proxy_path(path: &str) -> String {
    format!("/{}", urlencoding::encode(path))
}

/// Percent-encode each `/`-separated segment independently.
fn encode_path_segments(path: &str) -> String {
    let segments: Vec<String> = path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("/{}", segments.join("/"))
}

/// Render ordered key/value pairs into the canonical query string.
///
/// Keys are percent-encoded. A key whose encoded form ends in `64` marks a
/// binary-valued parameter: its value is base64url-encoded with `=` padding
/// stripped. Other values are percent-encoded. Pairs join with `&` in
/// insertion order, which the signature depends on.
///
/// An empty value emits the bare key with no `=` - a legacy quirk the
/// server-side signature verifier expects bit-exactly.
pub fn encode_query<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    params
        .into_iter()
        .map(|(key, value)| encode_pair(key, value))
        .collect::<Vec<String>>()
        .join("&")
}

fn encode_pair(key: &str, value: &str) -> String {
    let escaped_key = urlencoding::encode(key);

    if value.is_empty() {
        return escaped_key.into_owned();
    }

    if escaped_key.ends_with("64") {
        format!("{}={}", escaped_key, URL_SAFE_NO_PAD.encode(value.as_bytes()))
    } else {
        format!("{}={}", escaped_key, urlencoding::encode(value))
    }
}
