//! Canonicalization functionality for signature generation and validation.
//!
//! The canonical form of a parameter set is a form-URL-encoded query string: each key and value
//! is percent-encoded, the encoded `key=value` strings are sorted lexicographically (byte-wise,
//! over the full `key=value` string, not the key alone), and the result is joined with `&`.
//! Because the encoding and the sort are deterministic, the canonical string is independent of
//! the iteration order of the underlying map, which is what makes the signature reproducible on
//! the verifying side.

use {crate::constants::AUTH_HASH, log::trace, std::collections::HashMap};

/// Uppercase hex digits.
const HEX_DIGITS_UPPER: [u8; 16] =
    [b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'A', b'B', b'C', b'D', b'E', b'F'];

/// Indicates whether the specified byte is RFC3986 unreserved -- i.e., can be represented without
/// being percent-encoded, e.g. '?' -> '%3F'.
#[inline(always)]
pub fn is_rfc3986_unreserved(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-' || c == b'.' || c == b'_' || c == b'~'
}

/// Convert a byte to its two-character uppercase hex representation.
#[inline(always)]
fn u8_to_upper_hex(b: u8) -> [u8; 2] {
    [HEX_DIGITS_UPPER[(b >> 4) as usize], HEX_DIGITS_UPPER[(b & 0x0f) as usize]]
}

/// Percent-encode a single element (key or value) of a parameter set.
///
/// Unreserved characters are left alone; every other byte is encoded as `%XX` with uppercase hex
/// digits. Space is encoded as `%20`, never `+`.
pub(crate) fn escape_uri_element(element: &str) -> String {
    let mut result = Vec::with_capacity(element.len());

    for c in element.as_bytes() {
        if is_rfc3986_unreserved(*c) {
            result.push(*c);
        } else {
            result.push(b'%');
            result.extend(u8_to_upper_hex(*c));
        }
    }

    String::from_utf8(result).expect("percent-encoded output is always ASCII")
}

/// Convert a parameter set to its canonical query-string form.
///
/// Each `key=value` pair is percent-encoded, then the encoded pairs are sorted byte-wise and
/// joined with `&`. An empty parameter set canonicalizes to the empty string. This function is
/// deterministic and side-effect-free.
pub fn canonicalize_params(params: &HashMap<String, String>) -> String {
    let mut results = Vec::with_capacity(params.len());

    for (key, value) in params.iter() {
        results.push(format!("{}={}", escape_uri_element(key), escape_uri_element(value)));
    }

    results.sort_unstable();
    results.join("&")
}

/// Get the string to sign for the request: the method, path, and canonical parameters, joined by
/// newlines. `auth_hash` is never part of its own input; signing computes the string before the
/// hash is attached, and verification removes the hash before recomputing.
pub(crate) fn string_to_sign(method: &str, path: &str, params: &HashMap<String, String>) -> String {
    debug_assert!(!params.contains_key(AUTH_HASH));

    let canonical = canonicalize_params(params);
    let mut result = String::with_capacity(method.len() + 1 + path.len() + 1 + canonical.len());
    result.push_str(method);
    result.push('\n');
    result.push_str(path);
    result.push('\n');
    result.push_str(&canonical);

    trace!("String to sign:\n{}", result);

    result
}
