use {
    base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine},
    hmac::{Hmac, Mac},
    sha2::Sha256,
};

/// Length of an HMAC-SHA256 tag in bytes.
pub(crate) const HMAC_SHA256_OUTPUT_LEN: usize = 32;

/// Wrapper function to form an HMAC-SHA256 operation using the RustCrypto crates.
#[inline(always)]
pub(crate) fn hmac_sha256(key: &[u8], value: &[u8]) -> [u8; HMAC_SHA256_OUTPUT_LEN] {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(value);
    mac.finalize().into_bytes().into()
}

/// HMAC-SHA256, encoded as standard padded base64. This is the wire format of `auth_hash`.
#[inline(always)]
pub(crate) fn hmac_sha256_base64(key: &[u8], value: &[u8]) -> String {
    BASE64_STANDARD.encode(hmac_sha256(key, value))
}
