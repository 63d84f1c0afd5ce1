//! Common constants used throughout the crate.
//!
//! This was consolidated here because we started redefining this in separate modules accidentally.
//! This helps ensure the entire crate is on the same page about these constant values. If a value
//! is spelled incorrectly, at least it can be fixed in one spot.
//!
//! Tests that are testing the content of an error code or message should not use these constants;
//! they should use hard-coded strings so the tests are also testing for misspellings.
//!
//! Please keep this file organized alphabetically.

/// Reserved parameter carrying the signature itself.
pub(crate) const AUTH_HASH: &str = "auth_hash";

/// Reserved parameter naming the key the request was signed with.
pub(crate) const AUTH_KEY: &str = "auth_key";

/// Default lifetime of a signature, in seconds.
pub const DEFAULT_EXPIRY_LIMIT: u64 = 60;

/// Error code: AuthSecretNotFound
pub(crate) const ERR_CODE_AUTH_SECRET_NOT_FOUND: &str = "AuthSecretNotFound";

/// Error code: InternalFailure
pub(crate) const ERR_CODE_INTERNAL_FAILURE: &str = "InternalFailure";

/// Error code: InvalidArgument
pub(crate) const ERR_CODE_INVALID_ARGUMENT: &str = "InvalidArgument";

/// Error code: MissingParameter
pub(crate) const ERR_CODE_MISSING_PARAMETER: &str = "MissingParameter";

/// Error code: SignatureExpired
pub(crate) const ERR_CODE_SIGNATURE_EXPIRED: &str = "SignatureExpired";

/// Error code: SignatureUnmatch
pub(crate) const ERR_CODE_SIGNATURE_UNMATCH: &str = "SignatureUnmatch";

/// Reserved parameter carrying the signature expiration as Unix seconds.
pub(crate) const EXPIRY: &str = "expiry";

/// Error message: `"auth_secret for the auth_key is not found."`
pub(crate) const MSG_AUTH_SECRET_NOT_FOUND: &str = "auth_secret for the auth_key is not found.";

/// Error message: `"auth_key, auth_hash, or expiry is missing:"`
pub(crate) const MSG_PARAMETERS_MISSING: &str = "auth_key, auth_hash, or expiry is missing:";

/// Error message: `"The request signature we calculated does not match the signature you provided. Check your auth_secret and signing method."`
pub(crate) const MSG_SIGNATURE_MISMATCH: &str = "The request signature we calculated does not match the signature you provided. Check your auth_secret and signing method.";
