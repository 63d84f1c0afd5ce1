//! Request signing routines.
//!
//! Signing augments a caller-supplied parameter set with the three reserved authentication
//! parameters: `auth_key` (which key the receiver should resolve), `expiry` (Unix seconds after
//! which the signature is rejected), and `auth_hash` (base64 HMAC-SHA256 over the method, path,
//! and canonical parameters). `auth_key` and `expiry` are inserted before the hash is computed,
//! so neither can be swapped without invalidating the signature.

use {
    crate::{
        canonical::{canonicalize_params, string_to_sign},
        constants::{AUTH_HASH, AUTH_KEY, EXPIRY},
        crypto::hmac_sha256_base64,
        secret::SecretKey,
        SignatureError,
    },
    chrono::{DateTime, Utc},
    log::debug,
    std::collections::HashMap,
};

/// Validate the caller-supplied signing inputs, returning `InvalidArgument` on the first
/// violation. No partial state is produced on failure.
fn validate_sign_args(
    method: &str,
    path: &str,
    params: &HashMap<String, String>,
    auth_key: &str,
    secret: &SecretKey,
) -> Result<(), SignatureError> {
    if method.is_empty() {
        return Err(SignatureError::InvalidArgument("Expected a non-empty string for the method parameter.".to_string()));
    }

    if path.is_empty() {
        return Err(SignatureError::InvalidArgument("Expected a non-empty string for the path parameter.".to_string()));
    }

    if auth_key.is_empty() {
        return Err(SignatureError::InvalidArgument("Expected a non-empty string for the key parameter.".to_string()));
    }

    if secret.is_empty() {
        return Err(SignatureError::InvalidArgument(
            "Expected a non-empty string for the secret parameter.".to_string(),
        ));
    }

    for reserved in [AUTH_KEY, AUTH_HASH, EXPIRY] {
        if params.contains_key(reserved) {
            return Err(SignatureError::InvalidArgument(format!(
                "Expected params not to contain the reserved parameter '{}'.",
                reserved
            )));
        }
    }

    Ok(())
}

/// Sign a request, returning the parameter set augmented with `auth_key`, `expiry`, and
/// `auth_hash`.
///
/// The signature expires `expiry_limit` seconds from now; pass
/// [`DEFAULT_EXPIRY_LIMIT`][crate::DEFAULT_EXPIRY_LIMIT] for the conventional 60-second window.
/// The caller-supplied `params` must not contain any of the three reserved parameters.
///
/// This reads the system clock; use [sign_params_at] to supply the timestamp explicitly.
pub fn sign_params(
    method: &str,
    path: &str,
    params: &HashMap<String, String>,
    auth_key: &str,
    secret: &SecretKey,
    expiry_limit: u64,
) -> Result<HashMap<String, String>, SignatureError> {
    sign_params_at(method, path, params, auth_key, secret, expiry_limit, Utc::now())
}

/// Sign a request as of the specified timestamp.
///
/// Apart from the caller-supplied timestamp this is a pure function of its inputs, which makes
/// expiry behavior testable without sleeping.
pub fn sign_params_at(
    method: &str,
    path: &str,
    params: &HashMap<String, String>,
    auth_key: &str,
    secret: &SecretKey,
    expiry_limit: u64,
    timestamp: DateTime<Utc>,
) -> Result<HashMap<String, String>, SignatureError> {
    validate_sign_args(method, path, params, auth_key, secret)?;

    let expiry = timestamp.timestamp() + expiry_limit as i64;

    let mut augmented = params.clone();
    augmented.insert(AUTH_KEY.to_string(), auth_key.to_string());
    augmented.insert(EXPIRY.to_string(), expiry.to_string());

    let hash = hmac_sha256_base64(secret.as_bytes(), string_to_sign(method, path, &augmented).as_bytes());
    debug!("Signed {} {} with auth_key '{}', expiry {}", method, path, auth_key, expiry);
    augmented.insert(AUTH_HASH.to_string(), hash);

    Ok(augmented)
}

/// Sign a request and format it as a full URL: `root_url + path + "?" + canonical-params`.
pub fn signed_url(
    root_url: &str,
    method: &str,
    path: &str,
    params: &HashMap<String, String>,
    auth_key: &str,
    secret: &SecretKey,
    expiry_limit: u64,
) -> Result<String, SignatureError> {
    signed_url_at(root_url, method, path, params, auth_key, secret, expiry_limit, Utc::now())
}

/// Sign a request as of the specified timestamp and format it as a full URL.
#[allow(clippy::too_many_arguments)]
pub fn signed_url_at(
    root_url: &str,
    method: &str,
    path: &str,
    params: &HashMap<String, String>,
    auth_key: &str,
    secret: &SecretKey,
    expiry_limit: u64,
    timestamp: DateTime<Utc>,
) -> Result<String, SignatureError> {
    let signed = sign_params_at(method, path, params, auth_key, secret, expiry_limit, timestamp)?;
    Ok(format!("{}{}?{}", root_url, path, canonicalize_params(&signed)))
}

/// Sign a request and format it as a path plus query string: `path + "?" + canonical-params`.
pub fn signed_path(
    method: &str,
    path: &str,
    params: &HashMap<String, String>,
    auth_key: &str,
    secret: &SecretKey,
    expiry_limit: u64,
) -> Result<String, SignatureError> {
    signed_path_at(method, path, params, auth_key, secret, expiry_limit, Utc::now())
}

/// Sign a request as of the specified timestamp and format it as a path plus query string.
pub fn signed_path_at(
    method: &str,
    path: &str,
    params: &HashMap<String, String>,
    auth_key: &str,
    secret: &SecretKey,
    expiry_limit: u64,
    timestamp: DateTime<Utc>,
) -> Result<String, SignatureError> {
    let signed = sign_params_at(method, path, params, auth_key, secret, expiry_limit, timestamp)?;
    Ok(format!("{}?{}", path, canonicalize_params(&signed)))
}
