//! Request signature verification routines.
//!
//! Verification is a stateless, idempotent evaluation of a signed parameter set against the
//! supplied clock reading and a secret-resolution service. Each failure mode is a distinct
//! [SignatureError] variant, checked in a fixed order: reserved parameters present, secret
//! resolvable, signature unexpired, signature matching.

use {
    crate::{
        canonical::string_to_sign,
        constants::{AUTH_HASH, AUTH_KEY, EXPIRY, MSG_AUTH_SECRET_NOT_FOUND, MSG_PARAMETERS_MISSING, MSG_SIGNATURE_MISMATCH},
        crypto::hmac_sha256_base64,
        GetSecretRequest, GetSecretResponse, SignatureError,
    },
    chrono::{DateTime, Utc},
    log::{debug, trace},
    std::{collections::HashMap, future::Future},
    subtle::ConstantTimeEq,
    tower::{BoxError, Service, ServiceExt},
};

/// Verify the signature attached to a request, reporting the precise failure.
///
/// `get_secret` is the injected secret-resolution capability: a [tower::Service] mapping a
/// [GetSecretRequest] to a [GetSecretResponse]. Use
/// [get_secret_fn][crate::get_secret_fn] to wrap an async closure.
///
/// This reads the system clock; use [verify_signature_strict_at] to supply the timestamp
/// explicitly.
pub async fn verify_signature_strict<S, F>(
    method: &str,
    path: &str,
    signed_params: &HashMap<String, String>,
    get_secret: &mut S,
) -> Result<(), SignatureError>
where
    S: Service<GetSecretRequest, Response = GetSecretResponse, Error = BoxError, Future = F> + Send,
    F: Future<Output = Result<GetSecretResponse, BoxError>> + Send,
{
    verify_signature_strict_at(method, path, signed_params, Utc::now(), get_secret).await
}

/// Verify the signature attached to a request as of the specified timestamp, reporting the
/// precise failure.
///
/// The verification steps, each a distinct failure mode:
/// 1. Split `auth_hash` off the parameter set.
/// 2. Require `auth_key`, `auth_hash`, and `expiry` to all be present →
///    [SignatureError::MissingParameter].
/// 3. Resolve the secret for `auth_key`; no secret → [SignatureError::AuthSecretNotFound].
/// 4. Compare `server_timestamp` against `expiry` numerically; at or past expiry →
///    [SignatureError::SignatureExpired].
/// 5. Recompute the hash over the remaining parameters and compare in constant time; mismatch →
///    [SignatureError::SignatureUnmatch].
pub async fn verify_signature_strict_at<S, F>(
    method: &str,
    path: &str,
    signed_params: &HashMap<String, String>,
    server_timestamp: DateTime<Utc>,
    get_secret: &mut S,
) -> Result<(), SignatureError>
where
    S: Service<GetSecretRequest, Response = GetSecretResponse, Error = BoxError, Future = F> + Send,
    F: Future<Output = Result<GetSecretResponse, BoxError>> + Send,
{
    if method.is_empty() {
        return Err(SignatureError::InvalidArgument("Expected a non-empty string for the method parameter.".to_string()));
    }

    if path.is_empty() {
        return Err(SignatureError::InvalidArgument("Expected a non-empty string for the path parameter.".to_string()));
    }

    let auth_hash = signed_params.get(AUTH_HASH);
    let mut remaining = signed_params.clone();
    remaining.remove(AUTH_HASH);

    let mut missing = Vec::new();
    if !remaining.contains_key(AUTH_KEY) {
        missing.push(AUTH_KEY);
    }
    if auth_hash.is_none() {
        missing.push(AUTH_HASH);
    }
    if !remaining.contains_key(EXPIRY) {
        missing.push(EXPIRY);
    }
    if !missing.is_empty() {
        return Err(SignatureError::MissingParameter(format!("{} {}", MSG_PARAMETERS_MISSING, missing.join(", "))));
    }

    let auth_hash = auth_hash.expect("auth_hash presence checked above");
    let auth_key = remaining.get(AUTH_KEY).expect("auth_key presence checked above");
    let expiry = remaining.get(EXPIRY).expect("expiry presence checked above");

    let req = GetSecretRequest::builder().auth_key(auth_key.as_str()).build().expect("all fields should be set");
    let response = match get_secret.oneshot(req).await {
        Ok(response) => {
            trace!("get_secret: resolved auth_key '{}'", auth_key);
            response
        }
        Err(e) => {
            debug!("get_secret: error resolving auth_key '{}': {}", auth_key, e);
            return Err(match e.downcast::<SignatureError>() {
                Ok(sig_err) => *sig_err,
                Err(e) => SignatureError::InternalServiceError(e),
            });
        }
    };

    let secret = match response.secret() {
        Some(secret) => secret,
        None => return Err(SignatureError::AuthSecretNotFound(MSG_AUTH_SECRET_NOT_FOUND.to_string())),
    };

    // The expiry comparison is numeric, not string-ordered. Comparing equal-length decimal
    // strings happens to give the same answer for contemporary timestamps, but it is not a
    // correct ordering in general.
    let expiry_ts: i64 = expiry.parse().map_err(|_| {
        SignatureError::InvalidArgument(format!(
            "Expected a decimal Unix timestamp for the expiry parameter, got '{}'.",
            expiry
        ))
    })?;
    let now = server_timestamp.timestamp();
    if now >= expiry_ts {
        trace!("verify: signature expired at {}, server time is {}", expiry_ts, now);
        return Err(SignatureError::SignatureExpired(format!(
            "Signature expired: server time {} is at or past expiry {}.",
            now, expiry_ts
        )));
    }

    let expected = hmac_sha256_base64(secret.as_bytes(), string_to_sign(method, path, &remaining).as_bytes());
    let is_equal: bool = auth_hash.as_bytes().ct_eq(expected.as_bytes()).into();
    if !is_equal {
        trace!("Signature mismatch: expected '{}', got '{}'", expected, auth_hash);
        return Err(SignatureError::SignatureUnmatch(MSG_SIGNATURE_MISMATCH.to_string()));
    }

    Ok(())
}

/// Verify the signature attached to a request, collapsing the verification outcome to a boolean.
///
/// The four verification failures (missing parameters, unknown `auth_key`, expired signature,
/// mismatched signature) become `Ok(false)`. Malformed-input and internal errors still propagate
/// as `Err`.
pub async fn verify_signature<S, F>(
    method: &str,
    path: &str,
    signed_params: &HashMap<String, String>,
    get_secret: &mut S,
) -> Result<bool, SignatureError>
where
    S: Service<GetSecretRequest, Response = GetSecretResponse, Error = BoxError, Future = F> + Send,
    F: Future<Output = Result<GetSecretResponse, BoxError>> + Send,
{
    verify_signature_at(method, path, signed_params, Utc::now(), get_secret).await
}

/// Verify the signature attached to a request as of the specified timestamp, collapsing the
/// verification outcome to a boolean.
pub async fn verify_signature_at<S, F>(
    method: &str,
    path: &str,
    signed_params: &HashMap<String, String>,
    server_timestamp: DateTime<Utc>,
    get_secret: &mut S,
) -> Result<bool, SignatureError>
where
    S: Service<GetSecretRequest, Response = GetSecretResponse, Error = BoxError, Future = F> + Send,
    F: Future<Output = Result<GetSecretResponse, BoxError>> + Send,
{
    match verify_signature_strict_at(method, path, signed_params, server_timestamp, get_secret).await {
        Ok(()) => Ok(true),
        Err(e) if e.is_verification_failure() => Ok(false),
        Err(e) => Err(e),
    }
}
