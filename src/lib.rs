//! The `signed_api` crate provides shared-secret request signing and _verification_ routines for
//! HTTP-style API calls. A sender attaches a time-limited, tamper-evident HMAC-SHA256 signature
//! to a request (method, path, parameters) using a key/secret pair; a receiver independently
//! recomputes the signature from a secret resolved by key and accepts or rejects the request.
//! This authenticates API calls without a session or TLS client-cert mechanism.
//!
//! Three reserved parameters carry the authentication data on the wire, percent-encoded like any
//! other parameter: `auth_key` (which secret was used; covered by the signature so it cannot be
//! swapped), `expiry` (decimal Unix seconds after which the request is rejected), and
//! `auth_hash` (standard padded base64 of the HMAC-SHA256 tag).
//!
//! Secret storage and distribution, key rotation, and transport are out of scope: the receiver
//! supplies secret resolution as a [tower::Service] (or an async closure via [get_secret_fn]),
//! and all operations here are pure functions of their inputs plus a clock reading. The `*_at`
//! variants take the timestamp explicitly for deterministic tests.
//!
//! # Workflow
//! 1. The sender calls [sign_params] (or [signed_url] / [signed_path] for a formatted result)
//!    with its key, secret, and a time-to-live in seconds.
//! 2. The signed parameter set travels to the receiver as an ordinary query string.
//! 3. The receiver calls [verify_signature_strict] with a secret-resolution service to get the
//!    precise failure, or [verify_signature] for a boolean verdict.
//!
//! ## Example
//! ```rust
//! use signed_api::{
//!     get_secret_fn, sign_params, verify_signature_strict, GetSecretRequest, GetSecretResponse,
//!     SecretKey, DEFAULT_EXPIRY_LIMIT,
//! };
//! use std::collections::HashMap;
//! use tower::BoxError;
//!
//! const AUTH_KEY: &str = "SomeKeyStringForYourSecretKey";
//! const AUTH_SECRET: &str = "anysecretstring";
//!
//! // This is a mock resolver that returns a static secret. For actual use, you would call out
//! // to a database or other service to look the secret up by key.
//! async fn get_secret(req: GetSecretRequest) -> Result<GetSecretResponse, BoxError> {
//!     assert_eq!(req.auth_key(), AUTH_KEY);
//!     Ok(GetSecretResponse::builder().secret(SecretKey::from(AUTH_SECRET)).build()?)
//! }
//!
//! # tokio_test::block_on(async {
//! let mut params = HashMap::new();
//! params.insert("q".to_string(), "rust crates".to_string());
//!
//! let signed =
//!     sign_params("GET", "/api/search", &params, AUTH_KEY, &SecretKey::from(AUTH_SECRET), DEFAULT_EXPIRY_LIMIT)
//!         .unwrap();
//!
//! let mut resolver = get_secret_fn(get_secret);
//! verify_signature_strict("GET", "/api/search", &signed, &mut resolver).await.unwrap();
//! # });
//! ```

#![warn(clippy::all)]

mod auth;
mod canonical;
mod constants;
mod crypto;
mod error;
mod secret;
mod sign;

pub use {
    crate::{
        auth::{verify_signature, verify_signature_at, verify_signature_strict, verify_signature_strict_at},
        canonical::{canonicalize_params, is_rfc3986_unreserved},
        constants::DEFAULT_EXPIRY_LIMIT,
        error::SignatureError,
        secret::{
            get_secret_fn, GetSecretRequest, GetSecretRequestBuilder, GetSecretResponse, GetSecretResponseBuilder,
            SecretKey,
        },
        sign::{sign_params, sign_params_at, signed_path, signed_path_at, signed_url, signed_url_at},
    },
};

#[cfg(test)]
mod unittest;
