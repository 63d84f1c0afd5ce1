use {
    derive_builder::Builder,
    std::{
        fmt::{Debug, Display, Formatter, Result as FmtResult},
        future::Future,
    },
    tower::{service_fn, util::ServiceFn, BoxError},
};

/// An opaque shared secret used to sign and verify requests.
///
/// The key material is never transmitted and never printed: the `Debug` and `Display`
/// implementations are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    /// The raw secret.
    key: Vec<u8>,
}

impl SecretKey {
    /// Create a new `SecretKey` from the specified key material.
    pub fn new<K: Into<Vec<u8>>>(key: K) -> Self {
        Self {
            key: key.into(),
        }
    }

    /// Retrieve the raw key material.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Indicates whether the key material is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl From<&str> for SecretKey {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<String> for SecretKey {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("SecretKey")
    }
}

impl Display for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("SecretKey")
    }
}

/// A request for the secret associated with an `auth_key`, sent to the secret-resolution service.
///
/// GetSecretRequest structs are immutable. Use [`GetSecretRequestBuilder`] to programmatically
/// construct a request.
#[derive(Builder, Clone, Debug)]
pub struct GetSecretRequest {
    /// The `auth_key` carried by the request being verified.
    #[builder(setter(into))]
    auth_key: String,
}

impl GetSecretRequest {
    /// Create a [GetSecretRequestBuilder] to construct a [GetSecretRequest].
    pub fn builder() -> GetSecretRequestBuilder {
        GetSecretRequestBuilder::default()
    }

    /// Retrieve the `auth_key` to resolve.
    #[inline(always)]
    pub fn auth_key(&self) -> &str {
        &self.auth_key
    }
}

/// A response from the secret-resolution service.
///
/// A response with no secret indicates the `auth_key` is unknown; the verifier turns this into
/// [`SignatureError::AuthSecretNotFound`][crate::SignatureError::AuthSecretNotFound].
///
/// GetSecretResponse structs are immutable. Use [GetSecretResponseBuilder] to programmatically
/// construct a response.
#[derive(Builder, Clone, Debug, Default)]
pub struct GetSecretResponse {
    /// The secret for the requested `auth_key`, if one exists.
    #[builder(setter(into, strip_option), default)]
    secret: Option<SecretKey>,
}

impl GetSecretResponse {
    /// Create a [GetSecretResponseBuilder] to construct a [GetSecretResponse].
    pub fn builder() -> GetSecretResponseBuilder {
        GetSecretResponseBuilder::default()
    }

    /// Retrieve the secret, if one was found.
    #[inline(always)]
    pub fn secret(&self) -> Option<&SecretKey> {
        self.secret.as_ref()
    }
}

/// Wrap an async function that resolves an `auth_key` to a secret in a [tower::Service].
///
/// The function may perform arbitrary lookup logic (static map, store, network call); the
/// verifier awaits its result before any part of the signature comparison proceeds.
pub fn get_secret_fn<F, Fut>(f: F) -> ServiceFn<F>
where
    F: FnOnce(GetSecretRequest) -> Fut + Send + 'static,
    Fut: Future<Output = Result<GetSecretResponse, BoxError>> + Send + 'static,
{
    service_fn(f)
}
