use {
    crate::constants::*,
    http::status::StatusCode,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// Error returned when signing a request or validating a request signature fails.
#[derive(Debug)]
#[non_exhaustive]
pub enum SignatureError {
    /// The secret-resolution service could not find a secret for the supplied `auth_key`.
    AuthSecretNotFound(/* message */ String),

    /// Validation failed due to an internal service error, typically raised by the
    /// secret-resolution service.
    InternalServiceError(Box<dyn Error + Send + Sync>),

    /// A caller-supplied input was malformed: an empty method, path, key, or secret; a reserved
    /// parameter (`auth_key`, `auth_hash`, `expiry`) present in the parameters at signing time;
    /// or an `expiry` value that is not a decimal Unix timestamp.
    InvalidArgument(/* message */ String),

    /// One or more of `auth_key`, `auth_hash`, or `expiry` was absent at verification time.
    MissingParameter(/* message */ String),

    /// The current time is at or past the `expiry` timestamp of the request.
    SignatureExpired(/* message */ String),

    /// The signature did not match the calculated signature value.
    SignatureUnmatch(/* message */ String),
}

impl SignatureError {
    /// A short, stable error code suitable for wire protocols and logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AuthSecretNotFound(_) => ERR_CODE_AUTH_SECRET_NOT_FOUND,
            Self::InternalServiceError(_) => ERR_CODE_INTERNAL_FAILURE,
            Self::InvalidArgument(_) => ERR_CODE_INVALID_ARGUMENT,
            Self::MissingParameter(_) => ERR_CODE_MISSING_PARAMETER,
            Self::SignatureExpired(_) => ERR_CODE_SIGNATURE_EXPIRED,
            Self::SignatureUnmatch(_) => ERR_CODE_SIGNATURE_UNMATCH,
        }
    }

    /// The HTTP status code a service would typically return for this error.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) | Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::InternalServiceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::FORBIDDEN,
        }
    }

    /// Indicates whether this error is one of the four verification failures, as opposed to a
    /// malformed-input or internal error.
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            Self::AuthSecretNotFound(_)
                | Self::MissingParameter(_)
                | Self::SignatureExpired(_)
                | Self::SignatureUnmatch(_)
        )
    }
}

impl Display for SignatureError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::AuthSecretNotFound(msg) => f.write_str(msg),
            Self::InternalServiceError(ref e) => Display::fmt(e, f),
            Self::InvalidArgument(msg) => f.write_str(msg),
            Self::MissingParameter(msg) => f.write_str(msg),
            Self::SignatureExpired(msg) => f.write_str(msg),
            Self::SignatureUnmatch(msg) => f.write_str(msg),
        }
    }
}

impl Error for SignatureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InternalServiceError(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
