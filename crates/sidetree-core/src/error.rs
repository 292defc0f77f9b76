//! # Sidetree Errors
//!
//! Error types used when validating inputs and building operations, including those raised by
//! [`Signer`](crate::Signer) implementations in other crates.
//!
//! Every failure carries a stable code ([`Err`]) and a human-readable message naming the
//! offending value. Codes are grouped into a coarser [`ErrorKind`] for callers that only care
//! about the category of failure.

use std::fmt::Display;

use thiserror::Error;

/// Simplify creation of errors with tracing.
///
/// # Example
/// ```
/// use sidetree_core::error::Err;
/// use sidetree_core::{tracerr, Result};
///
/// fn with_msg() -> Result<()> {
///     tracerr!(Err::IdTooLong, "id length {} exceeds {}", 51, 50)
/// }
///
/// fn no_msg() -> Result<()> {
///     tracerr!(Err::IdTooLong)
/// }
/// ```
#[macro_export]
macro_rules! tracerr {
    // with context
    ($code:expr, $($msg:tt)*) => {
        {
        use $crate::error::Context as _;
        tracing::error!($($msg)*);
        return Err($code).context(format!($($msg)*));
        }
    };
    // no context
    ($code:expr) => {
        {
        tracing::error!("{}", $code);
        return Err($code.into());
        }
    }
}

/// Public error type.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct Error(#[from] anyhow::Error);

impl Error {
    /// Transfer the error to `OAuth2` compatible format.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.0.root_cause().to_string(),
            "error_description": self.to_string(),
        })
    }

    /// Returns true if `err` is the code held by this error object.
    #[must_use]
    pub fn is(&self, err: Err) -> bool {
        self.code().map_or(false, |e| e == err)
    }

    /// The machine-readable code for this error, if it was raised by this library.
    #[must_use]
    pub fn code(&self) -> Option<Err> {
        self.0.downcast_ref::<Err>().copied()
    }

    /// The category of failure. Errors raised by third-party libraries without a code are
    /// reported as [`ErrorKind::Serialization`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.code().map_or(ErrorKind::Serialization, |e| e.kind())
    }
}

/// Coarse failure categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A JWK carries an unexpected or missing field, a wrong `kty`/`crv` or a wrong length.
    SchemaViolation,
    /// An `id` is too long or uses characters outside the base64url set.
    IdentifierInvalid,
    /// Two keys or two services share an `id`.
    DuplicateIdentifier,
    /// A key lists the same purpose twice.
    DuplicatePurpose,
    /// A service type is too long or its endpoint is not acceptable.
    ServiceInvalid,
    /// The canonical delta is larger than the configured limit.
    SizeLimitExceeded,
    /// The hash algorithm is not supported.
    HashAlgorithmUnsupported,
    /// An encoded hash is not a multihash or not base64url.
    MalformedMultihash,
    /// Data could not be serialized or deserialized.
    Serialization,
    /// The signer failed to produce or verify a signature.
    Signing,
    /// The builder or signer is misconfigured.
    Configuration,
}

/// Typed error codes.
#[derive(Clone, Copy, Error, Debug, PartialEq, Eq)]
pub enum Err {
    /// A JWK has a property outside the allowed set for its role.
    #[error("jwk_es256k_has_unexpected_property")]
    JwkUnexpectedProperty,

    /// A JWK `crv` is missing or is not `secp256k1`.
    #[error("jwk_es256k_missing_or_invalid_crv")]
    JwkInvalidCrv,

    /// A JWK `kty` is missing or is not `EC`.
    #[error("jwk_es256k_missing_or_invalid_kty")]
    JwkInvalidKty,

    /// A JWK `x` is not 43 characters.
    #[error("jwk_es256k_has_incorrect_length_of_x")]
    JwkIncorrectLengthOfX,

    /// A JWK `y` is not 43 characters.
    #[error("jwk_es256k_has_incorrect_length_of_y")]
    JwkIncorrectLengthOfY,

    /// A private JWK `d` is missing or is not 43 characters.
    #[error("jwk_es256k_has_incorrect_length_of_d")]
    JwkIncorrectLengthOfD,

    /// An `id` exceeds the maximum length.
    #[error("id_too_long")]
    IdTooLong,

    /// An `id` has characters outside `[A-Za-z0-9_-]`.
    #[error("id_not_using_base64url_character_set")]
    IdNotBase64Url,

    /// A public key lists the same purpose more than once.
    #[error("public_key_purpose_duplicated")]
    PublicKeyPurposeDuplicated,

    /// Two document keys share an `id`.
    #[error("did_document_public_key_id_duplicated")]
    PublicKeyIdDuplicated,

    /// A document key's `publicKeyJwk` is not a JSON object.
    #[error("did_document_public_key_missing_or_incorrect_type")]
    PublicKeyJwkNotObject,

    /// Two services share an `id`.
    #[error("did_document_service_id_duplicated")]
    ServiceIdDuplicated,

    /// A service `type` exceeds the maximum length.
    #[error("service_type_too_long")]
    ServiceTypeTooLong,

    /// A service endpoint is an array.
    #[error("service_endpoint_cannot_be_an_array")]
    ServiceEndpointCannotBeArray,

    /// A string service endpoint is not a valid URI.
    #[error("service_endpoint_string_not_valid_uri")]
    ServiceEndpointNotUri,

    /// The canonical delta exceeds the configured size.
    #[error("delta_exceeds_maximum_size")]
    DeltaExceedsMaximumSize,

    /// The hash algorithm code is not supported.
    #[error("multihash_unsupported_hash_algorithm")]
    UnsupportedHashAlgorithm,

    /// An encoded value is not a multihash.
    #[error("multihash_string_not_a_multihash")]
    NotAMultihash,

    /// An encoded value is not base64url.
    #[error("encoded_string_incorrect_encoding")]
    IncorrectEncoding,

    /// A DID string is not well formed or its embedded state does not match its suffix.
    #[error("invalid_did")]
    InvalidDid,

    /// An error occurred trying to serialize data.
    #[error("serialization_error")]
    SerializationError,

    /// An error occurred trying to deserialize data.
    #[error("deserialization_error")]
    DeserializationError,

    /// Invalid key material, such as a private key that is not on the curve.
    #[error("invalid_key")]
    InvalidKey,

    /// Failure to sign a message.
    #[error("signing_error")]
    SigningError,

    /// Failure to verify a signature.
    #[error("failed_signature_verification")]
    FailedSignatureVerification,

    /// A requested signing algorithm is not supported by the signer.
    #[error("unsupported_algorithm")]
    UnsupportedAlgorithm,

    /// Configuration could not be used.
    #[error("invalid_config")]
    InvalidConfig,
}

impl Err {
    /// The category this code belongs to.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::JwkUnexpectedProperty
            | Self::JwkInvalidCrv
            | Self::JwkInvalidKty
            | Self::JwkIncorrectLengthOfX
            | Self::JwkIncorrectLengthOfY
            | Self::JwkIncorrectLengthOfD
            | Self::PublicKeyJwkNotObject
            | Self::InvalidKey => ErrorKind::SchemaViolation,
            Self::IdTooLong | Self::IdNotBase64Url | Self::InvalidDid => {
                ErrorKind::IdentifierInvalid
            }
            Self::PublicKeyIdDuplicated | Self::ServiceIdDuplicated => {
                ErrorKind::DuplicateIdentifier
            }
            Self::PublicKeyPurposeDuplicated => ErrorKind::DuplicatePurpose,
            Self::ServiceTypeTooLong
            | Self::ServiceEndpointCannotBeArray
            | Self::ServiceEndpointNotUri => ErrorKind::ServiceInvalid,
            Self::DeltaExceedsMaximumSize => ErrorKind::SizeLimitExceeded,
            Self::UnsupportedHashAlgorithm => ErrorKind::HashAlgorithmUnsupported,
            Self::NotAMultihash | Self::IncorrectEncoding => ErrorKind::MalformedMultihash,
            Self::SerializationError | Self::DeserializationError => ErrorKind::Serialization,
            Self::SigningError | Self::FailedSignatureVerification | Self::UnsupportedAlgorithm => {
                ErrorKind::Signing
            }
            Self::InvalidConfig => ErrorKind::Configuration,
        }
    }
}

/// Context is used to decorate errors with useful context information.
pub trait Context<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// Adds context to the error.
    ///
    /// # Errors
    ///
    /// * Original error with context appended.
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: Display + Send + Sync + 'static;
}

impl<T, E> Context<T, E> for core::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: Display + Send + Sync + 'static,
    {
        match self {
            Ok(ok) => Ok(ok),
            Err(e) => Err(Error(anyhow::Error::from(e).context(context))),
        }
    }
}

impl From<Err> for Error {
    fn from(error: Err) -> Self {
        Self(error.into())
    }
}

impl From<base64ct::Error> for Error {
    fn from(err: base64ct::Error) -> Self {
        Self(anyhow::Error::from(err).context(Err::IncorrectEncoding))
    }
}

impl From<multihash::Error> for Error {
    fn from(err: multihash::Error) -> Self {
        Self(anyhow::Error::from(err).context(Err::NotAMultihash))
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self(err.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self(anyhow::Error::from(err).context(Err::SerializationError))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self(anyhow::Error::from(err).context(Err::ServiceEndpointNotUri))
    }
}
