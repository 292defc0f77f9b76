//! Input validation applied before any value is included in an operation.
//!
//! Each check fails fast with a coded [`Error`](crate::error::Error) naming the offending value.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::document::service::{Endpoint, Service};
use crate::document::{Document, KeyPurpose, PublicKey};
use crate::error::Err;
use crate::hashing::canonicalize;
use crate::keys::{Jwk, KeyRole};
use crate::{tracerr, Result};

/// Maximum length of a key or service id.
pub const MAX_ID_LENGTH: usize = 50;

/// Maximum length of a service type.
pub const MAX_SERVICE_TYPE_LENGTH: usize = 30;

/// Length of a base64url-encoded 32-byte key component.
pub const KEY_COMPONENT_LENGTH: usize = 43;

const SECP256K1: &str = "secp256k1";
const EC: &str = "EC";

static BASE64URL: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-]+$"));

/// Returns true if `value` is non-empty and only uses the base64url character set.
///
/// # Errors
///
/// * Regex error if the pattern cannot be compiled.
pub fn is_base64url(value: &str) -> Result<bool> {
    let re = (*BASE64URL).as_ref().map_err(Clone::clone)?;
    Ok(re.is_match(value))
}

/// Code raised when an allowed JWK property has the wrong JSON type.
fn field_code(field: &str) -> Err {
    match field {
        "kty" => Err::JwkInvalidKty,
        "crv" => Err::JwkInvalidCrv,
        "x" => Err::JwkIncorrectLengthOfX,
        "y" => Err::JwkIncorrectLengthOfY,
        _ => Err::JwkIncorrectLengthOfD,
    }
}

/// Parse an untyped JSON key into a [`Jwk`], rejecting any property outside the set allowed for
/// `role`, then validate it with [`check_operation_key`].
///
/// # Errors
///
/// * `JwkUnexpectedProperty` - The value is not an object or carries a disallowed property.
/// * `JwkInvalidKty` / `JwkInvalidCrv` / `JwkIncorrectLengthOfX` / `Y` / `D` - The property is
///   not a string.
/// * Any error raised by [`check_operation_key`].
pub fn parse_operation_key(value: &Value, role: KeyRole) -> Result<Jwk> {
    let Some(map) = value.as_object() else {
        tracerr!(Err::JwkUnexpectedProperty, "{} key must be a JSON object", role);
    };
    let allowed = role.allowed_fields();
    if let Some(field) = map.keys().find(|k| !allowed.contains(&k.as_str())) {
        tracerr!(Err::JwkUnexpectedProperty, "{} key has unexpected property '{}'", role, field);
    }
    if let Some((field, _)) = map.iter().find(|(_, v)| !v.is_string()) {
        tracerr!(field_code(field), "{} key property '{}' must be a string", role, field);
    }

    let jwk: Jwk = serde_json::from_value(value.clone())?;
    check_operation_key(&jwk, role)?;
    Ok(jwk)
}

/// Check an ES256K operation key (recovery or update key).
///
/// # Errors
///
/// * `JwkUnexpectedProperty` - A public key carries `d`.
/// * `JwkInvalidCrv` / `JwkInvalidKty` - The curve or key type is wrong.
/// * `JwkIncorrectLengthOfX` / `Y` / `D` - A component is not 43 characters.
pub fn check_operation_key(jwk: &Jwk, role: KeyRole) -> Result<()> {
    if role == KeyRole::Public && jwk.d.is_some() {
        tracerr!(Err::JwkUnexpectedProperty, "public key has unexpected property 'd'");
    }
    if jwk.crv != SECP256K1 {
        tracerr!(Err::JwkInvalidCrv, "key 'crv' must be '{}', got '{}'", SECP256K1, jwk.crv);
    }
    if jwk.kty != EC {
        tracerr!(Err::JwkInvalidKty, "key 'kty' must be '{}', got '{}'", EC, jwk.kty);
    }
    if jwk.x.chars().count() != KEY_COMPONENT_LENGTH {
        tracerr!(
            Err::JwkIncorrectLengthOfX,
            "key 'x' must be {} characters, got {}",
            KEY_COMPONENT_LENGTH,
            jwk.x.chars().count()
        );
    }
    if jwk.y.chars().count() != KEY_COMPONENT_LENGTH {
        tracerr!(
            Err::JwkIncorrectLengthOfY,
            "key 'y' must be {} characters, got {}",
            KEY_COMPONENT_LENGTH,
            jwk.y.chars().count()
        );
    }
    if role == KeyRole::Private {
        let d_len = jwk.d.as_ref().map_or(0, |d| d.chars().count());
        if d_len != KEY_COMPONENT_LENGTH {
            tracerr!(
                Err::JwkIncorrectLengthOfD,
                "key 'd' must be {} characters, got {}",
                KEY_COMPONENT_LENGTH,
                d_len
            );
        }
    }
    Ok(())
}

/// Check a key or service id.
///
/// # Errors
///
/// * `IdTooLong` - The id exceeds [`MAX_ID_LENGTH`].
/// * `IdNotBase64Url` - The id uses characters outside `[A-Za-z0-9_-]`.
pub fn check_id(id: &str) -> Result<()> {
    if id.chars().count() > MAX_ID_LENGTH {
        tracerr!(Err::IdTooLong, "id '{}' exceeds maximum length of {}", id, MAX_ID_LENGTH);
    }
    if !is_base64url(id)? {
        tracerr!(Err::IdNotBase64Url, "id '{}' is not base64url", id);
    }
    Ok(())
}

/// Check that a purpose list, if present, has no repeats.
///
/// # Errors
///
/// * `PublicKeyPurposeDuplicated` - A purpose appears more than once.
pub fn check_purposes(purposes: Option<&[KeyPurpose]>) -> Result<()> {
    let Some(purposes) = purposes else {
        return Ok(());
    };
    let mut seen = HashSet::new();
    for p in purposes {
        if !seen.insert(p) {
            tracerr!(Err::PublicKeyPurposeDuplicated, "public key purpose '{}' duplicated", p);
        }
    }
    Ok(())
}

/// Check the public keys of a document descriptor or an add-public-keys patch.
///
/// # Errors
///
/// * `PublicKeyJwkNotObject` - A `publicKeyJwk` is not a JSON object.
/// * `IdTooLong` / `IdNotBase64Url` - A key id is invalid.
/// * `PublicKeyIdDuplicated` - Two keys share an id.
/// * `PublicKeyPurposeDuplicated` - A key repeats a purpose.
pub fn check_public_keys(keys: &[PublicKey]) -> Result<()> {
    let mut ids = HashSet::new();
    for key in keys {
        if !key.public_key_jwk.is_object() {
            tracerr!(
                Err::PublicKeyJwkNotObject,
                "public key '{}' publicKeyJwk must be an object",
                key.id
            );
        }
        check_id(&key.id)?;
        if !ids.insert(key.id.as_str()) {
            tracerr!(Err::PublicKeyIdDuplicated, "public key id '{}' duplicated", key.id);
        }
        check_purposes(key.purposes.as_deref())?;
    }
    Ok(())
}

/// Check a single service.
///
/// # Errors
///
/// * `IdTooLong` / `IdNotBase64Url` - The service id is invalid.
/// * `ServiceTypeTooLong` - The type exceeds [`MAX_SERVICE_TYPE_LENGTH`].
/// * `ServiceEndpointCannotBeArray` - The endpoint is an array.
/// * `ServiceEndpointNotUri` - A string endpoint is not a valid URI.
pub fn check_service(service: &Service) -> Result<()> {
    check_id(&service.id)?;
    let type_len = service.type_.chars().count();
    if type_len > MAX_SERVICE_TYPE_LENGTH {
        tracerr!(
            Err::ServiceTypeTooLong,
            "service type '{}' of {} characters exceeds maximum length of {}",
            service.type_,
            type_len,
            MAX_SERVICE_TYPE_LENGTH
        );
    }
    match &service.service_endpoint {
        Endpoint::Set(_) => {
            tracerr!(
                Err::ServiceEndpointCannotBeArray,
                "service '{}' endpoint cannot be an array",
                service.id
            );
        }
        Endpoint::Url(url) => {
            if let Err(e) = url::Url::parse(url) {
                tracerr!(
                    Err::ServiceEndpointNotUri,
                    "service endpoint '{}' is not a URI: {}",
                    url,
                    e
                );
            }
        }
        Endpoint::Map(_) => {}
    }
    Ok(())
}

/// Check a list of services: each service, then that no two share an id.
///
/// # Errors
///
/// * Any error raised by [`check_service`].
/// * `ServiceIdDuplicated` - Two services share an id.
pub fn check_services(services: &[Service]) -> Result<()> {
    let mut ids = HashSet::new();
    for service in services {
        check_service(service)?;
        if !ids.insert(service.id.as_str()) {
            tracerr!(Err::ServiceIdDuplicated, "service id '{}' duplicated", service.id);
        }
    }
    Ok(())
}

/// Check the keys and services of a document descriptor.
///
/// # Errors
///
/// * Any error raised by [`check_public_keys`] or [`check_services`].
pub fn check_document(document: &Document) -> Result<()> {
    if let Some(keys) = &document.public_keys {
        check_public_keys(keys)?;
    }
    if let Some(services) = &document.services {
        check_services(services)?;
    }
    Ok(())
}

/// Check the canonical size of a delta.
///
/// # Errors
///
/// * `DeltaExceedsMaximumSize` - The canonical delta is larger than `max_size` bytes.
pub fn check_delta_size(delta: &impl Serialize, max_size: usize) -> Result<()> {
    let size = canonicalize(delta)?.len();
    if size > max_size {
        tracerr!(
            Err::DeltaExceedsMaximumSize,
            "delta of {} bytes exceeded limit of {} bytes",
            size,
            max_size
        );
    }
    Ok(())
}
