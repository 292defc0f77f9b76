//! Signer capability used by the update, recover and deactivate builders.

use serde::{Deserialize, Serialize};

use crate::keys::Algorithm;
use crate::{error::Err, tracerr, Result};

/// Protected header of a compact JWS.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Signing algorithm.
    pub alg: Algorithm,
}

/// Operation signer. The implementer holds the private key; builders only see the compact
/// signature it returns.
///
/// The output of [`Signer::sign`] is a compact JWS: the base64url encoding of the header, of the
/// payload and of the signature, joined with `.`. Header and payload are serialized as compact
/// JSON in field order.
#[allow(async_fn_in_trait)]
pub trait Signer {
    /// Type of key signatures supported by this signer.
    fn supported_algorithms(&self) -> Vec<Algorithm>;

    /// Reconcile the requested algorithm with the supported algorithms, returning a default if no
    /// algorithm is provided or an error if the requested algorithm is not supported. The default
    /// is the first supported algorithm.
    ///
    /// # Errors
    ///
    /// * `UnsupportedAlgorithm` - The requested algorithm is not supported.
    fn algorithm(&self, alg: Option<Algorithm>) -> Result<Algorithm> {
        let my_algs = self.supported_algorithms();
        match alg {
            None => match my_algs.first() {
                Some(alg) => Ok(*alg),
                None => tracerr!(Err::InvalidConfig, "signer supports no algorithms"),
            },
            Some(alg) => {
                if my_algs.contains(&alg) {
                    Ok(alg)
                } else {
                    tracerr!(Err::UnsupportedAlgorithm, "Unsupported signing algorithm: {}", alg);
                }
            }
        }
    }

    /// Sign the payload, returning a compact JWS.
    ///
    /// # Arguments
    ///
    /// * `header` - The protected header. Its `alg` has already been reconciled with
    ///   [`Signer::algorithm`].
    /// * `payload` - The data to sign.
    ///
    /// # Errors
    ///
    /// An error should be returned if the payload could not be serialized or signed.
    async fn sign<T: Serialize + Sync>(&self, header: &Header, payload: &T) -> Result<String>;
}
