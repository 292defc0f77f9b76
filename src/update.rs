//! # Update
//!
//! Add or remove keys and services of an existing DID, authorized by the current update key.

use sidetree_core::validate::{check_id, check_public_keys, check_services};
use sidetree_core::{Jwk, Patch, PublicKey, Result, Service, Signer};

use crate::operation::{UpdateOperation, UpdateSignedData};
use crate::registrar::Registrar;

/// Inputs to an update operation. Empty or absent lists produce no patch.
#[derive(Clone, Debug, Default)]
pub struct UpdateRequest {
    /// Unique suffix of the DID to update.
    pub did_suffix: String,
    /// Current update key (public). Its hash is revealed; the signer must hold its private key.
    pub update_key: Jwk,
    /// Public key the next update will be authorized with.
    pub next_update_key: Jwk,
    /// Services to add.
    pub services_to_add: Option<Vec<Service>>,
    /// Ids of services to remove.
    pub ids_of_services_to_remove: Option<Vec<String>>,
    /// Public keys to add.
    pub public_keys_to_add: Option<Vec<PublicKey>>,
    /// Ids of public keys to remove.
    pub ids_of_public_keys_to_remove: Option<Vec<String>>,
}

impl Registrar {
    /// Build an update operation.
    ///
    /// Patches are emitted in a fixed order: add services, remove services, add public keys,
    /// remove public keys.
    ///
    /// # Errors
    ///
    /// Fails if the suffix, either key, any added key or service, or any removed id is invalid,
    /// if the delta exceeds the configured maximum size, or if the signer fails.
    pub async fn update(
        &self, request: &UpdateRequest, signer: &impl Signer,
    ) -> Result<UpdateOperation> {
        self.check_suffix(&request.did_suffix)?;
        Self::check_key(&request.update_key)?;
        Self::check_key(&request.next_update_key)?;

        let mut patches = Vec::new();

        if let Some(services) = request.services_to_add.as_ref().filter(|s| !s.is_empty()) {
            check_services(services)?;
            patches.push(Patch::AddServices {
                services: services.clone(),
            });
        }
        if let Some(ids) = request.ids_of_services_to_remove.as_ref().filter(|s| !s.is_empty()) {
            for id in ids {
                check_id(id)?;
            }
            patches.push(Patch::RemoveServices { ids: ids.clone() });
        }
        if let Some(keys) = request.public_keys_to_add.as_ref().filter(|s| !s.is_empty()) {
            check_public_keys(keys)?;
            patches.push(Patch::AddPublicKeys {
                public_keys: keys.clone(),
            });
        }
        if let Some(ids) = request.ids_of_public_keys_to_remove.as_ref().filter(|s| !s.is_empty())
        {
            for id in ids {
                check_id(id)?;
            }
            patches.push(Patch::RemovePublicKeys { ids: ids.clone() });
        }

        let (delta, delta_hash) = self.delta(patches, &request.next_update_key)?;

        let signed = UpdateSignedData {
            update_key: request.update_key.clone(),
            delta_hash,
        };
        let signed_data = Self::sign(signer, &signed).await?;
        tracing::debug!("built update operation for {}", request.did_suffix);

        Ok(UpdateOperation {
            did_suffix: request.did_suffix.clone(),
            reveal_value: self.reveal_value(&request.update_key)?,
            delta,
            signed_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use sidetree_core::error::{Err, ErrorKind};
    use sidetree_core::test_utils::{
        jwk_es256k_1, jwk_es256k_2, public_key_model_1, service_1, TestSigner,
    };
    use sidetree_core::PatchAction;

    use super::*;

    const SUFFIX: &str = "EiAnKD8-jfdd0MDcZUjAbRgaThBrMxPTFOxcnfJhI7Ukaw";

    fn request() -> UpdateRequest {
        UpdateRequest {
            did_suffix: SUFFIX.to_string(),
            update_key: jwk_es256k_1(),
            next_update_key: jwk_es256k_2(),
            ..UpdateRequest::default()
        }
    }

    #[tokio::test]
    async fn patch_order() {
        let request = UpdateRequest {
            public_keys_to_add: Some(vec![public_key_model_1()]),
            ids_of_public_keys_to_remove: Some(vec!["key-2".to_string()]),
            services_to_add: Some(vec![service_1()]),
            ids_of_services_to_remove: Some(vec!["service2Id".to_string()]),
            ..request()
        };
        let op = Registrar::default()
            .update(&request, &TestSigner::default())
            .await
            .expect("should update");

        let actions = op.delta.patches.iter().map(Patch::action).collect::<Vec<_>>();
        assert_eq!(
            actions,
            vec![
                PatchAction::AddServices,
                PatchAction::RemoveServices,
                PatchAction::AddPublicKeys,
                PatchAction::RemovePublicKeys,
            ]
        );
    }

    #[tokio::test]
    async fn empty_lists_omitted() {
        let request = UpdateRequest {
            services_to_add: Some(vec![]),
            ..request()
        };
        let op = Registrar::default()
            .update(&request, &TestSigner::default())
            .await
            .expect("should update");

        assert!(op.delta.patches.is_empty());
        let json = serde_json::to_value(&op).expect("should serialize");
        assert_eq!(json["delta"]["patches"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn invalid_removal_id() {
        let request = UpdateRequest {
            ids_of_services_to_remove: Some(vec!["service#2".to_string()]),
            ..request()
        };
        let err = Registrar::default()
            .update(&request, &TestSigner::default())
            .await
            .expect_err("should fail");
        assert!(err.is(Err::IdNotBase64Url));
    }

    #[tokio::test]
    async fn invalid_key_removal_id() {
        let request = UpdateRequest {
            ids_of_public_keys_to_remove: Some(vec!["k".repeat(51)]),
            ..request()
        };
        let err = Registrar::default()
            .update(&request, &TestSigner::default())
            .await
            .expect_err("should fail");
        assert!(err.is(Err::IdTooLong));
        assert_eq!(err.kind(), ErrorKind::IdentifierInvalid);
    }

    #[tokio::test]
    async fn invalid_suffix() {
        let request = UpdateRequest {
            did_suffix: "not-a-multihash".to_string(),
            ..request()
        };
        let err = Registrar::default()
            .update(&request, &TestSigner::default())
            .await
            .expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::MalformedMultihash);
    }
}
