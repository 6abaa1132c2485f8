//! Cluster-state access.
//!
//! Checks consume cluster state through the [`ServiceLister`] trait so that
//! evaluation logic stays independent of the API client. The production
//! implementation lists Services across all namespaces with an in-cluster
//! `kube` client; tests substitute a fake lister.

use std::collections::BTreeMap;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Service;
use kube::{
    Client, Config,
    api::{Api, ListParams},
};

use crate::error::ScanError;

/// The projection of a Service a check inspects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceRecord {
    pub name: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}

/// Capability to list all Service resources across namespaces.
///
/// Records are returned in the order the API server produced them; callers
/// preserve that order. A single attempt, any transport/auth/API failure
/// surfaces as [`ScanError::Query`].
#[async_trait]
pub trait ServiceLister: Send + Sync {
    async fn list_services(&self) -> Result<Vec<ServiceRecord>, ScanError>;
}

/// Resolve in-cluster credentials and build an API client.
pub fn in_cluster_client() -> Result<Client, ScanError> {
    let config = Config::incluster().map_err(ScanError::Configuration)?;
    Client::try_from(config).map_err(ScanError::ClientInit)
}

/// Production lister over a `kube` client.
pub struct KubeLister {
    client: Client,
}

impl KubeLister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ServiceLister for KubeLister {
    async fn list_services(&self) -> Result<Vec<ServiceRecord>, ScanError> {
        let api: Api<Service> = Api::all(self.client.clone());
        let services = api
            .list(&ListParams::default())
            .await
            .map_err(|err| ScanError::Query(err.to_string()))?;

        Ok(services
            .items
            .into_iter()
            .map(|service| ServiceRecord {
                name: service.metadata.name.unwrap_or_default(),
                labels: service.metadata.labels.unwrap_or_default(),
                annotations: service.metadata.annotations.unwrap_or_default(),
            })
            .collect())
    }
}
