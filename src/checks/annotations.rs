//! Service annotations check.
//!
//! Lists every Service in the cluster and verifies each carries a required
//! annotation key, optionally capturing the resource's label set for the
//! report. The scanner's own aggregator Service is excluded so the check
//! never flags its own infrastructure.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    checks::Querier,
    cluster::{KubeLister, ServiceLister, ServiceRecord, in_cluster_client},
    error::ScanError,
    report::{CheckStatus, CheckSummary, ItemDetails, ResourceItem},
    runner::{CheckContext, Runner},
};

const CHECK_NAME: &str = "annotations";

/// Label marking the scanner's own aggregator Service.
const AGGREGATOR_LABEL: &str = "sonobuoy-component";
const AGGREGATOR_COMPONENT: &str = "aggregator";

/// Specification for the annotations check, parsed from the scanner config.
///
/// An empty `key` disables the key-presence predicate; only the optional
/// label capture runs. `validate_url` is accepted configuration with no
/// effect on evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuerierSpec {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub validate_url: bool,
    #[serde(default)]
    pub include_annotations: bool,
}

/// The annotations check, bound to a spec and a cluster-state accessor.
pub struct AnnotationsQuerier {
    name: &'static str,
    spec: QuerierSpec,
    lister: Box<dyn ServiceLister>,
}

impl AnnotationsQuerier {
    /// Build a check bound to in-cluster credentials.
    ///
    /// Fails with [`ScanError::Configuration`] if credentials cannot be
    /// resolved, or [`ScanError::ClientInit`] if the API client cannot be
    /// built from them. Single attempt, no retry.
    pub fn new(spec: QuerierSpec) -> Result<Self, ScanError> {
        let client = in_cluster_client()?;
        Ok(Self::with_lister(spec, Box::new(KubeLister::new(client))))
    }

    /// Build a check over an arbitrary lister.
    pub fn with_lister(spec: QuerierSpec, lister: Box<dyn ServiceLister>) -> Self {
        Self {
            name: CHECK_NAME,
            spec,
            lister,
        }
    }

    /// Register this check with the runner.
    pub fn add_to_runner(self, runner: &mut Runner) {
        info!(check_name = self.name, phase = "add", "complete");
        runner.append(Box::new(self));
    }

    async fn list_with_timeout(&self, ctx: &CheckContext) -> Result<Vec<ServiceRecord>, ScanError> {
        let query = self.lister.list_services();
        match ctx.timeout {
            Some(limit) => match tokio::time::timeout(limit, query).await {
                Ok(result) => result,
                Err(_) => Err(ScanError::Query(format!(
                    "timed out after {}s",
                    limit.as_secs()
                ))),
            },
            None => query.await,
        }
    }

    fn evaluate(&self, service: ServiceRecord) -> Option<ResourceItem> {
        // The scanner's own aggregator Service contributes nothing.
        if service.labels.get(AGGREGATOR_LABEL).map(String::as_str)
            == Some(AGGREGATOR_COMPONENT)
        {
            return None;
        }

        let mut details = ItemDetails::default();
        if self.spec.include_annotations {
            details.annotations = Some(service.labels.clone());
        }

        let mut item = ResourceItem::passed(&service.name, details);

        if !self.spec.key.trim().is_empty() && !service.annotations.contains_key(&self.spec.key) {
            item.status = CheckStatus::Failed;
            item.details.error = Some(format!("key: {} does not exist", self.spec.key));
        }

        Some(item)
    }
}

#[async_trait]
impl Querier for AnnotationsQuerier {
    fn name(&self) -> &str {
        self.name
    }

    async fn start(&self, ctx: CheckContext) {
        info!(check_name = self.name, phase = "start", "check started");

        let mut summary = CheckSummary::new(self.name);

        match self.list_with_timeout(&ctx).await {
            Ok(services) => {
                for service in services {
                    if let Some(item) = self.evaluate(service) {
                        summary.push(item);
                    }
                }
            }
            Err(err) => {
                warn!(check_name = self.name, error = %err, "cluster query failed");
                summary.fail();
            }
        }

        info!(check_name = self.name, phase = "complete", "check complete");

        // One blocking send per invocation; the sink controls pacing.
        if ctx.results.send(summary).await.is_err() {
            warn!(check_name = self.name, "result sink closed before delivery");
            return;
        }

        info!(check_name = self.name, phase = "write", "summary submitted");
    }
}
