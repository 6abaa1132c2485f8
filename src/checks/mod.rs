//! Check implementations.
//!
//! Each check is a self-contained inspection unit: it is registered with a
//! [`Runner`](crate::runner::Runner), queries cluster state once, evaluates
//! a per-resource predicate, and posts a single
//! [`CheckSummary`](crate::report::CheckSummary) to the runner's result sink.
//!
//! - `annotations`: every Service must carry a required annotation key.

use async_trait::async_trait;

use crate::runner::CheckContext;

pub mod annotations;

/// A registered check, driven once per scan by the runner.
#[async_trait]
pub trait Querier: Send + Sync {
    /// Stable name identifying the check in logs and the report.
    fn name(&self) -> &str;

    /// Run the query-evaluate-report cycle exactly once.
    ///
    /// Never aborts mid-run: query and predicate failures are absorbed into
    /// the summary, and exactly one summary is posted to the context's
    /// result sink.
    async fn start(&self, ctx: CheckContext);
}
