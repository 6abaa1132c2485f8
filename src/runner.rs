use std::time::Duration;

use tokio::sync::mpsc;

use crate::{checks::Querier, report::CheckSummary};

/// Shared execution context handed to each check.
///
/// The result sink is a bounded channel: each check posts exactly one
/// summary per invocation and blocks until the runner accepts it, which
/// keeps the pacing under the runner's control.
pub struct CheckContext {
    pub results: mpsc::Sender<CheckSummary>,
    /// Upper bound on the cluster query. A check whose query exceeds this
    /// reports a failed summary instead of hanging.
    pub timeout: Option<Duration>,
}

/// The orchestrator that owns registered checks and drives a scan.
///
/// Each check runs as its own task and owns its client handle and summary;
/// there is no shared mutable state between checks.
#[derive(Default)]
pub struct Runner {
    queriers: Vec<Box<dyn Querier>>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check. Always succeeds; checks log their own
    /// registration event via `add_to_runner`.
    pub fn append(&mut self, querier: Box<dyn Querier>) {
        self.queriers.push(querier);
    }

    pub fn len(&self) -> usize {
        self.queriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queriers.is_empty()
    }

    /// Run every registered check once and collect their summaries.
    ///
    /// Summaries arrive in completion order; each check contributes exactly
    /// one.
    pub async fn run(self, timeout: Option<Duration>) -> Vec<CheckSummary> {
        let (tx, mut rx) = mpsc::channel(self.queriers.len().max(1));

        let mut handles = Vec::with_capacity(self.queriers.len());
        for querier in self.queriers {
            let ctx = CheckContext {
                results: tx.clone(),
                timeout,
            };
            handles.push(tokio::spawn(async move { querier.start(ctx).await }));
        }
        // The receiver terminates once every per-check sender is dropped.
        drop(tx);

        let mut summaries = Vec::with_capacity(handles.len());
        while let Some(summary) = rx.recv().await {
            summaries.push(summary);
        }
        for handle in handles {
            let _ = handle.await;
        }
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckStatus;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    struct StubCheck {
        name: &'static str,
        status: CheckStatus,
    }

    #[async_trait]
    impl Querier for StubCheck {
        fn name(&self) -> &str {
            self.name
        }

        async fn start(&self, ctx: CheckContext) {
            let mut summary = CheckSummary::new(self.name);
            if self.status == CheckStatus::Failed {
                summary.fail();
            }
            let _ = ctx.results.send(summary).await;
        }
    }

    #[tokio::test]
    async fn one_summary_per_registered_check() {
        let mut runner = Runner::new();
        runner.append(Box::new(StubCheck {
            name: "alpha",
            status: CheckStatus::Passed,
        }));
        runner.append(Box::new(StubCheck {
            name: "beta",
            status: CheckStatus::Failed,
        }));
        assert_eq!(runner.len(), 2);

        let mut summaries = runner.run(None).await;
        summaries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "alpha");
        assert_eq!(summaries[0].status, CheckStatus::Passed);
        assert_eq!(summaries[1].name, "beta");
        assert_eq!(summaries[1].status, CheckStatus::Failed);
    }

    #[tokio::test]
    async fn empty_runner_produces_no_summaries() {
        let runner = Runner::new();
        assert!(runner.is_empty());
        let summaries = runner.run(None).await;
        assert!(summaries.is_empty());
    }
}
