use thiserror::Error;

/// Errors raised while constructing or running a check.
///
/// Construction-time errors (`Configuration`, `ClientInit`) are returned to
/// the caller and prevent the check from ever running. `Query` is absorbed
/// by the check itself: the affected summary degrades to failed with no
/// items instead of aborting the scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("in-cluster configuration could not be resolved")]
    Configuration(#[source] kube::config::InClusterError),

    #[error("failed to build cluster client")]
    ClientInit(#[source] kube::Error),

    #[error("cluster query failed: {0}")]
    Query(String),
}
