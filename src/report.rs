use std::{collections::BTreeMap, fmt};

use serde::Serialize;

/// Outcome of a check or of a single inspected resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Passed => write!(f, "passed"),
            CheckStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Details recorded for a single inspected resource.
///
/// A closed set rather than an open map: a check either captures the
/// resource's label set under `annotations`, records a failure reason
/// under `error`, or both. Empty entries are omitted from the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ItemDetails {
    pub fn is_empty(&self) -> bool {
        self.annotations.is_none() && self.error.is_none()
    }
}

/// Report entry for one inspected resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceItem {
    pub name: String,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "ItemDetails::is_empty")]
    pub details: ItemDetails,
}

impl ResourceItem {
    pub fn passed(name: &str, details: ItemDetails) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Passed,
            details,
        }
    }
}

/// Top-level report entry for one check invocation.
///
/// Starts out `Passed` and latches to `Failed` if the cluster query fails
/// or any resource fails its predicate. The latch never resets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub name: String,
    pub status: CheckStatus,
    pub items: Vec<ResourceItem>,
}

impl CheckSummary {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Passed,
            items: Vec::new(),
        }
    }

    /// Latch the summary to `Failed`.
    pub fn fail(&mut self) {
        self.status = CheckStatus::Failed;
    }

    /// Append a resource item, latching the summary if the item failed.
    pub fn push(&mut self, item: ResourceItem) {
        if item.status == CheckStatus::Failed {
            self.fail();
        }
        self.items.push(item);
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }
}
