//! Relscan - Kubernetes reliability scanner
//!
//! Relscan is a CLI tool and library for scanning a cluster for reliability
//! issues. It runs a configurable set of checks (currently: required Service
//! annotations) and emits a JSON report of per-check, per-resource results.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, report output)
//! - `checks`: Check implementations driven by the runner
//! - `cluster`: Cluster-state access behind the `ServiceLister` seam
//! - `config`: Configuration file loading and parsing
//! - `error`: Error taxonomy for construction and query failures
//! - `report`: Result data model (summaries, items, details)
//! - `runner`: Check registry and execution context

pub mod checks;
pub mod cli;
pub mod cluster;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
