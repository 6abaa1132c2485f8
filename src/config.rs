use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::checks::annotations::QuerierSpec;

pub const CONFIG_FILE_NAME: &str = ".relscan.yaml";

/// Scanner configuration: the set of checks to run.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

/// One configured check. The set of kinds is closed so an unknown kind
/// fails parsing instead of being silently ignored.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CheckConfig {
    ServiceAnnotations { spec: QuerierSpec },
}

impl Default for Config {
    fn default() -> Self {
        // An empty key performs no presence check, so the default scan is a
        // Service inventory that cannot fail spuriously.
        Self {
            checks: vec![CheckConfig::ServiceAnnotations {
                spec: QuerierSpec {
                    key: String::new(),
                    validate_url: false,
                    include_annotations: true,
                },
            }],
        }
    }
}

pub fn default_config_yaml() -> &'static str {
    r#"checks:
  - kind: service-annotations
    spec:
      key: ""
      validate_url: false
      include_annotations: true
"#
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(path: &Path) -> Result<ConfigLoadResult> {
    if !path.exists() {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        });
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(ConfigLoadResult {
        config,
        from_file: true,
    })
}
