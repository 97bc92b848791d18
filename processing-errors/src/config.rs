//! Report configuration loaded from `monitor-errors.toml`

use crate::error::{ProcessingErrorsError, Result};
use crate::error_type::title_for_code;
use crate::grouping::{ErrorTypeKey, ProjectKey};
use crate::types::GroupKey;
use clap::ValueEnum;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "monitor-errors.toml";

/// Output format of the summary report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Presentation settings for grouped processing errors
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Drop the project level when every error belongs to one project
    pub collapse_single_project: bool,
    pub format: OutputFormat,
    /// Display names keyed by project id
    #[serde(deserialize_with = "deserialize_id_map")]
    pub projects: BTreeMap<i64, String>,
    /// Title overrides keyed by error type code
    #[serde(deserialize_with = "deserialize_id_map")]
    pub labels: BTreeMap<i64, String>,
}

// TOML table keys are always strings; ids are parsed once here.
fn deserialize_id_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<BTreeMap<i64, String>, D::Error> {
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut entries = BTreeMap::new();

    for (key, value) in raw {
        let id = key
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("key '{key}' is not an integer id")))?;
        if entries.insert(id, value).is_some() {
            return Err(D::Error::custom(format!("id {id} is listed more than once")));
        }
    }

    Ok(entries)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            collapse_single_project: true,
            format: OutputFormat::Text,
            projects: BTreeMap::new(),
            labels: BTreeMap::new(),
        }
    }
}

impl ReportConfig {
    /// Heading for a project group
    pub fn project_label(&self, project: &ProjectKey) -> String {
        match project {
            Some(GroupKey::Code(id)) => self
                .projects
                .get(id)
                .cloned()
                .unwrap_or_else(|| format!("Project {id}")),
            Some(other) => format!("Project {other}"),
            None => "Unknown project".to_string(),
        }
    }

    /// Title for an error type, honoring configured overrides
    pub fn type_label(&self, error_type: &ErrorTypeKey) -> String {
        error_type
            .as_ref()
            .and_then(GroupKey::as_code)
            .and_then(|code| self.labels.get(&code).cloned())
            .unwrap_or_else(|| title_for_code(error_type.as_ref()))
    }

    pub fn validate(&self) -> Result<()> {
        for (section, entries) in [("projects", &self.projects), ("labels", &self.labels)] {
            for (key, value) in entries {
                if value.trim().is_empty() {
                    return Err(ProcessingErrorsError::invalid_config(format!(
                        "[{section}] entry {key} has an empty name"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        DefaultConfigLoader::load_with_validation(path)
    }
}

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ReportConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ReportConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| {
            ProcessingErrorsError::ConfigNotFound {
                path: path.as_ref().to_path_buf(),
            }
        })?;

        let config: ReportConfig = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ProcessingErrorsError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;

        let config: ReportConfig = toml::from_str(&content).map_err(|e| {
            ProcessingErrorsError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;
        config.validate()?;

        debug!(
            path = %path_ref.display(),
            projects = config.projects.len(),
            labels = config.labels.len(),
            "loaded report configuration"
        );
        Ok(config)
    }
}

/// Template written by `monitor-errors init`
pub fn default_config_template() -> &'static str {
    r#"# monitor-errors report configuration

# Drop the project heading when all errors belong to a single project
collapse_single_project = true

# Output format: "text" or "json"
format = "text"

# Display names for project ids
[projects]
# 1 = "backend"

# Title overrides for error type codes
[labels]
# 6 = "Monitor switched off"
"#
}

/// Write the default configuration unless a file already exists.
///
/// Returns `true` when a file was written.
pub fn ensure_config_file_exists<P: AsRef<Path>>(path: P, force: bool) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() && !force {
        debug!(path = %path.display(), "configuration file already present");
        return Ok(false);
    }

    std::fs::write(path, default_config_template())?;
    info!(path = %path.display(), "wrote default configuration");
    Ok(true)
}
