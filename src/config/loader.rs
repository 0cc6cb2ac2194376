//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading attendance
//! policy configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{ComplianceConfig, OrganizationMetadata, WorkPolicy};

/// Loads and provides access to the attendance policy configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── organization.yaml   # Organization metadata
/// └── policy.yaml         # Schedule, overtime, break, night-work and remarks policy
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Loaded policy for {}", loader.organization().name);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ComplianceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or unparseable, or if the
    /// contracted day is longer than the statutory day.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<OrganizationMetadata>(&path.join("organization.yaml"))?;
        let policy = Self::load_yaml::<WorkPolicy>(&path.join("policy.yaml"))?;
        Self::validate(&policy)?;

        debug!(
            organization = %metadata.code,
            version = %metadata.version,
            "Loaded attendance policy"
        );

        Ok(Self {
            config: ComplianceConfig::new(metadata, policy),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ComplianceConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(policy: &WorkPolicy) -> EngineResult<()> {
        if policy.overtime.contracted_day_minutes > policy.overtime.statutory_day_minutes {
            return Err(EngineError::InvalidConfig {
                field: "overtime.contracted_day_minutes".to_string(),
                message: format!(
                    "{} exceeds the statutory day of {} minutes",
                    policy.overtime.contracted_day_minutes, policy.overtime.statutory_day_minutes
                ),
            });
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }

    /// Returns the organization metadata.
    pub fn organization(&self) -> &OrganizationMetadata {
        self.config.organization()
    }

    /// Returns the working-time policy.
    pub fn policy(&self) -> &WorkPolicy {
        self.config.policy()
    }
}
