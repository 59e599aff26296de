//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tracking
//! policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PolicyFile, TrackingPolicy};

/// Loads and provides access to the tracking policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/tracking/
/// └── policy.yaml   # Night window and day-close settings
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tracking").unwrap();
/// println!("Night window opens at {}", loader.policy().night_window.start);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: TrackingPolicy,
}

impl ConfigLoader {
    /// Loads the policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/tracking")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` is missing
    /// - the file contains invalid YAML
    /// - the policy fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let file = Self::load_yaml::<PolicyFile>(&policy_path)?;

        file.policy.validate()?;

        Ok(Self {
            policy: file.policy,
        })
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

    /// Returns the loaded tracking policy.
    pub fn policy(&self) -> &TrackingPolicy {
        &self.policy
    }
}
