//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::core::transform::tags::ApprovedVocabulary;
use crate::core::transform::HdxIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Main harvester configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvesterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Source GeoNode catalog
    #[serde(default)]
    pub geonode: GeoNodeConfig,

    /// Fixed HDX identity stamped on every dataset
    pub hdx: HdxConfig,

    /// Approved tag vocabulary
    pub vocabulary: VocabularyConfig,

    /// Harvest run settings
    #[serde(default)]
    pub harvest: HarvestConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HarvesterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.geonode.validate()?;
        self.hdx.validate()?;
        self.vocabulary.validate()?;
        self.harvest.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (transform but don't publish)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// GeoNode catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoNodeConfig {
    /// Base URL of the GeoNode catalog, ending in `/`
    ///
    /// The listing endpoint is `{base_url}api/layers` and the WFS endpoint is
    /// `{base_url}geoserver/wfs`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Host that layer detail paths are resolved against for showcase links
    #[serde(default = "default_showcase_host")]
    pub showcase_host: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl GeoNodeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("geonode.base_url cannot be empty".to_string());
        }

        if !is_http_url(&self.base_url) {
            return Err("geonode.base_url must start with http:// or https://".to_string());
        }

        if !self.base_url.ends_with('/') {
            return Err(format!(
                "geonode.base_url must end with '/', got '{}'",
                self.base_url
            ));
        }

        if !is_http_url(&self.showcase_host) {
            return Err("geonode.showcase_host must start with http:// or https://".to_string());
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 600 {
            return Err(format!(
                "geonode.timeout_seconds must be between 1 and 600, got {}",
                self.timeout_seconds
            ));
        }

        Ok(())
    }
}

impl Default for GeoNodeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            showcase_host: default_showcase_host(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// HDX identity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HdxConfig {
    /// Maintainer user id (UUID)
    pub maintainer: String,

    /// Owning organization id (UUID)
    pub owner_org: String,

    /// Location group code
    #[serde(default = "default_location")]
    pub location: String,
}

impl HdxConfig {
    fn validate(&self) -> Result<(), String> {
        Uuid::parse_str(&self.maintainer).map_err(|e| {
            format!("hdx.maintainer must be a UUID, got '{}': {e}", self.maintainer)
        })?;

        Uuid::parse_str(&self.owner_org)
            .map_err(|e| format!("hdx.owner_org must be a UUID, got '{}': {e}", self.owner_org))?;

        if self.location.trim().is_empty() {
            return Err("hdx.location cannot be empty".to_string());
        }

        Ok(())
    }

    /// Identity passed to the transformer
    pub fn identity(&self) -> HdxIdentity {
        HdxIdentity {
            maintainer: self.maintainer.clone(),
            owner_org: self.owner_org.clone(),
            location: self.location.clone(),
        }
    }
}

/// Approved vocabulary configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Vocabulary identifier attached to every matched tag
    pub id: String,

    /// Approved tag names
    #[serde(default)]
    pub tags: Vec<String>,
}

impl VocabularyConfig {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("vocabulary.id cannot be empty".to_string());
        }

        if let Some(blank) = self.tags.iter().position(|t| t.trim().is_empty()) {
            return Err(format!("vocabulary.tags[{blank}] cannot be empty"));
        }

        Ok(())
    }

    /// Builds the in-memory vocabulary
    pub fn to_vocabulary(&self) -> ApprovedVocabulary {
        ApprovedVocabulary::new(self.id.clone(), self.tags.iter().cloned())
    }
}

/// What to do with a record that cannot be mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MappingErrorPolicy {
    /// Record the failure and continue with the next record
    #[default]
    Skip,
    /// Stop the harvest at the first failure
    Abort,
}

impl FromStr for MappingErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            _ => Err(format!(
                "Invalid on_mapping_error '{s}'. Expected 'skip' or 'abort'"
            )),
        }
    }
}

impl fmt::Display for MappingErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

/// Harvest run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Policy for records that fail to map
    #[serde(default)]
    pub on_mapping_error: MappingErrorPolicy,

    /// Directory the JSON publisher writes to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Harvest at most this many records (all when unset)
    #[serde(default)]
    pub limit: Option<usize>,
}

impl HarvestConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("harvest.output_dir cannot be empty".to_string());
        }

        if self.limit == Some(0) {
            return Err("harvest.limit must be at least 1 when set".to_string());
        }

        Ok(())
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            on_mapping_error: MappingErrorPolicy::default(),
            output_dir: default_output_dir(),
            limit: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON log files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// File rotation (daily, hourly, never)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled is true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://geonode.themimu.info/".to_string()
}

fn default_showcase_host() -> String {
    "http://geonode.themimu.info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_location() -> String {
    "mmr".to_string()
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
