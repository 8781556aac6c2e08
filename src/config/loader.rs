//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HarvesterConfig;
use crate::domain::errors::HarvestError;
use crate::domain::result::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static ENV_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid regex"));

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into HarvesterConfig
/// 4. Applies environment variable overrides (MIMU_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read, a referenced
/// environment variable is unset, parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use mimu_harvester::config::loader::load_config;
///
/// let config = load_config("mimu.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HarvesterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HarvestError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        HarvestError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses, overrides and validates configuration from TOML text
///
/// # Errors
///
/// Same as [`load_config`], minus the file access.
pub fn parse_config(contents: &str) -> Result<HarvesterConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: HarvesterConfig = toml::from_str(&contents)
        .map_err(|e| HarvestError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        HarvestError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error naming every referenced environment variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in ENV_PLACEHOLDER.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(HarvestError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using MIMU_* prefix
///
/// Environment variables follow the pattern: MIMU_<SECTION>_<KEY>
/// For example: MIMU_GEONODE_BASE_URL, MIMU_HDX_OWNER_ORG. MIMU_VOCABULARY_TAGS
/// takes a comma-separated list.
fn apply_env_overrides(config: &mut HarvesterConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("MIMU_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("MIMU_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // GeoNode overrides
    if let Ok(val) = std::env::var("MIMU_GEONODE_BASE_URL") {
        config.geonode.base_url = val;
    }
    if let Ok(val) = std::env::var("MIMU_GEONODE_SHOWCASE_HOST") {
        config.geonode.showcase_host = val;
    }
    if let Ok(val) = std::env::var("MIMU_GEONODE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.geonode.timeout_seconds = timeout;
        }
    }

    // HDX overrides
    if let Ok(val) = std::env::var("MIMU_HDX_MAINTAINER") {
        config.hdx.maintainer = val;
    }
    if let Ok(val) = std::env::var("MIMU_HDX_OWNER_ORG") {
        config.hdx.owner_org = val;
    }
    if let Ok(val) = std::env::var("MIMU_HDX_LOCATION") {
        config.hdx.location = val;
    }

    // Vocabulary overrides
    if let Ok(val) = std::env::var("MIMU_VOCABULARY_ID") {
        config.vocabulary.id = val;
    }
    if let Ok(val) = std::env::var("MIMU_VOCABULARY_TAGS") {
        config.vocabulary.tags = val
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
    }

    // Harvest overrides
    if let Ok(val) = std::env::var("MIMU_HARVEST_ON_MAPPING_ERROR") {
        config.harvest.on_mapping_error = val.parse().map_err(HarvestError::Configuration)?;
    }
    if let Ok(val) = std::env::var("MIMU_HARVEST_OUTPUT_DIR") {
        config.harvest.output_dir = val;
    }
    if let Ok(val) = std::env::var("MIMU_HARVEST_LIMIT") {
        let limit = val.parse().map_err(|e| {
            HarvestError::Configuration(format!("Invalid MIMU_HARVEST_LIMIT '{val}': {e}"))
        })?;
        config.harvest.limit = Some(limit);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("MIMU_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("MIMU_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("MIMU_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
