//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the harvester configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loading already validates, so a loaded configuration is a valid one.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  GeoNode: {}", config.geonode.base_url);
        println!("  Showcase Host: {}", config.geonode.showcase_host);
        println!("  Timeout: {}s", config.geonode.timeout_seconds);
        println!("  Maintainer: {}", config.hdx.maintainer);
        println!("  Organization: {}", config.hdx.owner_org);
        println!("  Location: {}", config.hdx.location);
        println!(
            "  Vocabulary: {} ({} tags)",
            config.vocabulary.id,
            config.vocabulary.tags.len()
        );
        println!("  On Mapping Error: {}", config.harvest.on_mapping_error);
        println!("  Output Directory: {}", config.harvest.output_dir);
        if let Some(limit) = config.harvest.limit {
            println!("  Limit: {limit}");
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let args = ValidateArgs {};
        let code = args.execute("/nonexistent/mimu.toml").await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[hdx]
maintainer = "196196be-6037-4488-8b71-d786adf4c081"
owner_org = "bde18602-2e92-462a-8e88-a0018a7b13f9"

[vocabulary]
id = "4e61d464-4943-4e97-973a-84673c1aaa87"
"#
        )
        .unwrap();

        let args = ValidateArgs {};
        let code = args.execute(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_rejects_bad_uuid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[hdx]
maintainer = "not-a-uuid"
owner_org = "bde18602-2e92-462a-8e88-a0018a7b13f9"

[vocabulary]
id = "4e61d464-4943-4e97-973a-84673c1aaa87"
"#
        )
        .unwrap();

        let args = ValidateArgs {};
        let code = args.execute(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(code, 2);
    }
}
