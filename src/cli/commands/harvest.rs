//! Harvest command implementation
//!
//! Fetches the GeoNode layer listing, maps every layer to an HDX dataset and
//! showcase, and writes each pair through the JSON file publisher.

use crate::adapters::geonode::ReqwestDownloader;
use crate::adapters::publisher::JsonFilePublisher;
use crate::config::{load_config, HarvesterConfig};
use crate::core::harvest::{HarvestCoordinator, HarvestSummary};
use crate::domain::HarvestError;
use clap::Args;
use std::sync::Arc;

/// Arguments for the harvest command
#[derive(Args, Debug, Default)]
pub struct HarvestArgs {
    /// Dry run mode - map layers without writing any output
    #[arg(long)]
    pub dry_run: bool,

    /// Override the output directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<String>,

    /// Only process the first N layers of the listing
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

impl HarvestArgs {
    /// Execute the harvest command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting harvest command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        if config.application.dry_run {
            tracing::info!("Dry run mode enabled - nothing will be written");
            println!("🔍 DRY RUN MODE - No datasets will be written");
            println!();
        }

        let downloader = match ReqwestDownloader::new(&config.geonode) {
            Ok(d) => Arc::new(d),
            Err(e) => {
                tracing::error!(error = %e, "Failed to build HTTP client");
                eprintln!("Failed to initialize harvest: {e}");
                return Ok(5);
            }
        };
        let publisher = Arc::new(JsonFilePublisher::new(&config.harvest.output_dir));

        let coordinator = match HarvestCoordinator::new(&config, downloader, publisher) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create harvest coordinator");
                eprintln!("Failed to initialize harvest: {e}");
                return Ok(2);
            }
        };

        println!("🚀 Harvesting {}", config.geonode.base_url);
        println!();

        let summary = match coordinator.execute().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Harvest failed");
                eprintln!("Harvest failed: {e}");
                return Ok(exit_code_for_error(&e));
            }
        };

        Self::print_summary(&summary, &config.harvest.output_dir);
        Ok(exit_code_for_summary(&summary))
    }

    fn apply_overrides(&self, config: &mut HarvesterConfig) {
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding output directory from CLI");
            config.harvest.output_dir = output.clone();
        }

        if let Some(limit) = self.limit {
            tracing::info!(limit, "Limiting harvest from CLI");
            config.harvest.limit = Some(limit);
        }
    }

    fn print_summary(summary: &HarvestSummary, output_dir: &str) {
        println!("📊 Harvest Summary:");
        println!("  Layers: {}", summary.total_records);
        println!("  Transformed: {}", summary.transformed);
        if summary.dry_run {
            println!("  Published: - (dry run)");
        } else {
            println!("  Published: {} (to {output_dir})", summary.published);
        }
        println!("  Skipped: {}", summary.skipped);
        println!("  Failed: {}", summary.failed);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Success Rate: {:.2}%", summary.success_rate());
        println!();

        if !summary.errors.is_empty() {
            println!("⚠️  Errors encountered:");
            for error in &summary.errors {
                let title = error.title.as_deref().unwrap_or("<untitled>");
                println!(
                    "  - [{}] {:?} {title}: {}",
                    error.index, error.stage, error.message
                );
            }
            println!();
        }

        if summary.is_successful() {
            println!("✅ Harvest completed successfully!");
        } else {
            println!("⚠️  Harvest completed with problems");
        }
    }
}

/// Exit code for a harvest that stopped early
fn exit_code_for_error(error: &HarvestError) -> i32 {
    match error {
        HarvestError::Configuration(_) => 2,
        HarvestError::Fetch(_) => 4,
        HarvestError::DataMapping(_) => 1,
        _ => 5,
    }
}

/// Exit code for a harvest that ran to the end
fn exit_code_for_summary(summary: &HarvestSummary) -> i32 {
    if summary.is_successful() {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::domain::{DataMappingError, FetchError};

    #[test]
    fn test_harvest_args_defaults() {
        let args = HarvestArgs::default();
        assert!(!args.dry_run);
        assert!(args.output.is_none());
        assert!(args.limit.is_none());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = parse_config(
            r#"
[hdx]
maintainer = "196196be-6037-4488-8b71-d786adf4c081"
owner_org = "bde18602-2e92-462a-8e88-a0018a7b13f9"

[vocabulary]
id = "4e61d464-4943-4e97-973a-84673c1aaa87"
"#,
        )
        .unwrap();

        let args = HarvestArgs {
            dry_run: true,
            output: Some("elsewhere".to_string()),
            limit: Some(2),
        };
        args.apply_overrides(&mut config);

        assert!(config.application.dry_run);
        assert_eq!(config.harvest.output_dir, "elsewhere");
        assert_eq!(config.harvest.limit, Some(2));
    }

    #[test]
    fn test_exit_code_for_error() {
        let fetch = HarvestError::Fetch(FetchError::HttpStatus {
            url: "http://xxx/api/layers".to_string(),
            status: 503,
        });
        assert_eq!(exit_code_for_error(&fetch), 4);
        assert_eq!(
            exit_code_for_error(&HarvestError::DataMapping(DataMappingError::MissingField(
                "title"
            ))),
            1
        );
        assert_eq!(
            exit_code_for_error(&HarvestError::Configuration("bad".to_string())),
            2
        );
        assert_eq!(exit_code_for_error(&HarvestError::Io("disk".to_string())), 5);
    }

    #[test]
    fn test_exit_code_for_summary() {
        let clean = HarvestSummary::new();
        assert_eq!(exit_code_for_summary(&clean), 0);

        let partial = HarvestSummary {
            total_records: 2,
            skipped: 1,
            ..Default::default()
        };
        assert_eq!(exit_code_for_summary(&partial), 1);
    }
}
