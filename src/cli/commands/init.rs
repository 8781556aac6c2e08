//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "mimu.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing harvester configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your HDX maintainer and organization", self.output);
                println!("  2. List the approved tags under [vocabulary]");
                println!("  3. Validate configuration: mimu-harvester validate-config");
                println!("  4. Preview: mimu-harvester harvest --dry-run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Sample configuration
    fn generate_config() -> &'static str {
        r#"# MIMU GeoNode to HDX harvester configuration
#
# Any value may reference an environment variable as ${VAR_NAME}, and any key
# may be overridden with MIMU_<SECTION>_<KEY> (MIMU_VOCABULARY_TAGS takes a
# comma-separated list).

[application]
# trace, debug, info, warn, error
log_level = "info"
# Map layers without writing output
dry_run = false

[geonode]
# Must end in "/"; the listing is {base_url}api/layers
base_url = "http://geonode.themimu.info/"
# Layer detail pages are resolved against this host for showcase links
showcase_host = "http://geonode.themimu.info"
timeout_seconds = 30

[hdx]
maintainer = "196196be-6037-4488-8b71-d786adf4c081"
owner_org = "bde18602-2e92-462a-8e88-a0018a7b13f9"
location = "mmr"

[vocabulary]
id = "4e61d464-4943-4e97-973a-84673c1aaa87"
tags = ["populated places - settlements", "land use and land cover"]

[harvest]
# "skip" records that cannot be mapped, or "abort" the run
on_mapping_error = "skip"
output_dir = "output"
# limit = 10

[logging]
local_enabled = false
local_path = "logs"
# daily, hourly, never
local_rotation = "daily"
"#
    }
}
