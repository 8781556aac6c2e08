//! Configuration management.
//!
//! The harvester reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MIMU_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - log level, dry run
//! - [`GeoNodeConfig`] - source catalog URLs and timeout
//! - [`HdxConfig`] - maintainer, organization and location for every dataset
//! - [`VocabularyConfig`] - approved tag vocabulary
//! - [`HarvestConfig`] - mapping-error policy, output directory, record limit
//! - [`LoggingConfig`] - log files
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [geonode]
//! base_url = "http://geonode.themimu.info/"
//! showcase_host = "http://geonode.themimu.info"
//!
//! [hdx]
//! maintainer = "${MIMU_MAINTAINER_ID}"
//! owner_org = "bde18602-2e92-462a-8e88-a0018a7b13f9"
//! location = "mmr"
//!
//! [vocabulary]
//! id = "4e61d464-4943-4e97-973a-84673c1aaa87"
//! tags = ["populated places - settlements", "land use and land cover"]
//!
//! [harvest]
//! on_mapping_error = "skip"
//! output_dir = "output"
//! ```
//!
//! # Validation
//!
//! ```rust,no_run
//! use mimu_harvester::config::load_config;
//!
//! match load_config("mimu.toml") {
//!     Ok(config) => println!("Harvesting {}", config.geonode.base_url),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, GeoNodeConfig, HarvestConfig, HarvesterConfig, HdxConfig, LoggingConfig,
    MappingErrorPolicy, VocabularyConfig,
};
