// MIMU Harvester - GeoNode to HDX metadata harvester
// Copyright (c) 2025 MIMU Harvester Contributors
// Licensed under the MIT License

//! # MIMU Harvester
//!
//! Harvests geospatial layer metadata from the MIMU GeoNode catalog and maps each
//! layer to an HDX dataset plus a companion showcase.
//!
//! ## Overview
//!
//! This library provides:
//! - **Fetching** the layer listing from `{base_url}api/layers`
//! - **Transforming** each layer into a dataset with two WFS resources (zipped
//!   shapefile and GeoJSON), tags from an approved vocabulary, and a showcase
//! - **Publishing** each pair through a pluggable [`adapters::publisher::Publisher`]
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (transform, harvest orchestration)
//! - [`adapters`] - External integrations (GeoNode, publishers)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mimu_harvester::adapters::geonode::ReqwestDownloader;
//! use mimu_harvester::adapters::publisher::JsonFilePublisher;
//! use mimu_harvester::config::load_config;
//! use mimu_harvester::core::harvest::HarvestCoordinator;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("mimu.toml")?;
//!
//!     let downloader = Arc::new(ReqwestDownloader::new(&config.geonode)?);
//!     let publisher = Arc::new(JsonFilePublisher::new(&config.harvest.output_dir));
//!     let coordinator = HarvestCoordinator::new(&config, downloader, publisher)?;
//!
//!     let summary = coordinator.execute().await?;
//!     println!("Published {} datasets", summary.published);
//!     Ok(())
//! }
//! ```
//!
//! ## Transforming a single layer
//!
//! ```rust
//! use mimu_harvester::core::transform::{HdxIdentity, LayerTransformer};
//! use mimu_harvester::core::transform::tags::ApprovedVocabulary;
//! use mimu_harvester::domain::RawLayerRecord;
//! use std::sync::Arc;
//!
//! # fn example() -> mimu_harvester::domain::Result<()> {
//! let vocabulary = ApprovedVocabulary::new(
//!     "4e61d464-4943-4e97-973a-84673c1aaa87",
//!     ["populated places - settlements".to_string()],
//! );
//! let transformer = LayerTransformer::new(
//!     "http://xxx/",
//!     "http://geonode.themimu.info",
//!     HdxIdentity {
//!         maintainer: "196196be-6037-4488-8b71-d786adf4c081".to_string(),
//!         owner_org: "bde18602-2e92-462a-8e88-a0018a7b13f9".to_string(),
//!         location: "mmr".to_string(),
//!     },
//!     Arc::new(vocabulary),
//! )?;
//!
//! let record = RawLayerRecord::new(
//!     "Myanmar Town 2019 July",
//!     "/layers/geonode%3Ammr_town_2019_july",
//!     "http://geonode.themimu.info/layers/geonode%3Ammr_town_2019_july",
//! )
//! .with_category("Location");
//!
//! let (dataset, showcase) = transformer.transform(&record)?;
//! assert_eq!(dataset.name, "mimu-myanmar-town-2019-july");
//! assert_eq!(showcase.name, "mimu-myanmar-town-2019-july-showcase");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
