//! External system integrations.
//!
//! - [`geonode`] - GeoNode layer listing (source catalog)
//! - [`publisher`] - publishing backends (target catalog)
//!
//! # Design Pattern
//!
//! Adapters isolate external systems behind traits ([`geonode::Downloader`],
//! [`publisher::Publisher`]) so the harvest can be driven by in-memory
//! implementations in tests.
//!
//! ```rust,no_run
//! use mimu_harvester::adapters::geonode::{fetch_layers, ReqwestDownloader};
//! use mimu_harvester::config::GeoNodeConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeoNodeConfig::default();
//! let downloader = ReqwestDownloader::new(&config)?;
//! let layers = fetch_layers(&config.base_url, &downloader).await?;
//! # Ok(())
//! # }
//! ```

pub mod geonode;
pub mod publisher;
