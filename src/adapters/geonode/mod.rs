//! GeoNode adapter
//!
//! Retrieves the layer listing from a GeoNode catalog.

pub mod downloader;
pub mod listing;

pub use downloader::{Downloader, ReqwestDownloader};
pub use listing::{fetch_layers, layers_url};
