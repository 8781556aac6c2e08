//! GeoNode layer listing
//!
//! One GET against `{base_url}api/layers`; the `objects` array of the response
//! is the list of raw layer records, in the order the server sent them.
//! Elements are returned undecoded so that one malformed record cannot fail
//! the listing; see [`crate::domain::RawLayerRecord::from_value`].

use super::downloader::Downloader;
use crate::domain::FetchError;
use serde::Deserialize;
use serde_json::Value;

/// Path of the layer listing relative to the catalog base URL
pub const LAYERS_PATH: &str = "api/layers";

#[derive(Debug, Deserialize)]
struct LayerListing {
    objects: Vec<Value>,
}

/// Listing endpoint for a catalog base URL
///
/// The base URL is used verbatim, so it is expected to end in `/`.
pub fn layers_url(base_url: &str) -> String {
    format!("{base_url}{LAYERS_PATH}")
}

/// Fetches every layer record from the GeoNode listing
///
/// Exactly one request is made; nothing is cached between calls.
///
/// # Errors
///
/// Returns the downloader's [`FetchError`] unchanged, or
/// [`FetchError::InvalidResponse`] if the body has no `objects` array.
///
/// # Example
///
/// ```no_run
/// use mimu_harvester::adapters::geonode::{fetch_layers, ReqwestDownloader};
/// use mimu_harvester::config::GeoNodeConfig;
///
/// # async fn example() -> mimu_harvester::domain::Result<()> {
/// let downloader = ReqwestDownloader::new(&GeoNodeConfig::default())?;
/// let layers = fetch_layers("http://geonode.themimu.info/", &downloader).await?;
/// println!("{} layers", layers.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_layers(
    base_url: &str,
    downloader: &dyn Downloader,
) -> Result<Vec<Value>, FetchError> {
    let url = layers_url(base_url);
    let body = downloader.get_json(&url).await?;

    let listing: LayerListing =
        serde_json::from_value(body).map_err(|e| FetchError::InvalidResponse {
            url: url.clone(),
            message: e.to_string(),
        })?;

    Ok(listing.objects)
}
