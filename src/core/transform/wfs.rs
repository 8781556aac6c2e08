//! WFS resource URLs
//!
//! GeoNode publishes each layer through GeoServer's WFS endpoint. The layer's
//! type-name is recovered from the last path segment of its distribution URL
//! and echoed into one GetFeature query per resource kind.

use crate::domain::{DataMappingError, ResourceKind};
use url::Url;

/// Workspace GeoNode registers its layers under
pub const NAMESPACE: &str = "geonode";

/// Percent-encoded separator between workspace and layer name
pub const ENCODED_SEPARATOR: &str = "%3A";

/// Path of the WFS endpoint relative to the catalog base URL
pub const WFS_PATH: &str = "geoserver/wfs";

/// GeoServer layer type-name, without its workspace prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerTypeName(String);

impl LayerTypeName {
    /// Extracts the type-name from a GeoNode layer page URL
    ///
    /// The workspace prefix is optional in the URL; both the encoded and the
    /// literal `:` separator are accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use mimu_harvester::core::transform::wfs::LayerTypeName;
    ///
    /// let name = LayerTypeName::from_distribution_url(
    ///     "http://geonode.themimu.info/layers/geonode%3Ammr_town_2019_july",
    /// )
    /// .unwrap();
    /// assert_eq!(name.as_str(), "mmr_town_2019_july");
    /// assert_eq!(name.qualified(), "geonode%3Ammr_town_2019_july");
    /// ```
    pub fn from_distribution_url(distribution_url: &str) -> Result<Self, DataMappingError> {
        let invalid = |reason: &str| DataMappingError::InvalidDistributionUrl {
            value: distribution_url.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(distribution_url).map_err(|e| invalid(&e.to_string()))?;
        let segment = url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .ok_or_else(|| invalid("no layer segment in path"))?;

        let name = strip_namespace(segment);
        if name.is_empty() {
            return Err(invalid("empty layer name"));
        }

        Ok(Self(name.to_string()))
    }

    /// Layer name without the workspace
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Workspace-qualified, percent-encoded type-name as GeoServer expects it
    pub fn qualified(&self) -> String {
        format!("{NAMESPACE}{ENCODED_SEPARATOR}{}", self.0)
    }
}

fn strip_namespace(segment: &str) -> &str {
    let Some(rest) = segment.strip_prefix(NAMESPACE) else {
        return segment;
    };
    ["%3A", "%3a", ":"]
        .iter()
        .find_map(|separator| rest.strip_prefix(separator))
        .unwrap_or(segment)
}

/// WFS endpoint for a catalog base URL ending in `/`
pub fn wfs_endpoint(base_url: &str) -> String {
    format!("{base_url}{WFS_PATH}")
}

/// GetFeature query for one resource kind
///
/// # Example
///
/// ```
/// use mimu_harvester::core::transform::wfs::{feature_url, LayerTypeName};
/// use mimu_harvester::domain::ResourceKind;
///
/// let name = LayerTypeName::from_distribution_url("http://h/layers/geonode%3Aroads").unwrap();
/// let url = feature_url("http://xxx/geoserver/wfs", &name, ResourceKind::GeoJson);
/// assert!(url.contains("outputFormat=json"));
/// ```
pub fn feature_url(endpoint: &str, type_name: &LayerTypeName, kind: ResourceKind) -> String {
    let format_params = match kind {
        ResourceKind::Shapefile => "format_options=charset:UTF-8",
        ResourceKind::GeoJson => "srsName=EPSG%3A4326",
    };
    let output_format = match kind {
        ResourceKind::Shapefile => "SHAPE-ZIP",
        ResourceKind::GeoJson => "json",
    };

    format!(
        "{endpoint}?{format_params}&typename={}&outputFormat={output_format}&version=1.0.0&service=WFS&request=GetFeature",
        type_name.qualified()
    )
}
