//! HDX dataset, resource and showcase records
//!
//! These are the output side of the harvester. They serialize to the field
//! names the HDX catalog expects, and are built fresh by the transformer for
//! every layer record.

use serde::{Deserialize, Serialize};

/// Sentinel update frequency: the source publishes no schedule
pub const UPDATE_FREQUENCY_UNKNOWN: &str = "-2";

/// Flag marking a dataset as sub-national in scope
pub const SUBNATIONAL: &str = "1";

/// Tag matched against an approved vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name as spelled in the vocabulary
    pub name: String,

    /// Identifier of the vocabulary the tag belongs to
    pub vocabulary_id: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, vocabulary_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vocabulary_id: vocabulary_id.into(),
        }
    }
}

/// Location group a dataset belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
}

/// The two downloadable encodings offered for every layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Zipped ESRI shapefile
    Shapefile,
    /// GeoJSON in EPSG:4326
    GeoJson,
}

impl ResourceKind {
    /// Both kinds, in publication order
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Shapefile, ResourceKind::GeoJson];

    /// Suffix used in the resource name
    pub fn name_suffix(self) -> &'static str {
        match self {
            Self::Shapefile => "shapefile",
            Self::GeoJson => "geojson",
        }
    }

    /// Label that opens the resource description
    pub fn label(self) -> &'static str {
        match self {
            Self::Shapefile => "Zipped Shapefile",
            Self::GeoJson => "GeoJSON file",
        }
    }

    /// HDX file format
    pub fn format(self) -> &'static str {
        match self {
            Self::Shapefile => "zipped shapefile",
            Self::GeoJson => "geojson",
        }
    }
}

/// Downloadable resource attached to a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
    pub description: String,
    pub format: String,
    pub resource_type: String,
    pub url_type: String,
}

impl Resource {
    /// Builds an API resource of the given kind
    pub fn api(kind: ResourceKind, title: &str, url: String, abstract_text: Option<&str>) -> Self {
        let description = match abstract_text {
            Some(text) => format!("{}. {}", kind.label(), text),
            None => format!("{}.", kind.label()),
        };

        Self {
            name: format!("{} {}", title, kind.name_suffix()),
            url,
            description,
            format: kind.format().to_string(),
            resource_type: "api".to_string(),
            url_type: "api".to_string(),
        }
    }
}

/// HDX dataset derived from one layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub title: String,
    pub notes: String,
    pub maintainer: String,
    pub owner_org: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_date: Option<String>,
    pub data_update_frequency: String,
    pub subnational: String,
    pub groups: Vec<Group>,
    pub tags: Vec<Tag>,
    pub resources: Vec<Resource>,
}

/// HDX showcase pointing back at the GeoNode layer page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showcase {
    pub name: String,
    pub title: String,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_kind_order() {
        assert_eq!(
            ResourceKind::ALL,
            [ResourceKind::Shapefile, ResourceKind::GeoJson]
        );
    }

    #[test]
    fn test_resource_api_fields() {
        let resource = Resource::api(
            ResourceKind::GeoJson,
            "Roads",
            "http://xxx/geoserver/wfs?x".to_string(),
            Some("Main roads."),
        );

        assert_eq!(resource.name, "Roads geojson");
        assert_eq!(resource.description, "GeoJSON file. Main roads.");
        assert_eq!(resource.format, "geojson");
        assert_eq!(resource.resource_type, "api");
        assert_eq!(resource.url_type, "api");
    }

    #[test]
    fn test_resource_description_without_abstract() {
        let resource = Resource::api(ResourceKind::Shapefile, "Roads", String::new(), None);
        assert_eq!(resource.description, "Zipped Shapefile.");
    }

    #[test]
    fn test_showcase_omits_missing_image() {
        let showcase = Showcase {
            name: "mimu-x-showcase".to_string(),
            title: "X".to_string(),
            notes: String::new(),
            url: Some("http://host/layers/x".to_string()),
            image_url: None,
            tags: vec![],
        };

        let value = serde_json::to_value(&showcase).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "mimu-x-showcase",
                "title": "X",
                "notes": "",
                "url": "http://host/layers/x",
                "tags": []
            })
        );
    }
}
