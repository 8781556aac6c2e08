//! Raw GeoNode layer records
//!
//! A [`RawLayerRecord`] is one element of the `objects` array returned by the
//! GeoNode `api/layers` listing. Every field decodes leniently: missing keys and
//! JSON `null` both become `None`, and keys we do not use are ignored. The
//! listing hands elements over undecoded; each one goes through
//! [`RawLayerRecord::from_value`] on its own and required fields are enforced by
//! the transformer, so a single bad record surfaces as a mapping error instead
//! of failing the whole listing.

use super::errors::DataMappingError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One layer-metadata record as served by GeoNode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLayerRecord {
    /// Layer title
    pub title: Option<String>,

    /// Layer abstract
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    /// Free-text supplemental information
    pub supplemental_information: Option<String>,

    /// ISO 8601 date or date-time
    pub date: Option<String>,

    /// Catalog-relative path of the layer page, e.g. `/layers/geonode%3Amy_layer`
    pub detail_url: Option<String>,

    /// Absolute URL of the layer page
    pub distribution_url: Option<String>,

    /// Absolute URL of the layer thumbnail
    pub thumbnail_url: Option<String>,

    /// GeoNode topic category description
    #[serde(rename = "category__gn_description")]
    pub category: Option<String>,

    /// GeoNode layer UUID
    pub uuid: Option<String>,
}

impl RawLayerRecord {
    /// Creates a record with the three fields GeoNode always fills
    pub fn new(
        title: impl Into<String>,
        detail_url: impl Into<String>,
        distribution_url: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            detail_url: Some(detail_url.into()),
            distribution_url: Some(distribution_url.into()),
            ..Default::default()
        }
    }

    /// Decodes one element of the listing's `objects` array
    ///
    /// # Errors
    ///
    /// Returns [`DataMappingError::MalformedRecord`] if the element is not an
    /// object or a known field has a non-string value.
    pub fn from_value(value: &Value) -> Result<Self, DataMappingError> {
        Self::deserialize(value).map_err(|e| DataMappingError::MalformedRecord {
            message: e.to_string(),
        })
    }

    /// Sets the abstract
    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = Some(text.into());
        self
    }

    /// Sets the supplemental information
    pub fn with_supplemental_information(mut self, text: impl Into<String>) -> Self {
        self.supplemental_information = Some(text.into());
        self
    }

    /// Sets the date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the thumbnail URL
    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Sets the topic category description
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the layer UUID
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    /// Abstract, treating an empty string as absent
    pub fn abstract_str(&self) -> Option<&str> {
        non_empty(&self.abstract_text)
    }

    /// Supplemental information, treating an empty string as absent
    pub fn supplemental_str(&self) -> Option<&str> {
        non_empty(&self.supplemental_information)
    }

    /// Category, treating an empty string as absent
    pub fn category_str(&self) -> Option<&str> {
        non_empty(&self.category)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
