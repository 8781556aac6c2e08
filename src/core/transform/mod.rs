//! Layer record transformation
//!
//! This module maps one GeoNode layer record to the HDX dataset and showcase
//! that publish it. The mapping is pure: apart from the record it only reads
//! reference data fixed for the run (catalog URLs, the HDX identity and the
//! approved vocabulary), and it never performs I/O.
//!
//! - [`date`] - dataset date formatting
//! - [`tags`] - category to vocabulary tag matching
//! - [`wfs`] - WFS resource URL templating

pub mod date;
pub mod tags;
pub mod wfs;

use crate::domain::dataset::{SUBNATIONAL, UPDATE_FREQUENCY_UNKNOWN};
use crate::domain::{
    DataMappingError, Dataset, DatasetName, Group, HarvestError, RawLayerRecord, Resource,
    ResourceKind, Result, Showcase,
};
use std::sync::Arc;
use tags::VocabularyLookup;
use url::Url;
use wfs::LayerTypeName;

/// Fixed HDX identity stamped on every dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HdxIdentity {
    /// Maintainer user identifier
    pub maintainer: String,
    /// Owning organization identifier
    pub owner_org: String,
    /// Location group code, e.g. `mmr`
    pub location: String,
}

/// Joins abstract and supplemental information with a blank line
///
/// Either half is dropped when absent or empty, so the result never starts or
/// ends with the separator.
pub fn join_notes(abstract_text: Option<&str>, supplemental: Option<&str>) -> String {
    [abstract_text, supplemental]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Maps layer records to HDX datasets and showcases
///
/// # Example
///
/// ```
/// use mimu_harvester::core::transform::{HdxIdentity, LayerTransformer};
/// use mimu_harvester::core::transform::tags::ApprovedVocabulary;
/// use mimu_harvester::domain::RawLayerRecord;
/// use std::sync::Arc;
///
/// # fn example() -> mimu_harvester::domain::Result<()> {
/// let transformer = LayerTransformer::new(
///     "http://xxx/",
///     "http://geonode.themimu.info",
///     HdxIdentity {
///         maintainer: "maintainer-id".to_string(),
///         owner_org: "org-id".to_string(),
///         location: "mmr".to_string(),
///     },
///     Arc::new(ApprovedVocabulary::new("vocab-id", ["roads"])),
/// )?;
///
/// let record = RawLayerRecord::new(
///     "Myanmar Roads",
///     "/layers/geonode%3Ammr_roads",
///     "http://geonode.themimu.info/layers/geonode%3Ammr_roads",
/// )
/// .with_category("Roads");
///
/// let (dataset, showcase) = transformer.transform(&record)?;
/// assert_eq!(dataset.name, "mimu-myanmar-roads");
/// assert_eq!(showcase.name, "mimu-myanmar-roads-showcase");
/// assert_eq!(dataset.resources.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LayerTransformer {
    base_url: String,
    showcase_host: Url,
    identity: HdxIdentity,
    vocabulary: Arc<dyn VocabularyLookup>,
}

impl LayerTransformer {
    /// Creates a transformer
    ///
    /// # Arguments
    ///
    /// * `base_url` - GeoNode base URL ending in `/`; the WFS endpoint hangs off it
    /// * `showcase_host` - host that layer `detail_url` paths are resolved against
    /// * `identity` - maintainer, organization and location for every dataset
    /// * `vocabulary` - approved tag vocabulary
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `showcase_host` is not an absolute URL.
    pub fn new(
        base_url: impl Into<String>,
        showcase_host: &str,
        identity: HdxIdentity,
        vocabulary: Arc<dyn VocabularyLookup>,
    ) -> Result<Self> {
        let showcase_host = Url::parse(showcase_host).map_err(|e| {
            HarvestError::Configuration(format!("Invalid showcase host '{showcase_host}': {e}"))
        })?;

        Ok(Self {
            base_url: base_url.into(),
            showcase_host,
            identity,
            vocabulary,
        })
    }

    /// GeoNode base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Maps one layer record to its dataset and showcase
    ///
    /// # Errors
    ///
    /// Returns a [`DataMappingError`] if `title` or `distribution_url` is missing,
    /// if the date cannot be parsed, or if the distribution URL carries no layer
    /// name. Missing optional fields and unmatched tags are not errors.
    pub fn transform(
        &self,
        record: &RawLayerRecord,
    ) -> std::result::Result<(Dataset, Showcase), DataMappingError> {
        let title = required(&record.title, "title")?;
        let distribution_url = required(&record.distribution_url, "distribution_url")?;
        let abstract_text = record.abstract_str();

        let name = DatasetName::from_title(title);
        let dataset_date = record
            .date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(date::format_dataset_date)
            .transpose()?;

        let type_name = LayerTypeName::from_distribution_url(distribution_url)?;
        let endpoint = wfs::wfs_endpoint(&self.base_url);
        let resources = ResourceKind::ALL
            .iter()
            .map(|&kind| {
                Resource::api(
                    kind,
                    title,
                    wfs::feature_url(&endpoint, &type_name, kind),
                    abstract_text,
                )
            })
            .collect();

        let tags = tags::match_tags(record, self.vocabulary.as_ref());

        let showcase = Showcase {
            name: name.showcase_name(),
            title: title.to_string(),
            notes: abstract_text.unwrap_or_default().to_string(),
            url: record
                .detail_url
                .as_deref()
                .filter(|d| !d.is_empty())
                .and_then(|detail| self.showcase_host.join(detail).ok())
                .map(String::from),
            image_url: record.thumbnail_url.clone().filter(|u| !u.is_empty()),
            tags: tags.clone(),
        };

        let dataset = Dataset {
            name: name.into_inner(),
            title: title.to_string(),
            notes: join_notes(abstract_text, record.supplemental_str()),
            maintainer: self.identity.maintainer.clone(),
            owner_org: self.identity.owner_org.clone(),
            dataset_date,
            data_update_frequency: UPDATE_FREQUENCY_UNKNOWN.to_string(),
            subnational: SUBNATIONAL.to_string(),
            groups: vec![Group {
                name: self.identity.location.clone(),
            }],
            tags,
            resources,
        };

        Ok((dataset, showcase))
    }
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> std::result::Result<&'a str, DataMappingError> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(DataMappingError::MissingField(field))
}
