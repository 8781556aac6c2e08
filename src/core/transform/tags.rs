//! Topical tag matching against an approved vocabulary
//!
//! A layer gets at most one tag. The candidate label comes from the GeoNode
//! topic category when there is one, otherwise from a small table of markers
//! searched for in the layer's free text. The label only becomes a tag if the
//! approved vocabulary knows it.

use crate::domain::{RawLayerRecord, Tag};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Category markers and the vocabulary label each one stands for, in match order
pub const CATEGORY_TAGS: &[(&str, &str)] = &[
    ("location", "populated places - settlements"),
    ("land cover", "land use and land cover"),
];

static MARKERS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    CATEGORY_TAGS
        .iter()
        .map(|(marker, label)| {
            let words: Vec<String> = marker.split_whitespace().map(regex::escape).collect();
            let pattern = format!(r"(?i)\b{}\b", words.join(r"\s+"));
            (Regex::new(&pattern).expect("valid marker regex"), *label)
        })
        .collect()
});

/// Approved-vocabulary capability
///
/// Answers whether a tag name is approved and, if so, returns the tag as the
/// vocabulary spells it together with the vocabulary identifier.
pub trait VocabularyLookup: Send + Sync {
    /// Looks up `name`, ignoring case
    fn approved_tag(&self, name: &str) -> Option<Tag>;
}

/// In-memory approved vocabulary
///
/// # Example
///
/// ```
/// use mimu_harvester::core::transform::tags::{ApprovedVocabulary, VocabularyLookup};
///
/// let vocabulary = ApprovedVocabulary::new("vocab-1", ["land use and land cover"]);
/// let tag = vocabulary.approved_tag("Land Use and Land Cover").unwrap();
/// assert_eq!(tag.name, "land use and land cover");
/// assert_eq!(tag.vocabulary_id, "vocab-1");
/// ```
#[derive(Debug, Clone)]
pub struct ApprovedVocabulary {
    id: String,
    // lowercased name -> name as approved
    tags: HashMap<String, String>,
}

impl ApprovedVocabulary {
    pub fn new<I, S>(id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = tags
            .into_iter()
            .map(Into::into)
            .map(|name: String| (name.to_lowercase(), name))
            .collect();
        Self {
            id: id.into(),
            tags,
        }
    }

    /// Vocabulary identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of approved tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl VocabularyLookup for ApprovedVocabulary {
    fn approved_tag(&self, name: &str) -> Option<Tag> {
        self.tags
            .get(&name.trim().to_lowercase())
            .map(|approved| Tag::new(approved.clone(), self.id.clone()))
    }
}

fn marker_label(text: &str) -> Option<&'static str> {
    MARKERS
        .iter()
        .find(|(marker, _)| marker.is_match(text))
        .map(|(_, label)| *label)
}

/// Derives the tag label to look up for a record, if any
///
/// With a category, a known marker in it selects the mapped label and any other
/// category is used as the label itself. Without one, the supplemental
/// information, the title and the abstract are searched for a marker, in that
/// order.
pub fn candidate_label(record: &RawLayerRecord) -> Option<String> {
    if let Some(category) = record.category_str() {
        let label = marker_label(category)
            .map(str::to_string)
            .unwrap_or_else(|| category.trim().to_lowercase());
        return Some(label);
    }

    [
        record.supplemental_str(),
        record.title.as_deref(),
        record.abstract_str(),
    ]
    .into_iter()
    .flatten()
    .find_map(marker_label)
    .map(str::to_string)
}

/// Returns the zero-or-one approved tag for a record
pub fn match_tags(record: &RawLayerRecord, vocabulary: &dyn VocabularyLookup) -> Vec<Tag> {
    candidate_label(record)
        .and_then(|label| vocabulary.approved_tag(&label))
        .into_iter()
        .collect()
}
