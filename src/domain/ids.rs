//! Catalog identifier types
//!
//! HDX dataset and showcase names are URL-safe slugs derived from the layer
//! title. [`DatasetName`] wraps that derivation so a name can only be built
//! from a title or from a string that is already a valid slug.

use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Token identifying the source catalog in every dataset name
pub const SOURCE_PREFIX: &str = "mimu";

/// Suffix appended to a dataset name to name its showcase
pub const SHOWCASE_SUFFIX: &str = "-showcase";

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Transliterates `text` to ASCII, lowercases it, drops apostrophes, collapses
/// every run of other non-alphanumeric characters to a single hyphen and trims
/// hyphens from both ends.
///
/// Applying it to its own output returns the same string.
///
/// # Examples
///
/// ```
/// use mimu_harvester::domain::ids::slugify;
///
/// assert_eq!(slugify("Myanmar 2002-2014 Forest Cover Change"), "myanmar-2002-2014-forest-cover-change");
/// assert_eq!(slugify("Café Roads"), "cafe-roads");
/// assert_eq!(slugify(&slugify("  A -- B  ")), "a-b");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = deunicode(text).to_lowercase().replace('\'', "");
    NON_ALNUM
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// HDX dataset name newtype wrapper
///
/// # Examples
///
/// ```
/// use mimu_harvester::domain::ids::DatasetName;
///
/// let name = DatasetName::from_title("Myanmar Town 2019 July");
/// assert_eq!(name.as_str(), "mimu-myanmar-town-2019-july");
/// assert_eq!(name.showcase_name(), "mimu-myanmar-town-2019-july-showcase");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetName(String);

impl DatasetName {
    /// Derives the dataset name for a layer title
    pub fn from_title(title: &str) -> Self {
        let slug = slugify(title);
        if slug.is_empty() {
            Self(SOURCE_PREFIX.to_string())
        } else {
            Self(format!("{SOURCE_PREFIX}-{slug}"))
        }
    }

    /// Creates a DatasetName from a string that must already be a slug
    ///
    /// # Returns
    ///
    /// Returns `Ok(DatasetName)` if the value is a non-empty slug, `Err` otherwise
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Dataset name cannot be empty".to_string());
        }
        if slugify(&name) != name {
            return Err(format!(
                "Invalid dataset name '{name}'. Expected lowercase letters, digits and single hyphens"
            ));
        }
        Ok(Self(name))
    }

    /// Returns the dataset name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Name of the showcase that accompanies this dataset
    pub fn showcase_name(&self) -> String {
        format!("{}{}", self.0, SHOWCASE_SUFFIX)
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatasetName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DatasetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
