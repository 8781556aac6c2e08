//! Domain models and types for the harvester.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Input records** ([`RawLayerRecord`]) as served by the GeoNode listing
//! - **Output records** ([`Dataset`], [`Resource`], [`Showcase`], [`Tag`]) in HDX shape
//! - **Identifiers** ([`DatasetName`]) derived from layer titles
//! - **Error types** ([`HarvestError`], [`FetchError`], [`DataMappingError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! Fallible operations return [`Result<T, HarvestError>`], except the transformer
//! which reports the narrower [`DataMappingError`] so callers can apply a per-record
//! policy:
//!
//! ```rust
//! use mimu_harvester::domain::{DataMappingError, HarvestError, Result};
//!
//! fn example() -> Result<()> {
//!     let err = DataMappingError::MissingField("title");
//!     // Mapping errors lift into HarvestError with the ? operator
//!     Err::<(), _>(err)?;
//!     Ok(())
//! }
//! ```

pub mod dataset;
pub mod errors;
pub mod ids;
pub mod layer;
pub mod result;

// Re-export commonly used types for convenience
pub use dataset::{Dataset, Group, Resource, ResourceKind, Showcase, Tag};
pub use errors::{DataMappingError, FetchError, HarvestError};
pub use ids::DatasetName;
pub use layer::RawLayerRecord;
pub use result::Result;
