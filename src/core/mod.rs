//! Core business logic for the harvester.
//!
//! # Modules
//!
//! - [`transform`] - Pure mapping from a GeoNode layer to an HDX dataset and showcase
//! - [`harvest`] - Harvest orchestration and reporting
//!
//! # Harvest Workflow
//!
//! 1. **Fetch**: Read the layer listing from `{base_url}api/layers` once
//! 2. **Transform**: Map each layer in listing order
//! 3. **Publish**: Hand each dataset and showcase to the publisher (skipped in dry-run)
//! 4. **Report**: Log and return the harvest summary

pub mod harvest;
pub mod transform;
