//! Publisher abstraction
//!
//! This module defines the trait that publishing backends implement. A
//! publisher receives one dataset and its showcase at a time and owns
//! everything that happens to them afterwards: catalog-side validation,
//! persistence and error reporting.

use crate::domain::{Dataset, Result, Showcase};
use async_trait::async_trait;

/// Publishing collaborator for harvested records
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Short backend name used in logs
    fn name(&self) -> &str;

    /// Publishes a dataset together with its showcase
    ///
    /// # Errors
    ///
    /// Returns an error if the pair cannot be published. The harvest continues
    /// with the next record.
    async fn publish(&self, dataset: &Dataset, showcase: &Showcase) -> Result<()>;
}
