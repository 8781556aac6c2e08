//! JSON file publisher
//!
//! Writes each dataset and showcase pair to `{output_dir}/{dataset name}.json`.
//! Useful for review before records are pushed to a live catalog, and as the
//! hand-off format for an external uploader.

use super::traits::Publisher;
use crate::domain::{Dataset, HarvestError, Result, Showcase};
use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct PublishedRecord<'a> {
    dataset: &'a Dataset,
    showcase: &'a Showcase,
}

/// Publisher that writes one pretty-printed JSON document per dataset
pub struct JsonFilePublisher {
    output_dir: PathBuf,
}

impl JsonFilePublisher {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory the documents are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the document for a dataset
    pub fn path_for(&self, dataset: &Dataset) -> PathBuf {
        self.output_dir.join(format!("{}.json", dataset.name))
    }
}

#[async_trait]
impl Publisher for JsonFilePublisher {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn publish(&self, dataset: &Dataset, showcase: &Showcase) -> Result<()> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                HarvestError::Publish(format!(
                    "Failed to create output directory {}: {e}",
                    self.output_dir.display()
                ))
            })?;

        let body = serde_json::to_vec_pretty(&PublishedRecord { dataset, showcase })?;
        let path = self.path_for(dataset);
        tokio::fs::write(&path, body).await.map_err(|e| {
            HarvestError::Publish(format!("Failed to write {}: {e}", path.display()))
        })?;

        tracing::debug!(
            dataset = %dataset.name,
            path = %path.display(),
            "Wrote dataset and showcase"
        );
        Ok(())
    }
}
