//! Harvest coordinator - drives one pass over the GeoNode listing
//!
//! Fetch once, map each record, hand each pair to the publisher. Records are
//! processed strictly in listing order, one at a time.

use super::summary::{HarvestSummary, RecordError, RecordStage};
use crate::adapters::geonode::{fetch_layers, Downloader};
use crate::adapters::publisher::Publisher;
use crate::config::{HarvesterConfig, MappingErrorPolicy};
use crate::core::transform::LayerTransformer;
use crate::domain::{HarvestError, RawLayerRecord, Result};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Harvest coordinator
pub struct HarvestCoordinator {
    transformer: LayerTransformer,
    downloader: Arc<dyn Downloader>,
    publisher: Arc<dyn Publisher>,
    policy: MappingErrorPolicy,
    dry_run: bool,
    limit: Option<usize>,
}

impl HarvestCoordinator {
    /// Create a coordinator from configuration and its two collaborators
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the transformer cannot be built.
    pub fn new(
        config: &HarvesterConfig,
        downloader: Arc<dyn Downloader>,
        publisher: Arc<dyn Publisher>,
    ) -> Result<Self> {
        let transformer = LayerTransformer::new(
            config.geonode.base_url.clone(),
            &config.geonode.showcase_host,
            config.hdx.identity(),
            Arc::new(config.vocabulary.to_vocabulary()),
        )?;

        Ok(Self {
            transformer,
            downloader,
            publisher,
            policy: config.harvest.on_mapping_error,
            dry_run: config.application.dry_run,
            limit: config.harvest.limit,
        })
    }

    /// Execute the harvest
    ///
    /// # Errors
    ///
    /// Returns the fetch error if the listing cannot be retrieved, and the
    /// first mapping error when the policy is [`MappingErrorPolicy::Abort`].
    /// Publish failures are recorded in the summary instead.
    pub async fn execute(&self) -> Result<HarvestSummary> {
        let start_time = Instant::now();
        let mut summary = HarvestSummary {
            dry_run: self.dry_run,
            ..HarvestSummary::new()
        };

        tracing::info!(
            base_url = %self.transformer.base_url(),
            publisher = self.publisher.name(),
            dry_run = self.dry_run,
            "Starting harvest"
        );

        let mut layers = fetch_layers(self.transformer.base_url(), self.downloader.as_ref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch layer listing"))?;

        tracing::info!(count = layers.len(), "Fetched layer listing");

        if let Some(limit) = self.limit {
            layers.truncate(limit);
        }
        summary.total_records = layers.len();

        for (index, value) in layers.iter().enumerate() {
            let title = value.get("title").and_then(Value::as_str);

            let mapped = RawLayerRecord::from_value(value)
                .and_then(|record| self.transformer.transform(&record));
            let (dataset, showcase) = match mapped {
                Ok(pair) => pair,
                Err(e) => {
                    if self.policy == MappingErrorPolicy::Abort {
                        tracing::error!(index, title = ?title, error = %e, "Aborting harvest");
                        return Err(HarvestError::DataMapping(e));
                    }
                    crate::log_record_skipped!(index, title, &e);
                    summary.skipped += 1;
                    summary.add_error(
                        RecordError::new(RecordStage::Transform, index, e.to_string())
                            .with_title(title),
                    );
                    continue;
                }
            };

            summary.transformed += 1;
            summary.dataset_names.push(dataset.name.clone());
            tracing::debug!(
                index,
                dataset = %dataset.name,
                tags = dataset.tags.len(),
                "Transformed layer record"
            );

            if self.dry_run {
                continue;
            }

            match self.publisher.publish(&dataset, &showcase).await {
                Ok(()) => {
                    summary.published += 1;
                    tracing::info!(dataset = %dataset.name, "Published dataset and showcase");
                }
                Err(e) => {
                    tracing::error!(dataset = %dataset.name, error = %e, "Failed to publish");
                    summary.failed += 1;
                    summary.add_error(
                        RecordError::new(RecordStage::Publish, index, e.to_string())
                            .with_title(title),
                    );
                }
            }
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::domain::{DataMappingError, Dataset, FetchError, Showcase};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    const CONFIG: &str = r#"
[geonode]
base_url = "http://xxx/"

[hdx]
maintainer = "196196be-6037-4488-8b71-d786adf4c081"
owner_org = "bde18602-2e92-462a-8e88-a0018a7b13f9"

[vocabulary]
id = "4e61d464-4943-4e97-973a-84673c1aaa87"
tags = ["populated places - settlements"]
"#;

    struct StubDownloader(std::result::Result<Value, ()>);

    #[async_trait]
    impl Downloader for StubDownloader {
        async fn get_json(&self, url: &str) -> std::result::Result<Value, FetchError> {
            self.0.clone().map_err(|_| FetchError::ConnectionFailed {
                url: url.to_string(),
                message: "refused".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingPublisher {
        published: Mutex<Vec<String>>,
        reject: Option<String>,
    }

    #[async_trait]
    impl Publisher for RecordingPublisher {
        fn name(&self) -> &str {
            "recording"
        }

        async fn publish(&self, dataset: &Dataset, _showcase: &Showcase) -> Result<()> {
            if self.reject.as_deref() == Some(dataset.name.as_str()) {
                return Err(HarvestError::Publish("rejected".to_string()));
            }
            self.published.lock().unwrap().push(dataset.name.clone());
            Ok(())
        }
    }

    fn listing() -> Value {
        json!({"objects": [
            {"title": "Roads", "distribution_url": "http://h/layers/geonode%3Aroads", "detail_url": "/layers/geonode%3Aroads"},
            {"title": "Broken", "distribution_url": "http://h/layers/geonode%3Abroken", "date": "soon"},
            {"title": "Rivers", "distribution_url": "http://h/layers/geonode%3Arivers"}
        ]})
    }

    fn coordinator(
        config: &HarvesterConfig,
        body: std::result::Result<Value, ()>,
        publisher: Arc<RecordingPublisher>,
    ) -> HarvestCoordinator {
        HarvestCoordinator::new(config, Arc::new(StubDownloader(body)), publisher).unwrap()
    }

    #[tokio::test]
    async fn test_skip_policy_continues_past_bad_record() {
        let config = parse_config(CONFIG).unwrap();
        let publisher = Arc::new(RecordingPublisher::default());

        let summary = coordinator(&config, Ok(listing()), publisher.clone())
            .execute()
            .await
            .unwrap();

        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.transformed, 2);
        assert_eq!(summary.published, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errors[0].index, 1);
        assert_eq!(summary.errors[0].stage, RecordStage::Transform);
        assert_eq!(
            *publisher.published.lock().unwrap(),
            vec!["mimu-roads".to_string(), "mimu-rivers".to_string()]
        );
    }

    #[tokio::test]
    async fn test_badly_typed_record_is_skipped() {
        let config = parse_config(CONFIG).unwrap();
        let publisher = Arc::new(RecordingPublisher::default());
        let body = json!({"objects": [
            {"title": "Roads", "distribution_url": "http://h/layers/geonode%3Aroads"},
            {"title": "Odd", "distribution_url": "http://h/layers/geonode%3Aodd", "date": 20190805}
        ]});

        let summary = coordinator(&config, Ok(body), publisher.clone())
            .execute()
            .await
            .unwrap();

        assert_eq!(summary.published, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errors[0].index, 1);
        assert_eq!(summary.errors[0].title.as_deref(), Some("Odd"));
        assert!(summary.errors[0].message.contains("Malformed layer record"));
        assert_eq!(
            *publisher.published.lock().unwrap(),
            vec!["mimu-roads".to_string()]
        );
    }

    #[tokio::test]
    async fn test_badly_typed_record_aborts_under_abort_policy() {
        let mut config = parse_config(CONFIG).unwrap();
        config.harvest.on_mapping_error = MappingErrorPolicy::Abort;
        let publisher = Arc::new(RecordingPublisher::default());
        let body = json!({"objects": ["not a record"]});

        let err = coordinator(&config, Ok(body), publisher)
            .execute()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            HarvestError::DataMapping(DataMappingError::MalformedRecord { .. })
        ));
    }

    #[tokio::test]
    async fn test_abort_policy_stops_at_bad_record() {
        let mut config = parse_config(CONFIG).unwrap();
        config.harvest.on_mapping_error = MappingErrorPolicy::Abort;
        let publisher = Arc::new(RecordingPublisher::default());

        let err = coordinator(&config, Ok(listing()), publisher.clone())
            .execute()
            .await
            .unwrap_err();

        assert!(matches!(err, HarvestError::DataMapping(_)));
        assert_eq!(publisher.published.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dry_run_publishes_nothing() {
        let mut config = parse_config(CONFIG).unwrap();
        config.application.dry_run = true;
        let publisher = Arc::new(RecordingPublisher::default());

        let summary = coordinator(&config, Ok(listing()), publisher.clone())
            .execute()
            .await
            .unwrap();

        assert!(summary.dry_run);
        assert_eq!(summary.transformed, 2);
        assert_eq!(summary.published, 0);
        assert!(publisher.published.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_publish_failure_is_recorded() {
        let config = parse_config(CONFIG).unwrap();
        let publisher = Arc::new(RecordingPublisher {
            reject: Some("mimu-roads".to_string()),
            ..Default::default()
        });

        let summary = coordinator(&config, Ok(listing()), publisher)
            .execute()
            .await
            .unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.published, 1);
        assert!(summary
            .errors
            .iter()
            .any(|e| e.stage == RecordStage::Publish && e.title.as_deref() == Some("Roads")));
    }

    #[tokio::test]
    async fn test_limit_truncates_listing() {
        let mut config = parse_config(CONFIG).unwrap();
        config.harvest.limit = Some(1);
        let publisher = Arc::new(RecordingPublisher::default());

        let summary = coordinator(&config, Ok(listing()), publisher)
            .execute()
            .await
            .unwrap();

        assert_eq!(summary.total_records, 1);
        assert_eq!(summary.dataset_names, vec!["mimu-roads".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_returned() {
        let config = parse_config(CONFIG).unwrap();
        let publisher = Arc::new(RecordingPublisher::default());

        let err = coordinator(&config, Err(()), publisher)
            .execute()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            HarvestError::Fetch(FetchError::ConnectionFailed { .. })
        ));
    }
}
