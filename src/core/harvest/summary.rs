//! Harvest summary and reporting

use std::time::Duration;

/// Summary of a harvest run
#[derive(Debug, Clone, Default)]
pub struct HarvestSummary {
    /// Records returned by the listing (after any limit)
    pub total_records: usize,

    /// Records mapped to a dataset and showcase
    pub transformed: usize,

    /// Pairs accepted by the publisher
    pub published: usize,

    /// Records skipped because they could not be mapped
    pub skipped: usize,

    /// Pairs the publisher rejected
    pub failed: usize,

    /// Duration of the run
    pub duration: Duration,

    /// Per-record problems
    pub errors: Vec<RecordError>,

    /// Names of the datasets produced, in listing order
    pub dataset_names: Vec<String>,

    /// Whether publishing was skipped
    pub dry_run: bool,
}

impl HarvestSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add an error
    pub fn add_error(&mut self, error: RecordError) {
        self.errors.push(error);
    }

    /// True when every record was mapped and published (or would have been)
    pub fn is_successful(&self) -> bool {
        self.skipped == 0 && self.failed == 0
    }

    /// Share of records that made it through, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            return 100.0;
        }
        let succeeded = if self.dry_run {
            self.transformed
        } else {
            self.published
        };
        (succeeded as f64 / self.total_records as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        crate::log_harvest_complete!(self.total_records, self.published, self.duration);
        tracing::info!(
            transformed = self.transformed,
            skipped = self.skipped,
            failed = self.failed,
            dry_run = self.dry_run,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Harvest summary"
        );

        for error in &self.errors {
            tracing::warn!(
                stage = ?error.stage,
                index = error.index,
                title = ?error.title,
                message = %error.message,
                "Harvest error"
            );
        }
    }
}

/// Stage at which a record failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStage {
    /// Mapping the layer record
    Transform,
    /// Handing the pair to the publisher
    Publish,
}

/// Problem with one record
#[derive(Debug, Clone)]
pub struct RecordError {
    pub stage: RecordStage,

    /// Position of the record in the listing
    pub index: usize,

    /// Layer title, when the record had one
    pub title: Option<String>,

    pub message: String,
}

impl RecordError {
    pub fn new(stage: RecordStage, index: usize, message: impl Into<String>) -> Self {
        Self {
            stage,
            index,
            title: None,
            message: message.into(),
        }
    }

    /// Sets the layer title
    pub fn with_title(mut self, title: Option<&str>) -> Self {
        self.title = title.map(str::to_string);
        self
    }
}
