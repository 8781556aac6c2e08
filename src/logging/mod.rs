//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Human-readable console output
//! - Optional JSON log files with rotation
//! - Level from config or CLI, `RUST_LOG` wins when set
//!
//! # Example
//!
//! ```no_run
//! use mimu_harvester::logging::init_logging;
//! use mimu_harvester::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a layer record that could not be mapped
///
/// # Example
///
/// ```no_run
/// use mimu_harvester::log_record_skipped;
/// use mimu_harvester::domain::DataMappingError;
///
/// let error = DataMappingError::MissingField("title");
/// log_record_skipped!(3, Some("Myanmar Town 2019 July"), &error);
/// ```
#[macro_export]
macro_rules! log_record_skipped {
    ($index:expr, $title:expr, $error:expr) => {
        tracing::warn!(
            index = $index,
            title = ?$title,
            error = %$error,
            "Skipping layer record"
        );
    };
}

/// Log the completion of a harvest run
///
/// # Example
///
/// ```no_run
/// use mimu_harvester::log_harvest_complete;
/// use std::time::Duration;
///
/// log_harvest_complete!(42, 40, Duration::from_secs(3));
/// ```
#[macro_export]
macro_rules! log_harvest_complete {
    ($total:expr, $published:expr, $duration:expr) => {
        tracing::info!(
            total = $total,
            published = $published,
            duration_ms = $duration.as_millis(),
            "Harvest completed"
        );
    };
}
