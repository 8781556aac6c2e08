//! Harvest orchestration
//!
//! This module coordinates a harvest run: fetch the listing, map each record,
//! publish each pair, report.

pub mod coordinator;
pub mod summary;

pub use coordinator::HarvestCoordinator;
pub use summary::{HarvestSummary, RecordError, RecordStage};
