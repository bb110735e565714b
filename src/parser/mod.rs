//! Dataset parsing and schema definitions.
//!
//! This module handles:
//! - Reading the JSON dataset prepared upstream
//! - Validating record fields
//! - Defining the input schema and the month type

pub mod dataset;
pub mod schema;
pub mod yearmonth;

// Re-export main types
pub use dataset::{latest_event_date, load_dataset, parse_dataset, validate_dataset, DatasetSummary};
pub use schema::{
    ActivityCounters, ActivityRecord, ContributionRecord, Dataset, DensityRecord, PerformanceEvent,
};
pub use yearmonth::YearMonth;
