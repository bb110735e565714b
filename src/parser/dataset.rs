//! Dataset loading and validation.
//!
//! The dataset is read once per process. Everything downstream is a pure
//! projection of it.

use super::schema::{Dataset, PerformanceEvent};
use crate::utils::error::ParseError;
use chrono::NaiveDate;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load and validate a dataset from a JSON file
///
/// **Public** - main entry point for reading input data
///
/// # Errors
/// * `ParseError::IoError` - File cannot be opened
/// * `ParseError::JsonError` - Invalid JSON or a bad year-month value
/// * `ParseError::InvalidRecord` - A record violates a field constraint
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, ParseError> {
    let path = path.as_ref();
    info!("Loading dataset from: {}", path.display());

    let file = File::open(path)?;
    let dataset: Dataset = serde_json::from_reader(BufReader::new(file))?;
    validate_dataset(&dataset)?;

    debug!("Dataset loaded: {}", DatasetSummary::of(&dataset).summary());
    Ok(dataset)
}

/// Parse and validate a dataset held in memory
pub fn parse_dataset(json: &str) -> Result<Dataset, ParseError> {
    let dataset: Dataset = serde_json::from_str(json)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Check constraints serde cannot express
///
/// **Public** - also used by the `validate` command
pub fn validate_dataset(dataset: &Dataset) -> Result<(), ParseError> {
    for (index, r) in dataset.contributions.iter().enumerate() {
        check_ids("contributions", index, &r.organization, &r.repository)?;
        if r.contributor.trim().is_empty() {
            return Err(invalid("contributions", index, "contributor name is empty"));
        }
    }
    for (index, r) in dataset.activity.iter().enumerate() {
        check_ids("activity", index, &r.organization, &r.repository)?;
    }
    for (index, r) in dataset.density.iter().enumerate() {
        check_ids("density", index, &r.organization, &r.repository)?;
        if !r.percentage.is_finite() {
            return Err(invalid("density", index, "percentage is not a finite number"));
        }
    }
    check_events("pull_requests", &dataset.pull_requests)?;
    check_events("issues", &dataset.issues)?;
    Ok(())
}

fn check_events(collection: &'static str, events: &[PerformanceEvent]) -> Result<(), ParseError> {
    for (index, e) in events.iter().enumerate() {
        check_ids(collection, index, &e.organization, &e.repository)?;
        if let Some(closed) = e.closed_at {
            if closed < e.opened_at {
                return Err(invalid(collection, index, "closed_at is before opened_at"));
            }
        }
    }
    Ok(())
}

fn check_ids(
    collection: &'static str,
    index: usize,
    organization: &str,
    repository: &str,
) -> Result<(), ParseError> {
    if organization.trim().is_empty() {
        return Err(invalid(collection, index, "organization is empty"));
    }
    if repository.trim().is_empty() {
        return Err(invalid(collection, index, "repository is empty"));
    }
    Ok(())
}

fn invalid(collection: &'static str, index: usize, reason: &str) -> ParseError {
    ParseError::InvalidRecord {
        collection,
        index,
        reason: reason.to_string(),
    }
}

/// Latest opened or closed date across PRs and issues
///
/// Used as the reference date for aging still-open items when none is
/// configured.
pub fn latest_event_date(dataset: &Dataset) -> Option<NaiveDate> {
    dataset
        .pull_requests
        .iter()
        .chain(dataset.issues.iter())
        .flat_map(|e| std::iter::once(e.opened_at).chain(e.closed_at))
        .max()
}

/// Record counts per collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub contributions: usize,
    pub activity: usize,
    pub density: usize,
    pub pull_requests: usize,
    pub issues: usize,
}

impl DatasetSummary {
    pub fn of(dataset: &Dataset) -> Self {
        Self {
            contributions: dataset.contributions.len(),
            activity: dataset.activity.len(),
            density: dataset.density.len(),
            pull_requests: dataset.pull_requests.len(),
            issues: dataset.issues.len(),
        }
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Contributions: {} | Activity: {} | Density: {} | PRs: {} | Issues: {}",
            self.contributions, self.activity, self.density, self.pull_requests, self.issues
        )
    }
}
