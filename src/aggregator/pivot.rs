//! Pivot contribution rows into a contributor x month matrix.
//!
//! Each row is one (name, company, location) key; each column one month of
//! the reporting window. Absent months hold zero.

use super::window::ReportingWindow;
use crate::parser::ContributionRecord;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Identity of a contributor row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContributorKey {
    pub name: String,
    pub company: Option<String>,
    pub location: Option<String>,
}

impl ContributorKey {
    pub fn new(
        name: impl Into<String>,
        company: Option<&str>,
        location: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            company: company.map(str::to_string),
            location: location.map(str::to_string),
        }
    }

    fn of(record: &ContributionRecord) -> Self {
        Self {
            name: record.contributor.clone(),
            company: record.company.clone(),
            location: record.location.clone(),
        }
    }
}

/// One matrix row: a key and one count per window month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributorRow {
    pub key: ContributorKey,
    pub counts: Vec<u64>,
}

/// Contributor x month commit counts for one repository
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributorMonthMatrix {
    window: ReportingWindow,
    rows: Vec<ContributorRow>,
    index: HashMap<ContributorKey, usize>,
}

impl ContributorMonthMatrix {
    pub fn window(&self) -> &ReportingWindow {
        &self.window
    }

    /// Rows in first-appearance order of their key
    pub fn rows(&self) -> &[ContributorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn position(&self, key: &ContributorKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn row(&self, key: &ContributorKey) -> Option<&ContributorRow> {
        self.position(key).map(|i| &self.rows[i])
    }

    /// Sum of one month's column
    pub fn month_total(&self, month_index: usize) -> u64 {
        self.rows
            .iter()
            .filter_map(|r| r.counts.get(month_index))
            .sum()
    }
}

/// Build the contributor matrix for one repository
///
/// **Public** - main entry point for the communities breakdown
///
/// # Arguments
/// * `records` - Contribution rows already filtered to one organization
///   and one repository
/// * `window` - Months that become the matrix columns
///
/// # Returns
/// One row per distinct (name, company, location); commit counts for the
/// same key and month are summed. Records outside the window are skipped.
pub fn build_contributor_matrix<'a>(
    records: impl IntoIterator<Item = &'a ContributionRecord>,
    window: &ReportingWindow,
) -> ContributorMonthMatrix {
    let mut rows: Vec<ContributorRow> = Vec::new();
    let mut index: HashMap<ContributorKey, usize> = HashMap::new();
    let mut skipped = 0usize;

    for record in records {
        let Some(column) = window.index_of(record.year_month) else {
            skipped += 1;
            continue;
        };

        let key = ContributorKey::of(record);
        let position = *index.entry(key.clone()).or_insert_with(|| {
            rows.push(ContributorRow {
                key,
                counts: vec![0; window.len()],
            });
            rows.len() - 1
        });

        rows[position].counts[column] += record.commits;
    }

    if skipped > 0 {
        debug!("Skipped {} contribution rows outside the reporting window", skipped);
    }
    debug!(
        "Built contributor matrix: {} rows x {} months",
        rows.len(),
        window.len()
    );

    ContributorMonthMatrix {
        window: window.clone(),
        rows,
        index,
    }
}

/// Rows of `records` belonging to one organization and repository
pub fn filter_contributions<'a>(
    records: &'a [ContributionRecord],
    organization: &'a str,
    repository: &'a str,
) -> impl Iterator<Item = &'a ContributionRecord> + 'a {
    records
        .iter()
        .filter(move |r| r.organization == organization && r.repository == repository)
}
