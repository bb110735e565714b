//! Unique committers per repository and month.

use crate::parser::{ContributionRecord, YearMonth};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Distinct committers of one repository in one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitterCount {
    pub repository: String,
    pub year_month: YearMonth,
    pub committers: usize,
}

/// Count distinct contributor names with at least one commit
///
/// Grouped by repository in first-appearance order, months ascending
/// within each repository.
pub fn unique_committers(records: &[ContributionRecord], organization: &str) -> Vec<CommitterCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut per_repo: HashMap<&str, BTreeMap<YearMonth, HashSet<&str>>> = HashMap::new();

    for record in records
        .iter()
        .filter(|r| r.organization == organization && r.commits > 0)
    {
        let repository = record.repository.as_str();
        let months = per_repo.entry(repository).or_insert_with(|| {
            order.push(repository);
            BTreeMap::new()
        });
        months
            .entry(record.year_month)
            .or_default()
            .insert(record.contributor.as_str());
    }

    order
        .into_iter()
        .flat_map(|repository| {
            per_repo
                .remove(repository)
                .unwrap_or_default()
                .into_iter()
                .map(move |(year_month, names)| CommitterCount {
                    repository: repository.to_string(),
                    year_month,
                    committers: names.len(),
                })
        })
        .collect()
}
