//! Activity breakdown and weighted density shares.
//!
//! The breakdown sums every counter per (organization, repository, month).
//! Density shares weight the same counters and express each repository as a
//! percentage of its organization's total.

use crate::parser::{ActivityCounters, ActivityRecord, YearMonth};
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Weight applied to each counter when scoring activity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityWeights {
    pub star: f64,
    pub watcher: f64,
    pub fork: f64,
    pub issue: f64,
    pub pull_request: f64,
    pub open_pull_request: f64,
    pub commit: f64,
    pub closed_pull_request: f64,
    pub committer: f64,
    pub merged_pull_request: f64,
}

/// Weights published with the dashboard
pub const DEFAULT_WEIGHTS: ActivityWeights = ActivityWeights {
    star: 0.01,
    watcher: 0.1,
    fork: 0.2,
    issue: 0.5,
    pull_request: 1.0,
    open_pull_request: 1.2,
    commit: 1.3,
    closed_pull_request: 1.5,
    committer: 1.6,
    merged_pull_request: 1.8,
};

impl Default for ActivityWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl ActivityWeights {
    /// Weighted sum of all counters
    pub fn score(&self, c: &ActivityCounters) -> f64 {
        self.star * c.star_increment as f64
            + self.watcher * c.watcher_increment as f64
            + self.fork * c.fork_increment as f64
            + self.issue * c.issue_increment as f64
            + self.pull_request * c.pull_request_increment as f64
            + self.open_pull_request * c.open_pull_request_increment as f64
            + self.commit * c.commit_increment as f64
            + self.closed_pull_request * c.closed_pull_request_increment as f64
            + self.committer * c.committer_increment as f64
            + self.merged_pull_request * c.merged_pull_request_increment as f64
    }
}

/// Summed counters for one month of one repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyActivity {
    pub year_month: YearMonth,
    pub counters: ActivityCounters,
}

/// Sum counters per month for one repository
///
/// **Public** - feeds the activity breakdown chart
///
/// # Returns
/// One entry per month present in the data, in chronological order.
/// Empty when the repository has no rows.
pub fn activity_breakdown(
    records: &[ActivityRecord],
    organization: &str,
    repository: &str,
) -> Vec<MonthlyActivity> {
    let mut by_month: BTreeMap<YearMonth, ActivityCounters> = BTreeMap::new();

    for record in records
        .iter()
        .filter(|r| r.organization == organization && r.repository == repository)
    {
        by_month
            .entry(record.year_month)
            .or_default()
            .add(&record.counters);
    }

    debug!(
        "Activity breakdown for {}/{}: {} months",
        organization,
        repository,
        by_month.len()
    );

    by_month
        .into_iter()
        .map(|(year_month, counters)| MonthlyActivity {
            year_month,
            counters,
        })
        .collect()
}

/// A repository's share of its organization's activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryShare {
    pub repository: String,
    pub percentage: f64,
}

/// Weighted activity share of every repository in an organization
///
/// Repositories appear in first-appearance order. When the organization's
/// weighted total is not positive every share is zero.
pub fn density_shares(
    records: &[ActivityRecord],
    organization: &str,
    weights: &ActivityWeights,
) -> Vec<RepositoryShare> {
    let mut order: Vec<&str> = Vec::new();
    let mut scores: HashMap<&str, f64> = HashMap::new();

    for record in records.iter().filter(|r| r.organization == organization) {
        let repository = record.repository.as_str();
        if !scores.contains_key(repository) {
            order.push(repository);
        }
        *scores.entry(repository).or_insert(0.0) += weights.score(&record.counters);
    }

    let total: f64 = scores.values().sum();

    order
        .into_iter()
        .map(|repository| RepositoryShare {
            repository: repository.to_string(),
            percentage: if total > 0.0 {
                scores[repository] / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}
