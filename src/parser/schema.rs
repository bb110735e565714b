//! Input schema definitions for the dashboard dataset.
//!
//! The dataset is produced by an upstream preparation stage and loaded once.
//! Field aliases accept the column names used by that stage.

use super::yearmonth::YearMonth;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every table the dashboard reads, loaded from a single JSON document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Per-contributor monthly commit counts
    #[serde(alias = "df_pr_committers")]
    pub contributions: Vec<ContributionRecord>,

    /// Monthly activity increments per repository
    #[serde(alias = "breakdown_frame")]
    pub activity: Vec<ActivityRecord>,

    /// Precomputed density share per repository
    #[serde(alias = "dframe_perc")]
    pub density: Vec<DensityRecord>,

    /// Pull request lifetimes
    #[serde(alias = "dframe_pr")]
    pub pull_requests: Vec<PerformanceEvent>,

    /// Issue lifetimes
    #[serde(alias = "dframe_issue")]
    pub issues: Vec<PerformanceEvent>,
}

/// One row per (organization, repository, month, contributor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRecord {
    #[serde(alias = "rg_name", alias = "org")]
    pub organization: String,

    #[serde(alias = "repo_name")]
    pub repository: String,

    #[serde(alias = "yearmonth")]
    pub year_month: YearMonth,

    #[serde(alias = "cmt_committer_name")]
    pub contributor: String,

    #[serde(default, alias = "cntrb_company")]
    pub company: Option<String>,

    #[serde(default, alias = "cntrb_location")]
    pub location: Option<String>,

    #[serde(alias = "num_of_commit")]
    pub commits: u64,
}

/// Monthly activity increments for one repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(alias = "rg_name", alias = "org")]
    pub organization: String,

    #[serde(alias = "repo_name")]
    pub repository: String,

    #[serde(alias = "yearmonth")]
    pub year_month: YearMonth,

    #[serde(flatten)]
    pub counters: ActivityCounters,
}

/// Incremental counters tracked per repository and month.
/// Increments are signed: stars and watchers can be withdrawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityCounters {
    pub star_increment: i64,
    pub watcher_increment: i64,
    pub fork_increment: i64,
    pub issue_increment: i64,
    pub pull_request_increment: i64,
    pub open_pull_request_increment: i64,
    pub commit_increment: i64,
    pub closed_pull_request_increment: i64,
    pub committer_increment: i64,
    pub merged_pull_request_increment: i64,
}

impl ActivityCounters {
    /// Field-wise sum
    pub fn add(&mut self, other: &ActivityCounters) {
        self.star_increment += other.star_increment;
        self.watcher_increment += other.watcher_increment;
        self.fork_increment += other.fork_increment;
        self.issue_increment += other.issue_increment;
        self.pull_request_increment += other.pull_request_increment;
        self.open_pull_request_increment += other.open_pull_request_increment;
        self.commit_increment += other.commit_increment;
        self.closed_pull_request_increment += other.closed_pull_request_increment;
        self.committer_increment += other.committer_increment;
        self.merged_pull_request_increment += other.merged_pull_request_increment;
    }
}

/// Share of an organization's activity attributed to one repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityRecord {
    #[serde(alias = "rg_name", alias = "org")]
    pub organization: String,

    #[serde(alias = "repo_name")]
    pub repository: String,

    pub percentage: f64,
}

/// Lifetime of a single pull request or issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEvent {
    #[serde(alias = "rg_name", alias = "org")]
    pub organization: String,

    #[serde(alias = "repo_name")]
    pub repository: String,

    /// Month the item is reported under
    #[serde(alias = "yearmonth")]
    pub year_month: YearMonth,

    #[serde(alias = "created_at")]
    pub opened_at: NaiveDate,

    /// `None` while the item is still open
    #[serde(default)]
    pub closed_at: Option<NaiveDate>,
}

impl PerformanceEvent {
    /// Age in days: until closing, or until `as_of` while still open
    pub fn age_days(&self, as_of: NaiveDate) -> i64 {
        let end = self.closed_at.unwrap_or(as_of);
        (end - self.opened_at).num_days()
    }

    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }
}
