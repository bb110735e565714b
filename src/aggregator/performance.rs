//! Pull request and issue performance.
//!
//! Every item is placed in a duration bucket. The faster an item closes the
//! higher its weight:
//!
//! | segment     | rule                       | weight |
//! |-------------|----------------------------|--------|
//! | `fast`      | closed within 30 days      | 1.0    |
//! | `mild`      | closed within 60 days      | 0.66   |
//! | `slow`      | closed within 90 days      | 0.33   |
//! | `stale`     | closed after 90 days       | 0.1    |
//! | `open`      | open, younger than 45 days | 0.5    |
//! | `aging`     | open, up to 365 days       | 0.5    |
//!
//! Items still open after 365 days hit the hard timeout and are excluded.

use crate::parser::{PerformanceEvent, YearMonth};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const FAST_DAYS: i64 = 30;
pub const MILD_DAYS: i64 = 60;
pub const SLOW_DAYS: i64 = 90;
pub const FRESH_OPEN_DAYS: i64 = 45;
pub const HARD_TIMEOUT_DAYS: i64 = 365;

/// Duration bucket of a PR or issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Fast,
    Mild,
    Slow,
    Stale,
    Open,
    Aging,
}

impl Segment {
    pub fn weight(&self) -> f64 {
        match self {
            Segment::Fast => 1.0,
            Segment::Mild => 0.66,
            Segment::Slow => 0.33,
            Segment::Stale => 0.1,
            Segment::Open | Segment::Aging => 0.5,
        }
    }

    /// Bar color in the monthly breakdown chart
    pub fn color(&self) -> &'static str {
        match self {
            Segment::Fast => "green",
            Segment::Mild => "gold",
            Segment::Slow => "orange",
            Segment::Stale => "red",
            Segment::Open => "lightskyblue",
            Segment::Aging => "steelblue",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Fast => "fast",
            Segment::Mild => "mild",
            Segment::Slow => "slow",
            Segment::Stale => "stale",
            Segment::Open => "open",
            Segment::Aging => "aging",
        }
    }
}

/// Bucket a single item
///
/// # Returns
/// `None` when the item is still open past the hard timeout
pub fn classify_event(event: &PerformanceEvent, as_of: NaiveDate) -> Option<Segment> {
    let age = event.age_days(as_of);

    if event.is_open() {
        return match age {
            a if a < FRESH_OPEN_DAYS => Some(Segment::Open),
            a if a <= HARD_TIMEOUT_DAYS => Some(Segment::Aging),
            _ => None,
        };
    }

    Some(match age {
        a if a <= FAST_DAYS => Segment::Fast,
        a if a <= MILD_DAYS => Segment::Mild,
        a if a <= SLOW_DAYS => Segment::Slow,
        _ => Segment::Stale,
    })
}

/// Total weighted score of one repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryScore {
    pub repository: String,
    pub total: f64,
    pub items: usize,
}

/// Weighted score per repository, best first, truncated to `top_n`
///
/// **Public** - feeds the PR and issue pie charts
///
/// Ties keep first-appearance order.
pub fn repository_scores(
    events: &[PerformanceEvent],
    organization: &str,
    as_of: NaiveDate,
    top_n: usize,
) -> Vec<RepositoryScore> {
    let mut scores: Vec<RepositoryScore> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut timed_out = 0usize;

    for event in events.iter().filter(|e| e.organization == organization) {
        let Some(segment) = classify_event(event, as_of) else {
            timed_out += 1;
            continue;
        };

        let position = *index.entry(event.repository.as_str()).or_insert_with(|| {
            scores.push(RepositoryScore {
                repository: event.repository.clone(),
                total: 0.0,
                items: 0,
            });
            scores.len() - 1
        });

        scores[position].total += segment.weight();
        scores[position].items += 1;
    }

    if timed_out > 0 {
        debug!("Excluded {} items open past the hard timeout", timed_out);
    }

    scores.sort_by(|a, b| b.total.total_cmp(&a.total));
    scores.truncate(top_n);
    scores
}

/// Number of items per (month, segment) for one repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentCount {
    pub year_month: YearMonth,
    pub segment: Segment,
    pub count: u64,
}

/// Count items per month and segment for one repository
///
/// Ordered by month, then by segment from fastest to oldest.
pub fn monthly_segments(
    events: &[PerformanceEvent],
    organization: &str,
    repository: &str,
    as_of: NaiveDate,
) -> Vec<SegmentCount> {
    let mut counts: BTreeMap<(YearMonth, Segment), u64> = BTreeMap::new();

    for event in events
        .iter()
        .filter(|e| e.organization == organization && e.repository == repository)
    {
        if let Some(segment) = classify_event(event, as_of) {
            *counts.entry((event.year_month, segment)).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|((year_month, segment), count)| SegmentCount {
            year_month,
            segment,
            count,
        })
        .collect()
}
