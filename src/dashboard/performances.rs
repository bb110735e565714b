//! Performances tab: weighted PR/issue scores and their monthly segments.

use super::chart::{BarChart, BarTrace, MarkerColor, PieChart};
use super::selection::{ClickField, ResolvedSelection, Selection};
use crate::aggregator::{monthly_segments, repository_scores, RepositoryScore, SegmentCount};
use crate::parser::{latest_event_date, Dataset, PerformanceEvent};
use crate::utils::config::DashboardConfig;
use crate::utils::error::SelectionError;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

const PIE_HOLE: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancesView {
    pub pull_requests: PieChart,
    pub issues: PieChart,
    pub pull_request_breakdown: BarChart,
    pub issue_breakdown: BarChart,
}

/// Compute the performances tab for a selection
///
/// Each pie drives its own breakdown: `click` comes from the PR pie and
/// `issue_click` from the issue pie. The returned selection is the PR one.
///
/// # Errors
/// * `SelectionError::MissingField` - either click payload without
///   `points[0].label`
pub fn view(
    dataset: &Dataset,
    config: &DashboardConfig,
    selection: &Selection,
) -> Result<(PerformancesView, ResolvedSelection), SelectionError> {
    let organization = selection.organization_or_default(config);
    let resolved = selection.resolve(config, ClickField::Label)?;
    let issue_resolved = selection.resolve_issue(config)?;
    let as_of = reference_date(dataset, config);
    debug!("Aging open items against {}", as_of);

    let pr_scores = repository_scores(&dataset.pull_requests, &organization, as_of, config.top_n);
    let issue_scores = repository_scores(&dataset.issues, &organization, as_of, config.top_n);

    let view = PerformancesView {
        pull_requests: score_pie("PR Performance", "PR", &pr_scores),
        issues: score_pie("Issue Performance", "Issue", &issue_scores),
        pull_request_breakdown: segment_breakdown(&dataset.pull_requests, &resolved, as_of),
        issue_breakdown: segment_breakdown(&dataset.issues, &issue_resolved, as_of),
    };
    Ok((view, resolved))
}

/// Configured `as_of`, else the latest date in the data
pub fn reference_date(dataset: &Dataset, config: &DashboardConfig) -> NaiveDate {
    config
        .as_of
        .or_else(|| latest_event_date(dataset))
        .unwrap_or(NaiveDate::MIN)
}

fn score_pie(title: &str, annotation: &str, scores: &[RepositoryScore]) -> PieChart {
    PieChart {
        title: title.to_string(),
        labels: scores.iter().map(|s| s.repository.clone()).collect(),
        values: scores.iter().map(|s| s.total).collect(),
        hole: PIE_HOLE,
        annotation: annotation.to_string(),
    }
}

fn segment_breakdown(
    events: &[PerformanceEvent],
    resolved: &ResolvedSelection,
    as_of: NaiveDate,
) -> BarChart {
    let counts: Vec<SegmentCount> =
        monthly_segments(events, &resolved.organization, &resolved.repository, as_of);

    let trace = BarTrace::new(
        counts.iter().map(|c| c.year_month.to_string()).collect(),
        counts.iter().map(|c| c.count as f64).collect(),
    )
    .with_color(MarkerColor::PerBar(
        counts.iter().map(|c| c.segment.color().to_string()).collect(),
    ))
    .with_text(counts.iter().map(|c| c.segment.as_str().to_string()).collect());

    BarChart {
        title: Some(resolved.repository.clone()),
        traces: vec![trace],
    }
}
