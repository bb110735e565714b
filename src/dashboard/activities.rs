//! Activities tab: density per repository and a monthly activity breakdown.

use super::chart::{BarChart, BarTrace, MarkerColor};
use super::selection::{ClickField, ResolvedSelection, Selection};
use crate::aggregator::{activity_breakdown, density_shares, MonthlyActivity, RepositoryShare, DEFAULT_WEIGHTS};
use crate::parser::{ActivityCounters, Dataset};
use crate::utils::config::DashboardConfig;
use crate::utils::error::SelectionError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Breakdown series: display name, color and counter accessor
type Series = (&'static str, &'static str, fn(&ActivityCounters) -> i64);

const BREAKDOWN_SERIES: [Series; 10] = [
    ("Increase in committer", "indianred", |c| c.committer_increment),
    ("Increase in PR", "lime", |c| c.pull_request_increment),
    ("Increase in open PR", "aqua", |c| c.open_pull_request_increment),
    ("Increase in closed PR", "cornflowerblue", |c| c.closed_pull_request_increment),
    ("Increase in merged PR", "RoyalBlue", |c| c.merged_pull_request_increment),
    ("Increase in commit", "darkseagreen", |c| c.commit_increment),
    ("Increase in issue", "lightsalmon", |c| c.issue_increment),
    ("Increase in star", "aliceblue", |c| c.star_increment),
    ("Increase in watcher", "plum", |c| c.watcher_increment),
    ("Increase in fork", "cornsilk", |c| c.fork_increment),
];

/// Everything the activities tab draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitiesView {
    /// Share of the organization's activity per repository
    pub density: BarChart,
    /// Monthly increments of the drill-down repository
    pub breakdown: BarChart,
}

/// Compute the activities tab for a selection
///
/// # Errors
/// * `SelectionError::MissingField` - click payload without `points[0].text`
pub fn view(
    dataset: &Dataset,
    config: &DashboardConfig,
    selection: &Selection,
) -> Result<(ActivitiesView, ResolvedSelection), SelectionError> {
    let organization = selection.organization_or_default(config);
    let resolved = selection.resolve(config, ClickField::Text)?;

    let shares = organization_density(dataset, &organization);
    let breakdown = activity_breakdown(&dataset.activity, &resolved.organization, &resolved.repository);

    let view = ActivitiesView {
        density: density_chart(&organization, &shares),
        breakdown: breakdown_chart(&resolved.repository, &breakdown),
    };
    Ok((view, resolved))
}

/// Precomputed density rows for the organization, or shares derived from
/// weighted activity when none were provided
fn organization_density(dataset: &Dataset, organization: &str) -> Vec<RepositoryShare> {
    let precomputed: Vec<RepositoryShare> = dataset
        .density
        .iter()
        .filter(|d| d.organization == organization)
        .map(|d| RepositoryShare {
            repository: d.repository.clone(),
            percentage: d.percentage,
        })
        .collect();

    if !precomputed.is_empty() {
        return precomputed;
    }

    debug!("No density rows for {}, deriving from weighted activity", organization);
    density_shares(&dataset.activity, organization, &DEFAULT_WEIGHTS)
}

/// One bar per repository, stacked on the organization category
pub fn density_chart(organization: &str, shares: &[RepositoryShare]) -> BarChart {
    let traces = shares
        .iter()
        .map(|share| {
            BarTrace::new(vec![organization.to_string()], vec![share.percentage])
                .with_name(share.repository.clone())
                .with_text(vec![share.repository.clone()])
        })
        .collect();

    BarChart {
        title: None,
        traces,
    }
}

/// One trace per counter over the repository's months
pub fn breakdown_chart(repository: &str, months: &[MonthlyActivity]) -> BarChart {
    let x: Vec<String> = months.iter().map(|m| m.year_month.to_string()).collect();

    let traces = BREAKDOWN_SERIES
        .iter()
        .map(|(name, color, counter)| {
            let y = months.iter().map(|m| counter(&m.counters) as f64).collect();
            BarTrace::new(x.clone(), y)
                .with_name(*name)
                .with_color(MarkerColor::Uniform(color.to_string()))
        })
        .collect();

    BarChart {
        title: Some(repository.to_string()),
        traces,
    }
}
