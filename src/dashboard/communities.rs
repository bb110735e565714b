//! Communities tab: unique committers over time and the contributor table.

use super::chart::{BarChart, BarTrace};
use super::selection::{ClickField, ResolvedSelection, Selection};
use super::table::{render_contributor_table, DisplayTable};
use crate::aggregator::{
    build_contributor_matrix, classify_matrix, filter_contributions, unique_committers, CommitterCount,
    ReportingWindow,
};
use crate::parser::Dataset;
use crate::utils::config::{DashboardConfig, MAX_WINDOW_MONTHS};
use crate::utils::error::SelectionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunitiesView {
    /// Unique committers per month, one trace per repository
    pub committers: BarChart,
    /// Per-contributor monthly commits of the drill-down repository
    pub breakdown: DisplayTable,
}

/// Compute the communities tab for a selection
///
/// # Errors
/// * `SelectionError::MissingField` - click payload without `points[0].text`
pub fn view(
    dataset: &Dataset,
    config: &DashboardConfig,
    selection: &Selection,
) -> Result<(CommunitiesView, ResolvedSelection), SelectionError> {
    let organization = selection.organization_or_default(config);
    let resolved = selection.resolve(config, ClickField::Text)?;

    let counts = unique_committers(&dataset.contributions, &organization);
    let breakdown = contributor_table(dataset, config, &resolved);

    let view = CommunitiesView {
        committers: committers_chart(&counts),
        breakdown,
    };
    Ok((view, resolved))
}

/// The configured window, or the months spanned by the drill-down
/// repository's contributions
pub fn reporting_window(
    dataset: &Dataset,
    config: &DashboardConfig,
    resolved: &ResolvedSelection,
) -> ReportingWindow {
    match config.window_bounds() {
        Some((start, months)) => ReportingWindow::from_start(start, months),
        None => {
            let records = filter_contributions(
                &dataset.contributions,
                &resolved.organization,
                &resolved.repository,
            );
            ReportingWindow::spanning(records.map(|r| r.year_month), MAX_WINDOW_MONTHS)
        }
    }
}

/// Pivot, classify and render the drill-down repository
pub fn contributor_table(
    dataset: &Dataset,
    config: &DashboardConfig,
    resolved: &ResolvedSelection,
) -> DisplayTable {
    let window = reporting_window(dataset, config, resolved);
    let records = filter_contributions(
        &dataset.contributions,
        &resolved.organization,
        &resolved.repository,
    );
    let matrix = build_contributor_matrix(records, &window);
    let trends = classify_matrix(&matrix);
    render_contributor_table(&matrix, &trends, resolved.repository.clone())
}

fn committers_chart(counts: &[CommitterCount]) -> BarChart {
    let mut chart = BarChart::new(None);

    // counts arrive grouped by repository
    for count in counts {
        let month = count.year_month.to_string();
        let value = count.committers as f64;
        let current = chart
            .traces
            .last_mut()
            .filter(|t| t.name.as_deref() == Some(count.repository.as_str()));

        if let Some(trace) = current {
            trace.x.push(month);
            trace.y.push(value);
            trace.text.push(count.repository.clone());
        } else {
            chart.traces.push(
                BarTrace::new(vec![month], vec![value])
                    .with_name(count.repository.clone())
                    .with_text(vec![count.repository.clone()]),
            );
        }
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::TrendLabel;
    use crate::parser::{ContributionRecord, YearMonth};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(repo: &str, month: &str, name: &str, commits: u64) -> ContributionRecord {
        ContributionRecord {
            organization: "kubernetes".to_string(),
            repository: repo.to_string(),
            year_month: month.parse().unwrap(),
            contributor: name.to_string(),
            company: Some("acme".to_string()),
            location: Some("NY".to_string()),
            commits,
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            contributions: vec![
                record("kubernetes", "2022-1", "alice", 2),
                record("kubernetes", "2022-2", "alice", 5),
                record("kubernetes", "2022-3", "alice", 5),
                record("kubernetes", "2022-4", "alice", 1),
                record("kubernetes", "2022-1", "bob", 7),
                record("kubectl", "2022-2", "carol", 3),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_default_table() {
        let (view, resolved) =
            view(&dataset(), &DashboardConfig::default(), &Selection::new()).unwrap();
        assert_eq!(resolved.repository, "kubernetes");

        let table = &view.breakdown;
        assert_eq!(table.title, "kubernetes");
        assert_eq!(&table.header[3..], &["Jan", "Feb", "Mar", "Apr"]);
        assert_eq!(table.rows[0].name, "bob");
        assert_eq!(table.rows[1].name, "alice");
        assert_eq!(
            table.rows[1].trends,
            vec![
                None,
                Some(TrendLabel::Increase),
                Some(TrendLabel::Flat),
                Some(TrendLabel::Decrease)
            ]
        );
    }

    #[test]
    fn test_configured_window() {
        let config = DashboardConfig::default().with_window(YearMonth::new(2022, 1).unwrap(), 7);
        let (view, _) = view(&dataset(), &config, &Selection::new()).unwrap();
        assert_eq!(view.breakdown.header.len(), 10);
        assert_eq!(view.breakdown.rows[1].counts, vec![2, 5, 5, 1, 0, 0, 0]);
    }

    #[test]
    fn test_committers_chart() {
        let (view, _) = view(
            &dataset(),
            &DashboardConfig::default(),
            &Selection::new().with_organization("kubernetes"),
        )
        .unwrap();

        let traces = &view.committers.traces;
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].name.as_deref(), Some("kubernetes"));
        assert_eq!(traces[0].y, vec![2.0, 1.0, 1.0, 1.0]);
        assert_eq!(traces[1].text, vec!["kubectl"]);
    }

    #[test]
    fn test_derived_window_follows_drilldown_repository() {
        let mut other_org = record("kubernetes", "2019-5", "dave", 4);
        other_org.organization = "cncf".to_string();
        let dataset = Dataset {
            contributions: vec![
                other_org,
                record("kubernetes", "2021-11", "alice", 3),
                record("kubernetes", "2022-2", "alice", 1),
            ],
            ..Default::default()
        };

        let (view, _) = view(&dataset, &DashboardConfig::default(), &Selection::new()).unwrap();
        let table = &view.breakdown;
        assert_eq!(&table.header[3..], &["2021-11", "2021-12", "2022-1", "2022-2"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].counts, vec![3, 0, 0, 1]);
        assert_eq!(
            table.rows[0].trends,
            vec![
                None,
                Some(TrendLabel::Decrease),
                Some(TrendLabel::Flat),
                Some(TrendLabel::Increase)
            ]
        );
    }

    #[test]
    fn test_unknown_organization_is_empty() {
        let selection = Selection::new()
            .with_organization("foo")
            .with_click(json!({"points": [{"text": "bar"}]}));
        let (view, _) = view(&dataset(), &DashboardConfig::default(), &selection).unwrap();
        assert!(view.committers.is_empty());
        assert!(view.breakdown.is_empty());
    }
}
