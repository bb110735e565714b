//! Dashboard view models.
//!
//! Each tab is a pure function from (dataset, config, selection) to a view
//! model. The hosting UI calls it on every interaction and hands the result
//! to its charting layer. Identical inputs give identical views.

pub mod activities;
pub mod chart;
pub mod communities;
pub mod performances;
pub mod selection;
pub mod table;

use crate::parser::Dataset;
use crate::utils::config::DashboardConfig;
use crate::utils::error::SelectionError;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export main types
pub use activities::ActivitiesView;
pub use chart::{BarChart, BarTrace, MarkerColor, PieChart};
pub use communities::CommunitiesView;
pub use performances::PerformancesView;
pub use selection::{clicked_repository, ClickField, ResolvedSelection, Selection};
pub use table::{render_contributor_table, DisplayRow, DisplayTable};

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Activities,
    Communities,
    Performances,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tab::Activities => "activities",
            Tab::Communities => "communities",
            Tab::Performances => "performances",
        };
        f.write_str(name)
    }
}

/// View model of one tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tab", content = "charts", rename_all = "lowercase")]
pub enum TabView {
    Activities(ActivitiesView),
    Communities(CommunitiesView),
    Performances(PerformancesView),
}

/// A tab's view together with the selection it was computed for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Organization of the overview charts
    pub organization: String,
    /// Organization and repository of the drill-down charts
    pub drilldown: ResolvedSelection,
    pub view: TabView,
}

/// Compute one tab for one selection
///
/// **Public** - main entry point for the hosting UI
///
/// # Errors
/// * `SelectionError::MissingField` - malformed click payload
pub fn render(
    tab: Tab,
    dataset: &Dataset,
    config: &DashboardConfig,
    selection: &Selection,
) -> Result<DashboardView, SelectionError> {
    let organization = selection.organization_or_default(config);

    let (view, resolved) = match tab {
        Tab::Activities => {
            let (v, r) = activities::view(dataset, config, selection)?;
            (TabView::Activities(v), r)
        }
        Tab::Communities => {
            let (v, r) = communities::view(dataset, config, selection)?;
            (TabView::Communities(v), r)
        }
        Tab::Performances => {
            let (v, r) = performances::view(dataset, config, selection)?;
            (TabView::Performances(v), r)
        }
    };

    info!(
        "Rendered {} tab for {} (drill-down {}/{})",
        tab, organization, resolved.organization, resolved.repository
    );

    Ok(DashboardView {
        organization,
        drilldown: resolved,
        view,
    })
}
