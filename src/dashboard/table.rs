//! Contributor breakdown table.
//!
//! Rows are ranked by their month tuple, compared lexicographically and
//! descending: the first month decides, later months break ties. Rows with
//! identical tuples keep matrix order.

use crate::aggregator::trend::NEUTRAL_COLOR;
use crate::aggregator::{ContributorMonthMatrix, TrendLabel, TrendTable};
use log::debug;
use serde::{Deserialize, Serialize};

/// Headers of the key columns, followed by one header per month
pub const KEY_HEADERS: [&str; 3] = ["Contributor Name", "Contributor Company", "Contributor Location"];

/// Display-ready contributor table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayTable {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<DisplayRow>,
}

impl DisplayTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One contributor
///
/// `counts`, `trends` and `colors` all have one entry per window month. Key
/// columns are always drawn in the neutral color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub name: String,
    pub company: String,
    pub location: String,
    pub counts: Vec<u64>,
    pub trends: Vec<Option<TrendLabel>>,
    pub colors: Vec<String>,
}

/// Row positions of `matrix` in display order
///
/// Stable: equal tuples keep their relative matrix order.
pub fn display_order(matrix: &ContributorMonthMatrix) -> Vec<usize> {
    let rows = matrix.rows();
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| rows[b].counts.cmp(&rows[a].counts));
    order
}

/// Render the contributor matrix and its trends as a table
///
/// **Public** - main entry point for the communities drill-down
pub fn render_contributor_table(
    matrix: &ContributorMonthMatrix,
    trends: &TrendTable,
    title: impl Into<String>,
) -> DisplayTable {
    let header = KEY_HEADERS
        .iter()
        .map(|h| h.to_string())
        .chain(matrix.window().labels())
        .collect();

    let width = matrix.window().len();
    let rows = display_order(matrix)
        .into_iter()
        .map(|position| {
            let row = &matrix.rows()[position];
            let row_trends: Vec<Option<TrendLabel>> =
                (0..width).map(|i| trends.label_at(position, i)).collect();
            let colors = row_trends
                .iter()
                .map(|t| t.map_or(NEUTRAL_COLOR, |label| label.color()).to_string())
                .collect();

            DisplayRow {
                name: row.key.name.clone(),
                company: row.key.company.clone().unwrap_or_default(),
                location: row.key.location.clone().unwrap_or_default(),
                counts: row.counts.clone(),
                trends: row_trends,
                colors,
            }
        })
        .collect::<Vec<_>>();

    debug!("Rendered contributor table with {} rows", rows.len());

    DisplayTable {
        title: title.into(),
        header,
        rows,
    }
}
