//! Month-over-month trend classification.
//!
//! For every matrix row and every month after the first, the count is
//! compared with the previous month's. Classification runs one month-pair
//! column at a time over all rows.

use super::pivot::{ContributorKey, ContributorMonthMatrix};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Direction of change between two consecutive months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Increase,
    Decrease,
    Flat,
}

impl TrendLabel {
    /// Display color used for a cell carrying this label
    pub fn color(&self) -> &'static str {
        match self {
            TrendLabel::Increase => "green",
            TrendLabel::Decrease => "red",
            TrendLabel::Flat => NEUTRAL_COLOR,
        }
    }
}

/// Color of cells with no trend (key fields, first month, equal counts)
pub const NEUTRAL_COLOR: &str = "darkslategray";

/// Classify a single pair; equality is `Flat`.
///
/// Values are compared exactly, with no tolerance. Incomparable values
/// (NaN) also classify as `Flat`.
pub fn classify<T: PartialOrd>(previous: &T, current: &T) -> TrendLabel {
    if current > previous {
        TrendLabel::Increase
    } else if current < previous {
        TrendLabel::Decrease
    } else {
        TrendLabel::Flat
    }
}

/// Trend labels for every (row, month > 0) of a matrix
///
/// Stored column-major: `columns[i - 1][row]` classifies month `i` against
/// month `i - 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendTable {
    index: HashMap<ContributorKey, usize>,
    columns: Vec<Vec<TrendLabel>>,
}

impl TrendTable {
    /// Label of `month_index` for `key`; `None` for the first month, for an
    /// index past the window, or an unknown key.
    pub fn get(&self, key: &ContributorKey, month_index: usize) -> Option<TrendLabel> {
        let row = *self.index.get(key)?;
        self.label_at(row, month_index)
    }

    /// Same as [`TrendTable::get`] but addressed by matrix row position
    pub fn label_at(&self, row: usize, month_index: usize) -> Option<TrendLabel> {
        let column = self.columns.get(month_index.checked_sub(1)?)?;
        column.get(row).copied()
    }

    /// Number of classified month pairs (window length - 1)
    pub fn pair_count(&self) -> usize {
        self.columns.len()
    }
}

/// Classify every consecutive month pair of every row
///
/// **Public** - pure; the matrix is not modified
pub fn classify_matrix(matrix: &ContributorMonthMatrix) -> TrendTable {
    let rows = matrix.rows();
    let width = matrix.window().len();

    let columns = (1..width)
        .map(|i| {
            rows.iter()
                .map(|r| classify(&r.counts[i - 1], &r.counts[i]))
                .collect()
        })
        .collect();

    let index = rows
        .iter()
        .enumerate()
        .map(|(position, r)| (r.key.clone(), position))
        .collect();

    TrendTable { index, columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::pivot::build_contributor_matrix;
    use crate::aggregator::window::ReportingWindow;
    use crate::parser::ContributionRecord;

    fn alice_matrix(counts: &[u64]) -> ContributorMonthMatrix {
        let window = ReportingWindow::from_start("2022-1".parse().unwrap(), counts.len());
        let records: Vec<ContributionRecord> = counts
            .iter()
            .zip(window.months())
            .map(|(&commits, &year_month)| ContributionRecord {
                organization: "acme-org".to_string(),
                repository: "widgets".to_string(),
                year_month,
                contributor: "alice".to_string(),
                company: Some("acme".to_string()),
                location: Some("NY".to_string()),
                commits,
            })
            .collect();
        build_contributor_matrix(&records, &window)
    }

    #[test]
    fn test_classify_pairs() {
        assert_eq!(classify(&1u64, &2u64), TrendLabel::Increase);
        assert_eq!(classify(&2u64, &1u64), TrendLabel::Decrease);
        assert_eq!(classify(&3u64, &3u64), TrendLabel::Flat);
    }

    #[test]
    fn test_classify_reals_without_tolerance() {
        assert_eq!(classify(&0.5f64, &0.5000001f64), TrendLabel::Increase);
        assert_eq!(classify(&2.25f64, &2.25f64), TrendLabel::Flat);
        assert_eq!(classify(&f64::NAN, &1.0), TrendLabel::Flat);
    }

    #[test]
    fn test_alice_scenario() {
        let matrix = alice_matrix(&[2, 5, 5, 1]);
        let trends = classify_matrix(&matrix);
        let alice = ContributorKey::new("alice", Some("acme"), Some("NY"));

        let labels: Vec<Option<TrendLabel>> = (0..4).map(|i| trends.get(&alice, i)).collect();
        assert_eq!(
            labels,
            vec![
                None,
                Some(TrendLabel::Increase),
                Some(TrendLabel::Flat),
                Some(TrendLabel::Decrease),
            ]
        );
        assert_eq!(trends.get(&alice, 4), None);
        assert_eq!(trends.pair_count(), 3);
    }

    #[test]
    fn test_unknown_key_and_empty_matrix() {
        let trends = classify_matrix(&ContributorMonthMatrix::default());
        let nobody = ContributorKey::new("nobody", None, None);
        assert_eq!(trends.get(&nobody, 1), None);
        assert_eq!(trends.pair_count(), 0);
    }

    #[test]
    fn test_colors() {
        assert_eq!(TrendLabel::Increase.color(), "green");
        assert_eq!(TrendLabel::Decrease.color(), "red");
        assert_eq!(TrendLabel::Flat.color(), "darkslategray");
    }
}
