//! Reporting window: the ordered months every matrix is indexed by.

use crate::parser::YearMonth;
use log::warn;
use serde::Serialize;

/// Ordered run of consecutive months
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportingWindow {
    months: Vec<YearMonth>,
}

impl ReportingWindow {
    /// `len` consecutive months starting at `start`
    ///
    /// Stops early if the calendar runs out of representable years.
    pub fn from_start(start: YearMonth, len: usize) -> Self {
        let months = std::iter::successors(Some(start), YearMonth::succ)
            .take(len)
            .collect();
        Self { months }
    }

    /// Every month from the earliest to the latest of `months`, gaps included
    ///
    /// # Arguments
    /// * `months` - Months present in the filtered records, in any order
    /// * `max_len` - Upper bound on the window length; longer spans keep
    ///   the most recent `max_len` months
    pub fn spanning(months: impl IntoIterator<Item = YearMonth>, max_len: usize) -> Self {
        let mut bounds: Option<(YearMonth, YearMonth)> = None;
        for month in months {
            bounds = Some(match bounds {
                None => (month, month),
                Some((first, last)) => (first.min(month), last.max(month)),
            });
        }

        let Some((first, last)) = bounds else {
            return Self::default();
        };

        let span = usize::try_from(first.months_until(last))
            .unwrap_or(usize::MAX)
            .saturating_add(1);
        if span <= max_len {
            return Self::from_start(first, span);
        }

        let start = last.offset(1 - max_len as i64).unwrap_or(first);
        warn!(
            "Data spans {} months, keeping the latest {} ({} onwards)",
            span, max_len, start
        );
        Self::from_start(start, max_len)
    }

    pub fn months(&self) -> &[YearMonth] {
        &self.months
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Column position of `month`, if it lies inside the window
    pub fn index_of(&self, month: YearMonth) -> Option<usize> {
        self.months.binary_search(&month).ok()
    }

    /// Column headers: `"Jan"`, `"Feb"`, ... when every month falls in the
    /// same year, otherwise the full `"2022-1"` form.
    pub fn labels(&self) -> Vec<String> {
        let single_year = self
            .months
            .first()
            .is_some_and(|first| self.months.iter().all(|m| m.year() == first.year()));

        if single_year {
            self.months.iter().map(|m| m.short_label()).collect()
        } else {
            self.months.iter().map(|m| m.to_string()).collect()
        }
    }
}
