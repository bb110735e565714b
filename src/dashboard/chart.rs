//! Chart models handed to the rendering layer.
//!
//! These are plain data: categories, values, colors and labels. Nothing here
//! knows how to draw.

use serde::{Deserialize, Serialize};

/// Marker color for a bar trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerColor {
    /// Same color for every bar of the trace
    Uniform(String),
    /// One color per bar
    PerBar(Vec<String>),
}

/// One series of a bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_color: Option<MarkerColor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
}

impl BarTrace {
    pub fn new(x: Vec<String>, y: Vec<f64>) -> Self {
        Self {
            name: None,
            x,
            y,
            marker_color: None,
            text: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: MarkerColor) -> Self {
        self.marker_color = Some(color);
        self
    }

    pub fn with_text(mut self, text: Vec<String>) -> Self {
        self.text = text;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Bar chart made of one or more traces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub traces: Vec<BarTrace>,
}

impl BarChart {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            traces: Vec::new(),
        }
    }

    /// True when no trace has a single bar
    pub fn is_empty(&self) -> bool {
        self.traces.iter().all(BarTrace::is_empty)
    }
}

/// Donut chart of values per label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Fraction of the radius cut out of the center
    pub hole: f64,
    /// Text drawn in the hole
    pub annotation: String,
}

impl PieChart {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_color_serializes_untagged() {
        let uniform = serde_json::to_value(MarkerColor::Uniform("lime".to_string())).unwrap();
        assert_eq!(uniform, serde_json::json!("lime"));

        let per_bar =
            serde_json::to_value(MarkerColor::PerBar(vec!["red".to_string(), "green".to_string()]))
                .unwrap();
        assert_eq!(per_bar, serde_json::json!(["red", "green"]));
    }

    #[test]
    fn test_empty_chart() {
        let mut chart = BarChart::new(None);
        assert!(chart.is_empty());
        chart.traces.push(BarTrace::new(Vec::new(), Vec::new()));
        assert!(chart.is_empty());
        chart
            .traces
            .push(BarTrace::new(vec!["2022-1".to_string()], vec![1.0]).with_name("a"));
        assert!(!chart.is_empty());
    }
}
