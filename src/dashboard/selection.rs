//! User selection state and click payload handling.
//!
//! A selection is what the hosting UI knows at the time of an interaction:
//! the organization picker value and the last click on each overview chart.
//! `click` holds the click on the tab's main chart (the density bars, the
//! committer bars or the PR pie); `issue_click` holds the click on the issue
//! pie, which drives the issue breakdown on its own.
//! Hover and box-selection payloads are accepted but do not change any view.

use crate::utils::config::DashboardConfig;
use crate::utils::error::SelectionError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which field of a clicked point carries the repository name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickField {
    /// Bar charts label their bars through `text`
    Text,
    /// Pie charts expose the slice name as `label`
    Label,
}

impl ClickField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClickField::Text => "text",
            ClickField::Label => "label",
        }
    }
}

/// Raw selection state received from the UI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub organization: Option<String>,
    pub click: Option<Value>,
    pub issue_click: Option<Value>,
    pub hover: Option<Value>,
    pub selected: Option<Value>,
}

/// Organization and repository a view is computed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSelection {
    pub organization: String,
    pub repository: String,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_click(mut self, click: Value) -> Self {
        self.click = Some(click);
        self
    }

    pub fn with_issue_click(mut self, click: Value) -> Self {
        self.issue_click = Some(click);
        self
    }

    /// Selected organization, or the configured default when none is chosen
    pub fn organization_or_default(&self, config: &DashboardConfig) -> String {
        self.organization
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .unwrap_or(config.default_organization.as_str())
            .to_string()
    }

    /// Resolve the organization and drill-down repository
    ///
    /// Without a click the configured default organization and repository
    /// are shown, matching what the dashboard displays on first load.
    ///
    /// # Errors
    /// * `SelectionError::MissingField` - the click payload has no
    ///   `points[0].<field>`
    pub fn resolve(
        &self,
        config: &DashboardConfig,
        field: ClickField,
    ) -> Result<ResolvedSelection, SelectionError> {
        self.resolve_click(self.click.as_ref(), config, field)
    }

    /// Same as [`Selection::resolve`], driven by the issue pie click
    ///
    /// # Errors
    /// * `SelectionError::MissingField` - the click payload has no
    ///   `points[0].label`
    pub fn resolve_issue(&self, config: &DashboardConfig) -> Result<ResolvedSelection, SelectionError> {
        self.resolve_click(self.issue_click.as_ref(), config, ClickField::Label)
    }

    fn resolve_click(
        &self,
        click: Option<&Value>,
        config: &DashboardConfig,
        field: ClickField,
    ) -> Result<ResolvedSelection, SelectionError> {
        match click {
            None => Ok(ResolvedSelection {
                organization: config.default_organization.clone(),
                repository: config.default_repository.clone(),
            }),
            Some(payload) => Ok(ResolvedSelection {
                organization: self.organization_or_default(config),
                repository: clicked_repository(payload, field)?,
            }),
        }
    }
}

/// Extract the repository name from a click payload
///
/// Expected shape: `{"points": [{"text": "<repo>", ...}]}`
pub fn clicked_repository(payload: &Value, field: ClickField) -> Result<String, SelectionError> {
    let point = payload
        .get("points")
        .and_then(|points| points.get(0))
        .ok_or_else(|| SelectionError::MissingField("points[0]".to_string()))?;

    match point.get(field.as_str()) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(SelectionError::MissingField(format!(
            "points[0].{}",
            field.as_str()
        ))),
    }
}
