//! Render command implementation.
//!
//! The render command:
//! 1. Loads the dashboard configuration
//! 2. Loads and validates the dataset
//! 3. Builds the selection from CLI input
//! 4. Computes the requested tab
//! 5. Writes the view document

use super::models::RenderArgs;
use crate::dashboard::{render, DashboardView, Selection, TabView};
use crate::output::{view_to_string, write_view, ViewDocument};
use crate::parser::load_dataset;
use crate::utils::config::DashboardConfig;
use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::time::Instant;

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Config or dataset files that cannot be read or parsed
/// * Malformed click payloads
/// * File write errors
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Rendering {} tab from: {}", args.tab, args.data.display());

    // Step 1: Configuration
    info!("Step 1/4: Loading configuration...");
    let config = match &args.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    debug!("Config: {:?}", config);

    // Step 2: Dataset
    info!("Step 2/4: Loading dataset...");
    let dataset = load_dataset(&args.data).context("Failed to load dataset")?;

    // Step 3: Compute view
    info!("Step 3/4: Computing view...");
    let selection = build_selection(&args)?;
    let dashboard = render(args.tab, &dataset, &config, &selection)
        .context("Failed to interpret selection")?;

    // Step 4: Output
    info!("Step 4/4: Writing output...");
    let document = ViewDocument::new(dashboard);
    if args.stdout {
        println!("{}", view_to_string(&document)?);
    } else {
        write_view(&document, &args.output).context("Failed to write view JSON")?;
        info!("✓ View written to: {}", args.output.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("VIEW SUMMARY");
        println!("{}", "=".repeat(80));
        println!("{}", view_summary(&document.dashboard));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Render completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Turn CLI input into a selection
fn build_selection(args: &RenderArgs) -> Result<Selection> {
    let mut selection = Selection::new();
    selection.organization = args.organization.clone();
    if let Some(raw) = &args.click {
        selection.click = Some(parse_click(raw)?);
    }
    if let Some(raw) = &args.issue_click {
        selection.issue_click = Some(parse_click(raw)?);
    }
    Ok(selection)
}

fn parse_click(raw: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(raw).context("Click payload is not valid JSON")?;
    if !value.is_object() {
        anyhow::bail!("Click payload must be a JSON object");
    }
    Ok(value)
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.data.as_os_str().is_empty() {
        anyhow::bail!("Dataset path cannot be empty");
    }

    if let Some(org) = &args.organization {
        if org.trim().is_empty() {
            anyhow::bail!("Organization cannot be blank");
        }
    }

    for raw in [&args.click, &args.issue_click].into_iter().flatten() {
        parse_click(raw)?;
    }

    if !args.stdout && args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}

/// Short human-readable description of a view
pub fn view_summary(dashboard: &DashboardView) -> String {
    let mut lines = vec![
        format!("Organization: {}", dashboard.organization),
        format!(
            "Drill-down:   {}/{}",
            dashboard.drilldown.organization, dashboard.drilldown.repository
        ),
    ];

    match &dashboard.view {
        TabView::Activities(v) => {
            lines.push(format!("Repositories in density chart: {}", v.density.traces.len()));
            let months = v.breakdown.traces.first().map_or(0, |t| t.x.len());
            lines.push(format!("Breakdown months: {}", months));
        }
        TabView::Communities(v) => {
            lines.push(format!("Repositories in committer chart: {}", v.committers.traces.len()));
            lines.push(format!("Contributors in table: {}", v.breakdown.rows.len()));
        }
        TabView::Performances(v) => {
            lines.push(format!("PR repositories: {}", v.pull_requests.labels.len()));
            lines.push(format!("Issue repositories: {}", v.issues.labels.len()));
        }
    }

    lines.join("\n")
}
