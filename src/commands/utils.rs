use crate::parser::{load_dataset, DatasetSummary};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a dataset JSON file
pub fn validate_dataset_file(file_path: PathBuf) -> Result<()> {
    println!("Validating dataset: {}", file_path.display());

    let dataset = load_dataset(&file_path)?;
    let summary = DatasetSummary::of(&dataset);

    println!("✓ Valid dataset JSON");
    println!("  Contributions: {}", summary.contributions);
    println!("  Activity rows: {}", summary.activity);
    println!("  Density rows:  {}", summary.density);
    println!("  Pull requests: {}", summary.pull_requests);
    println!("  Issues:        {}", summary.issues);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Density Metrics View Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string       - RFC 3339 timestamp");
        println!("  organization: string       - Organization of the overview charts");
        println!("  drilldown: object          - Organization/repository of drill-down charts");
        println!("  view: object               - Tab view model");
        println!("    tab: string              - activities | communities | performances");
        println!("    charts: object           - Bar/pie charts and tables of the tab");
        println!("      traces: array          - Bar series (x, y, name, marker_color, text)");
        println!("      labels/values: array   - Pie slices");
        println!("      header/rows: array     - Contributor table with per-cell trends");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Density Metrics v{}", env!("CARGO_PKG_VERSION"));
    println!("View Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Activity, community and performance density views for open-source organizations.");
}
