use crate::dashboard::Tab;
use std::path::PathBuf;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Dataset JSON file
    pub data: PathBuf,

    /// Tab to compute
    pub tab: Tab,

    /// Selected organization (None = configured default)
    pub organization: Option<String>,

    /// Raw click payload as JSON text
    pub click: Option<String>,

    /// Raw issue pie click payload as JSON text
    pub issue_click: Option<String>,

    /// Optional dashboard configuration TOML
    pub config: Option<PathBuf>,

    /// Output path for the view JSON
    pub output: PathBuf,

    /// Print the view JSON to stdout instead of writing a file
    pub stdout: bool,

    /// Print a text summary of the view
    pub print_summary: bool,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            data: PathBuf::from("dataset.json"),
            tab: Tab::Activities,
            organization: None,
            click: None,
            issue_click: None,
            config: None,
            output: PathBuf::from("view.json"),
            stdout: false,
            print_summary: false,
        }
    }
}
