//! Output writers for view documents.
//!
//! Views are written as pretty JSON for the rendering layer to consume.

pub mod json;

// Re-export main functions
pub use json::{read_view, validate_path, view_to_string, write_view, ViewDocument};
