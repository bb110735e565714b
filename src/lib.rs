//! Density Metrics
//!
//! Activity, community and performance density views for
//! open-source organizations.
//!
//! The crate turns a pre-loaded dataset of per-repository metrics into
//! chart and table view models for three dashboard tabs. Every view is a
//! pure function of the dataset, the dashboard configuration and the
//! current selection (organization plus optional chart click).
//!
//! ## Getting Started
//!
//! ```bash
//! density render --data dataset.json --tab communities --org kubernetes
//! density --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod dashboard;
pub mod output;
pub mod parser;
pub mod utils;
