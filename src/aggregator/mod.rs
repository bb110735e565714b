//! Aggregation of dataset rows into chart and table inputs.
//!
//! This module transforms filtered records into:
//! - Contributor x month commit matrices and their trend labels
//! - Monthly activity breakdowns and weighted density shares
//! - Performance buckets, top-N repository scores and monthly segments
//! - Unique committer counts

pub mod activity;
pub mod committers;
pub mod performance;
pub mod pivot;
pub mod trend;
pub mod window;

// Re-export main types and functions
pub use activity::{activity_breakdown, density_shares, ActivityWeights, MonthlyActivity, RepositoryShare, DEFAULT_WEIGHTS};
pub use committers::{unique_committers, CommitterCount};
pub use performance::{classify_event, monthly_segments, repository_scores, RepositoryScore, Segment, SegmentCount};
pub use pivot::{build_contributor_matrix, filter_contributions, ContributorKey, ContributorMonthMatrix, ContributorRow};
pub use trend::{classify, classify_matrix, TrendLabel, TrendTable};
pub use window::ReportingWindow;
