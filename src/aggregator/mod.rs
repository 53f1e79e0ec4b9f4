//! Aggregation of the story list into productivity metrics.
//!
//! This module transforms the flat views of a reconstructed tree into:
//! - Sprint groups (first-seen order)
//! - Story point, time and velocity figures
//! - The versioned report consumed by the output module

pub mod metrics;
pub mod report;
pub mod sprint_builder;

// Re-export main types and functions
pub use metrics::{
    sprint_averages, sprint_breakdown, story_points, total_story_points, total_time, velocity,
    SprintAverages, SprintSummary,
};
pub use report::{build_report, MetricsReport};
pub use sprint_builder::{group_by_sprint, SprintGroup};
