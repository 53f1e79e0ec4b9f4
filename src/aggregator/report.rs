//! The full metrics report computed from a reconstructed tree.
//!
//! The report is what gets printed and, optionally, written to JSON.
//! Its schema is versioned so exported files can be checked later.

use super::metrics::{
    sprint_averages, sprint_breakdown, total_story_points, total_time, velocity,
    SprintAverages, SprintSummary,
};
use crate::tree::{get_totals, normalize, Node};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::MetricsError;
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

/// Top-level report structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Sum of story points over all stories
    pub total_story_points: u64,

    /// Root rollup in minutes
    pub total_time: u64,

    /// Minutes per story point over the whole export
    pub velocity: f64,

    /// Per-sprint breakdown in first-seen order
    pub sprints: Vec<SprintSummary>,

    /// Means across `sprints`
    pub averages: SprintAverages,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Compute every metric for `root`
///
/// **Public** - main entry point for metrics calculation
///
/// # Errors
/// Any `MetricsError`; nothing is computed partially.
pub fn build_report(root: &Node) -> Result<MetricsReport, MetricsError> {
    let stories = normalize(root)?;
    let totals = get_totals(root);
    debug!(
        "Building report from {} stories and {} totals",
        stories.len(),
        totals.len()
    );

    let total_story_points = total_story_points(&stories)?;
    let total_time = total_time(root)?;
    let velocity = velocity(total_time, total_story_points)?;
    let sprints = sprint_breakdown(&stories, &totals)?;
    let averages = sprint_averages(&sprints)?;

    Ok(MetricsReport {
        version: SCHEMA_VERSION.to_string(),
        total_story_points,
        total_time,
        velocity,
        sprints,
        averages,
        generated_at: Utc::now().to_rfc3339(),
    })
}
