//! Productivity metrics over the story list and rollup totals.
//!
//! Every function here is pure: it returns its value and leaves display to
//! the output module. Degenerate inputs (no points, no sprints) are errors
//! rather than zeros.

use super::sprint_builder::group_by_sprint;
use crate::tree::{Node, Story};
use crate::utils::error::MetricsError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-sprint figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintSummary {
    /// Sprint name
    pub name: String,

    /// Project the sprint was first seen in
    pub project: String,

    /// Number of stories in the sprint
    pub story_count: usize,

    /// Sum of story points
    pub story_points: u64,

    /// Rolled-up minutes reported for the sprint
    pub time: u64,

    /// Minutes per story point, `None` for a sprint worth zero points
    pub velocity: Option<f64>,
}

/// Means across all sprints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintAverages {
    pub story_points: f64,
    pub time: f64,
}

/// Story points encoded in a story name's leading `(<digits>)` token
///
/// # Example
/// ```ignore
/// assert_eq!(story_points("(5) Implement widget")?, 5);
/// ```
pub fn story_points(name: &str) -> Result<u64, MetricsError> {
    name.split_whitespace()
        .next()
        .and_then(|token| token.strip_prefix('('))
        .and_then(|token| token.strip_suffix(')'))
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| MetricsError::InvalidStoryPoints(name.to_string()))
}

/// Sum of story points across `stories`
pub fn total_story_points<'a, I>(stories: I) -> Result<u64, MetricsError>
where
    I: IntoIterator<Item = &'a Story>,
{
    stories
        .into_iter()
        .try_fold(0u64, |sum, story| {
            sum.checked_add(story_points(&story.name)?)
                .ok_or(MetricsError::Overflow("story points"))
        })
}

/// The root's own rollup, in minutes
///
/// Read from the root itself, so a descendant sharing the root's name
/// cannot shadow it.
pub fn total_time(root: &Node) -> Result<u64, MetricsError> {
    root.total()
        .ok_or_else(|| MetricsError::MissingTotal(root.name.clone()))
}

/// Minutes per story point
///
/// # Errors
/// * `MetricsError::NoStoryPoints` - `story_points` is zero
pub fn velocity(minutes: u64, story_points: u64) -> Result<f64, MetricsError> {
    if story_points == 0 {
        return Err(MetricsError::NoStoryPoints);
    }
    Ok(minutes as f64 / story_points as f64)
}

/// Points, time and velocity for each sprint, in first-seen order
///
/// Sprint time comes from the sprint's own rollup, not from its stories.
///
/// # Errors
/// * `MetricsError::MissingTotal` - a sprint row carried no rollup
/// * `MetricsError::InvalidStoryPoints` - a story name has no points prefix
/// * `MetricsError::Overflow` - a sprint's story points overflow
pub fn sprint_breakdown(
    stories: &[Story],
    totals: &HashMap<String, u64>,
) -> Result<Vec<SprintSummary>, MetricsError> {
    group_by_sprint(stories)
        .into_iter()
        .map(|group| {
            let story_points = total_story_points(group.stories.iter().copied())?;
            let time = lookup_total(totals, group.name)?;
            debug!(
                "Sprint '{}': {} points, {} minutes",
                group.name, story_points, time
            );
            Ok(SprintSummary {
                name: group.name.to_string(),
                project: group.project.to_string(),
                story_count: group.stories.len(),
                story_points,
                time,
                velocity: velocity(time, story_points).ok(),
            })
        })
        .collect()
}

/// Arithmetic means of per-sprint points and time
///
/// # Errors
/// * `MetricsError::NoSprints` - `sprints` is empty
/// * `MetricsError::Overflow` - a sum across sprints overflows
pub fn sprint_averages(sprints: &[SprintSummary]) -> Result<SprintAverages, MetricsError> {
    if sprints.is_empty() {
        return Err(MetricsError::NoSprints);
    }

    let count = sprints.len() as f64;
    let points = checked_sum(sprints.iter().map(|s| s.story_points), "story points")?;
    let time = checked_sum(sprints.iter().map(|s| s.time), "sprint time")?;

    Ok(SprintAverages {
        story_points: points as f64 / count,
        time: time as f64 / count,
    })
}

fn checked_sum(
    mut values: impl Iterator<Item = u64>,
    what: &'static str,
) -> Result<u64, MetricsError> {
    values.try_fold(0u64, |sum, value| {
        sum.checked_add(value).ok_or(MetricsError::Overflow(what))
    })
}

fn lookup_total(totals: &HashMap<String, u64>, name: &str) -> Result<u64, MetricsError> {
    totals
        .get(name)
        .copied()
        .ok_or_else(|| MetricsError::MissingTotal(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(name: &str, sprint: &str) -> Story {
        Story {
            name: name.to_string(),
            time: 30,
            sprint: sprint.to_string(),
            project: "P1".to_string(),
        }
    }

    fn totals(entries: &[(&str, u64)]) -> HashMap<String, u64> {
        entries
            .iter()
            .map(|(name, minutes)| (name.to_string(), *minutes))
            .collect()
    }

    #[test]
    fn test_story_points() {
        assert_eq!(story_points("(5) Implement widget").unwrap(), 5);
        assert_eq!(story_points("(13)").unwrap(), 13);
        assert!(story_points("Implement widget").is_err());
        assert!(story_points("(x) Widget").is_err());
        assert!(story_points("() Widget").is_err());
        assert!(story_points("").is_err());
    }

    #[test]
    fn test_total_story_points() {
        let stories = vec![story("(3) a", "S1"), story("(5) b", "S1")];
        assert_eq!(total_story_points(&stories).unwrap(), 8);
        assert_eq!(total_story_points(&Vec::<Story>::new()).unwrap(), 0);
    }

    #[test]
    fn test_velocity() {
        assert_eq!(velocity(600, 10).unwrap(), 60.0);
        assert!(matches!(velocity(600, 0), Err(MetricsError::NoStoryPoints)));
    }

    #[test]
    fn test_total_time_requires_root_rollup() {
        assert_eq!(total_time(&Node::branch("TimeCamp", Some(90))).unwrap(), 90);
        assert!(matches!(
            total_time(&Node::branch("TimeCamp", None)),
            Err(MetricsError::MissingTotal(name)) if name == "TimeCamp"
        ));
    }

    #[test]
    fn test_total_story_points_overflow() {
        let stories = vec![story("(18446744073709551615) a", "S1"), story("(1) b", "S1")];
        assert!(matches!(
            total_story_points(&stories),
            Err(MetricsError::Overflow("story points"))
        ));
    }

    #[test]
    fn test_sprint_breakdown_zero_point_sprint() {
        let stories = vec![story("(3) a", "S1"), story("(0) spike", "S2")];
        let sprints =
            sprint_breakdown(&stories, &totals(&[("S1", 30), ("S2", 15)])).unwrap();

        assert_eq!(sprints[0].velocity, Some(10.0));
        assert_eq!(sprints[1].story_points, 0);
        assert_eq!(sprints[1].velocity, None);
    }

    #[test]
    fn test_sprint_breakdown_uses_rollups() {
        let stories = vec![
            story("(3) a", "S1"),
            story("(5) b", "S1"),
            story("(2) c", "S2"),
        ];
        let sprints =
            sprint_breakdown(&stories, &totals(&[("S1", 80), ("S2", 20)])).unwrap();

        assert_eq!(sprints.len(), 2);
        assert_eq!(sprints[0].story_points, 8);
        assert_eq!(sprints[0].time, 80);
        assert_eq!(sprints[0].velocity, Some(10.0));
        assert_eq!(sprints[1].story_count, 1);
    }

    #[test]
    fn test_sprint_breakdown_missing_total() {
        let stories = vec![story("(3) a", "S1")];
        assert!(matches!(
            sprint_breakdown(&stories, &totals(&[])),
            Err(MetricsError::MissingTotal(name)) if name == "S1"
        ));
    }

    #[test]
    fn test_sprint_averages() {
        let stories = vec![story("(3) a", "S1"), story("(5) b", "S2")];
        let sprints =
            sprint_breakdown(&stories, &totals(&[("S1", 30), ("S2", 60)])).unwrap();
        let averages = sprint_averages(&sprints).unwrap();

        assert_eq!(averages.story_points, 4.0);
        assert_eq!(averages.time, 45.0);
        assert!(matches!(sprint_averages(&[]), Err(MetricsError::NoSprints)));
    }

    #[test]
    fn test_sprint_averages_overflow() {
        let summary = |time| SprintSummary {
            name: "S".to_string(),
            project: "P1".to_string(),
            story_count: 1,
            story_points: 1,
            time,
            velocity: None,
        };
        let sprints = vec![summary(u64::MAX), summary(1)];

        assert!(matches!(
            sprint_averages(&sprints),
            Err(MetricsError::Overflow("sprint time"))
        ));
    }
}
