//! Flat views derived from a finished tree.
//!
//! The metrics stage never walks the tree itself. It consumes the list of
//! stories (leaves annotated with their sprint and project) and the map of
//! self-reported rollups produced here.

use super::node::Node;
use crate::utils::error::MetricsError;
use log::debug;
use std::collections::HashMap;

/// A leaf three levels below the grouping node, with its ancestry copied on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// Story label, e.g. "(5) Implement widget"
    pub name: String,

    /// Minutes logged against the story
    pub time: u64,

    /// Name of the enclosing sprint
    pub sprint: String,

    /// Name of the enclosing project
    pub project: String,
}

/// Flatten grouping → project → sprint → story into an ordered story list
///
/// **Public** - main entry point for the metrics stage
///
/// # Errors
/// * `MetricsError::UnexpectedShape` - the tree is not exactly three levels
///   deep below the grouping node
pub fn normalize(root: &Node) -> Result<Vec<Story>, MetricsError> {
    let grouping = root.children().first().ok_or_else(|| {
        MetricsError::UnexpectedShape(format!("'{}' has no grouping node", root.name))
    })?;

    let mut stories = Vec::new();
    for project in grouping.children() {
        expect_branch(project, "project")?;
        for sprint in project.children() {
            expect_branch(sprint, "sprint")?;
            for story in sprint.children() {
                let time = story.time().ok_or_else(|| {
                    MetricsError::UnexpectedShape(format!(
                        "'{}' under sprint '{}' is not a story",
                        story.name, sprint.name
                    ))
                })?;
                stories.push(Story {
                    name: story.name.clone(),
                    time,
                    sprint: sprint.name.clone(),
                    project: project.name.clone(),
                });
            }
        }
    }

    debug!(
        "Normalized {} stories from {} projects",
        stories.len(),
        grouping.children().len()
    );
    Ok(stories)
}

fn expect_branch(node: &Node, level: &str) -> Result<(), MetricsError> {
    if node.is_leaf() {
        return Err(MetricsError::UnexpectedShape(format!(
            "expected {} '{}' to be a branch",
            level, node.name
        )));
    }
    Ok(())
}

/// Collect every self-reported rollup in the tree, keyed by node name
///
/// Later nodes overwrite earlier ones with the same name.
pub fn get_totals(root: &Node) -> HashMap<String, u64> {
    let mut totals = HashMap::new();
    collect_totals(root, &mut totals);
    totals
}

fn collect_totals(node: &Node, totals: &mut HashMap<String, u64>) {
    if let Some(total) = node.total() {
        totals.insert(node.name.clone(), total);
    }
    for child in node.children() {
        collect_totals(child, totals);
    }
}
