//! Group stories by sprint.
//!
//! Sprints are identified by name alone. Two sprints sharing a name in
//! different projects end up in one group.

use crate::tree::Story;
use log::debug;
use std::collections::HashMap;

/// Stories belonging to one sprint, in input order
#[derive(Debug, Clone)]
pub struct SprintGroup<'a> {
    /// Sprint name
    pub name: &'a str,

    /// Project of the first story seen in this sprint
    pub project: &'a str,

    pub stories: Vec<&'a Story>,
}

/// Group stories by sprint, ordering groups by first appearance
pub fn group_by_sprint(stories: &[Story]) -> Vec<SprintGroup<'_>> {
    let mut groups: Vec<SprintGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for story in stories {
        let slot = *index.entry(story.sprint.as_str()).or_insert_with(|| {
            groups.push(SprintGroup {
                name: story.sprint.as_str(),
                project: story.project.as_str(),
                stories: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].stories.push(story);
    }

    debug!("Grouped {} stories into {} sprints", stories.len(), groups.len());
    groups
}
