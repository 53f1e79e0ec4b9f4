//! Tree vertices rebuilt from a flat time-log export.
//!
//! A node is either a leaf (minutes of effort, no children) or a branch
//! (ordered children, optional self-reported rollup). The split lives in
//! [`NodeKind`] so a leaf can never grow children.

use crate::utils::error::ParseError;

/// Leaf or branch payload of a [`Node`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Bottom-level entry with its own time
    Leaf {
        /// Minutes of effort
        time: u64,
    },

    /// Container row
    Branch {
        /// Children in traversal order
        children: Vec<Node>,

        /// Rollup reported by the export itself, never recomputed
        total: Option<u64>,
    },
}

/// A tree vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Label taken verbatim from the record
    pub name: String,

    pub kind: NodeKind,
}

impl Node {
    pub fn leaf(name: impl Into<String>, time: u64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Leaf { time },
        }
    }

    pub fn branch(name: impl Into<String>, total: Option<u64>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Branch {
                children: Vec::new(),
                total,
            },
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Children in insertion order (empty for leaves)
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Branch { children, .. } => children,
            NodeKind::Leaf { .. } => &[],
        }
    }

    /// Minutes recorded on a leaf
    pub fn time(&self) -> Option<u64> {
        match self.kind {
            NodeKind::Leaf { time } => Some(time),
            NodeKind::Branch { .. } => None,
        }
    }

    /// Rollup carried by a branch, if the export supplied one
    pub fn total(&self) -> Option<u64> {
        match self.kind {
            NodeKind::Branch { total, .. } => total,
            NodeKind::Leaf { .. } => None,
        }
    }

    pub fn set_total(&mut self, minutes: u64) -> Result<(), ParseError> {
        match &mut self.kind {
            NodeKind::Branch { total, .. } => {
                *total = Some(minutes);
                Ok(())
            }
            NodeKind::Leaf { .. } => Err(ParseError::InvalidStructure(format!(
                "cannot set a total on leaf '{}'",
                self.name
            ))),
        }
    }

    /// Append `child` as the last child and hand back a reference to it
    pub fn push_child(&mut self, child: Node) -> Result<&mut Node, ParseError> {
        match &mut self.kind {
            NodeKind::Branch { children, .. } => {
                children.push(child);
                let last = children.len() - 1;
                Ok(&mut children[last])
            }
            NodeKind::Leaf { .. } => Err(ParseError::InvalidStructure(format!(
                "cannot attach '{}' under leaf '{}'",
                child.name, self.name
            ))),
        }
    }

    /// True once this node has started collecting leaves
    pub fn first_child_is_leaf(&self) -> bool {
        self.children().first().is_some_and(Node::is_leaf)
    }

    /// Number of first-child hops down to a node with no children
    pub fn leftmost_height(&self) -> usize {
        let mut height = 0;
        let mut current = self;
        while let Some(first) = current.children().first() {
            height += 1;
            current = first;
        }
        height
    }

    /// Follow the last-child link `hops` times
    pub fn descend_last(&mut self, hops: usize) -> Result<&mut Node, ParseError> {
        let mut current = self;
        for hop in 0..hops {
            let Some(last) = current.children().len().checked_sub(1) else {
                return Err(ParseError::InvalidStructure(format!(
                    "'{}' has no children to descend into (hop {} of {})",
                    current.name,
                    hop + 1,
                    hops
                )));
            };
            current = &mut current.children_mut()[last];
        }
        Ok(current)
    }

    fn children_mut(&mut self) -> &mut [Node] {
        match &mut self.kind {
            NodeKind::Branch { children, .. } => children,
            NodeKind::Leaf { .. } => &mut [],
        }
    }

    /// Total number of nodes in this subtree, itself included
    pub fn count_nodes(&self) -> usize {
        1 + self.children().iter().map(Node::count_nodes).sum::<usize>()
    }
}
