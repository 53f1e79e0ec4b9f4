//! Tree reconstruction for TimeCamp exports.
//!
//! TimeCamp writes its hierarchy as a flat, pre-order list of rows with no
//! depth column. The only structural hint is the leaf marker: a branch row
//! that follows leaf rows cannot be a child of the node holding those
//! leaves, so it belongs somewhere higher up the tree.
//!
//! # Algorithm
//! 1. Descend from the root. Leaf rows are appended to the current parent;
//!    a branch row is appended and becomes the new current parent.
//! 2. Descent halts at end of input, at the root-level `Total` row, or at a
//!    branch row arriving after the current parent already holds leaves.
//! 3. On the last kind of halt the driver parses that branch's subtree
//!    detached, then reattaches it by comparing leftmost-spine heights:
//!    after `root height - subtree height` last-child hops from the root we
//!    reach a peer of the subtree, so it is appended to the node one hop
//!    above that peer.
//! 4. The `Total` row is consumed at the root as the root's rollup.

use super::record::FlatRecord;
use super::time_spec::parse_minutes;
use crate::tree::Node;
use crate::utils::config::{ROOT_LABEL, TOTAL_LABEL};
use crate::utils::error::ParseError;
use log::{debug, warn};

/// Explicit read position over the record sequence
#[derive(Debug, Clone)]
pub struct RecordCursor<'a> {
    records: &'a [FlatRecord],
    position: usize,
}

impl<'a> RecordCursor<'a> {
    pub fn new(records: &'a [FlatRecord]) -> Self {
        Self {
            records,
            position: 0,
        }
    }

    /// Record under the cursor, without consuming it
    pub fn peek(&self) -> Option<&'a FlatRecord> {
        self.records.get(self.position)
    }

    pub fn advance(&mut self) {
        if self.position < self.records.len() {
            self.position += 1;
        }
    }

    /// Index of the next record to be read
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.records.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

/// Why a descent stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    /// No records left
    EndOfInput,

    /// Cursor sits on the root-level `Total` row
    Total,

    /// Cursor sits on a branch row that belongs higher up the tree
    Reattach,
}

/// Rebuild the tree from a full record sequence
///
/// **Public** - main entry point for the `timecamp` profile
///
/// # Errors
/// * `ParseError::MalformedTimeSpec` - a leaf or rollup duration is malformed
/// * `ParseError::InvalidStructure` - a subtree has no valid place in the tree
pub fn reconstruct(records: &[FlatRecord]) -> Result<Node, ParseError> {
    let mut cursor = RecordCursor::new(records);
    reconstruct_from(&mut cursor)
}

/// Rebuild the tree starting at the cursor's position
///
/// On return the cursor sits just past the last consumed record, so callers
/// can see where parsing stopped.
pub fn reconstruct_from(cursor: &mut RecordCursor<'_>) -> Result<Node, ParseError> {
    let mut root = Node::branch(ROOT_LABEL, None);
    let mut halt = descend(cursor, &mut root)?;

    while halt == Halt::Reattach {
        let Some(record) = cursor.peek() else {
            break;
        };
        cursor.advance();

        let mut subtree = branch_node(record)?;
        halt = descend(cursor, &mut subtree)?;
        reattach(&mut root, subtree)?;
    }

    if halt == Halt::Total {
        if let Some(record) = cursor.peek() {
            let minutes = parse_minutes(&record.time_spec)?;
            cursor.advance();
            root.set_total(minutes)?;
            debug!("Root total: {} minutes", minutes);
        }
        if !cursor.is_exhausted() {
            warn!(
                "Ignoring {} records after the '{}' row",
                cursor.remaining(),
                TOTAL_LABEL
            );
        }
    }

    debug!(
        "Reconstructed {} nodes from {} records",
        root.count_nodes(),
        cursor.position()
    );
    Ok(root)
}

/// Fill `parent` depth-first until a halt condition
fn descend(cursor: &mut RecordCursor<'_>, parent: &mut Node) -> Result<Halt, ParseError> {
    while let Some(record) = cursor.peek() {
        if record.is_leaf() {
            if record.label == TOTAL_LABEL {
                return Ok(Halt::Total);
            }
            let leaf = Node::leaf(record.label.as_str(), parse_minutes(&record.time_spec)?);
            cursor.advance();
            parent.push_child(leaf)?;
            continue;
        }

        if parent.first_child_is_leaf() {
            debug!(
                "'{}' follows leaves of '{}', deferring placement",
                record.label, parent.name
            );
            return Ok(Halt::Reattach);
        }

        let node = branch_node(record)?;
        cursor.advance();
        let child = parent.push_child(node)?;
        return descend(cursor, child);
    }

    Ok(Halt::EndOfInput)
}

/// Build a branch node, capturing the row's rollup when it has one
fn branch_node(record: &FlatRecord) -> Result<Node, ParseError> {
    let total = if record.time_spec.is_empty() {
        None
    } else {
        Some(parse_minutes(&record.time_spec)?)
    };
    Ok(Node::branch(record.label.as_str(), total))
}

/// Place a finished subtree under the ancestor matching its height
fn reattach(root: &mut Node, subtree: Node) -> Result<(), ParseError> {
    let root_height = root.leftmost_height();
    let subtree_height = subtree.leftmost_height();

    let hops = root_height
        .checked_sub(subtree_height)
        .and_then(|peer_depth| peer_depth.checked_sub(1))
        .ok_or_else(|| {
            ParseError::InvalidStructure(format!(
                "'{}' (height {}) does not fit under '{}' (height {})",
                subtree.name, subtree_height, root.name, root_height
            ))
        })?;

    let anchor = root.descend_last(hops)?;
    debug!(
        "Reattaching '{}' under '{}' ({} hops from root)",
        subtree.name, anchor.name, hops
    );
    anchor.push_child(subtree)?;
    Ok(())
}
