//! The editable sequence of control nodes.

use kurbo::{Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::SplineError;

/// The ordered control nodes of a spline path, plus the current
/// selection.
///
/// Node order is path order: node `i` connects to node `i + 1`. The
/// selected index always stays in `0..len` on a non-empty path; it is
/// moved with [`select_previous`](ControlPath::select_previous) and
/// [`select_next`](ControlPath::select_next), which saturate at the
/// ends rather than wrapping. The node count is fixed at construction;
/// editing only ever changes coordinates.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct ControlPath {
    nodes: Vec<Point>,
    /// Session-local state, not part of the path's identity.
    #[cfg_attr(feature = "serde", serde(skip))]
    selected: usize,
}

impl ControlPath {
    /// Create a path from nodes in path order, with the first node
    /// selected.
    pub fn new(nodes: Vec<Point>) -> ControlPath {
        ControlPath { nodes, selected: 0 }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// The node at `ix`.
    pub fn node(&self, ix: usize) -> Result<Point, SplineError> {
        self.nodes
            .get(ix)
            .copied()
            .ok_or(SplineError::OutOfRange {
                index: ix as isize,
                len: self.nodes.len(),
            })
    }

    /// The index of the currently selected node.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_selected(&self, ix: usize) -> bool {
        ix == self.selected
    }

    /// Move the selection one node toward the start of the path.
    ///
    /// A no-op when the first node is already selected.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection one node toward the end of the path.
    ///
    /// A no-op when the last node is already selected.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.nodes.len() {
            self.selected += 1;
        }
    }

    /// Offset the selected node by `delta`.
    pub fn move_selected_by(&mut self, delta: Vec2) {
        if let Some(node) = self.nodes.get_mut(self.selected) {
            *node += delta;
        }
    }

    /// Place the selected node at `pos`.
    pub fn move_selected_to(&mut self, pos: Point) {
        if let Some(node) = self.nodes.get_mut(self.selected) {
            *node = pos;
        }
    }
}
