//! Pending charts awaiting a blow-up.

use std::collections::VecDeque;

use crate::config::Traversal;
use crate::label::ChartLabel;

/// Charts that are not in normal crossing form and have no children yet.
///
/// New charts are pushed at the back. Depth-first traversal takes from the
/// back, breadth-first from the front.
#[derive(Clone, Debug)]
pub struct Worklist {
    pending: VecDeque<ChartLabel>,
    traversal: Traversal,
}

impl Worklist {
    /// Creates an empty worklist.
    #[must_use]
    pub fn new(traversal: Traversal) -> Self {
        Self {
            pending: VecDeque::new(),
            traversal,
        }
    }

    /// The traversal policy.
    #[must_use]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Adds a chart.
    pub fn push(&mut self, label: ChartLabel) {
        self.pending.push_back(label);
    }

    /// The chart the next `pop` returns.
    #[must_use]
    pub fn peek(&self) -> Option<&ChartLabel> {
        match self.traversal {
            Traversal::DepthFirst => self.pending.back(),
            Traversal::BreadthFirst => self.pending.front(),
        }
    }

    /// Removes and returns the next chart.
    pub fn pop(&mut self) -> Option<ChartLabel> {
        match self.traversal {
            Traversal::DepthFirst => self.pending.pop_back(),
            Traversal::BreadthFirst => self.pending.pop_front(),
        }
    }

    /// Returns true if `label` is pending.
    #[must_use]
    pub fn contains(&self, label: &ChartLabel) -> bool {
        self.pending.contains(label)
    }

    /// Number of pending charts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending charts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ChartLabel> + '_ {
        self.pending.iter()
    }
}
