//! Dispatch tree node representation
//!
//! Node = leaf constant `v`, or a branch at split `m` owning
//!   Low child: [lo, m)
//!   High child: [m, hi)

use std::fmt;

/// Binary dispatch tree node.
///
/// Ownership is strictly parent-to-child; a tree is built once per
/// generation request, rendered once and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum DispatchNode {
    /// Terminal resolving to exactly one constant.
    Leaf {
        /// Constant handed to the continuation.
        value: usize,
    },

    /// Two-way split: `low` covers values below `split`, `high` the rest.
    Branch {
        /// First value covered by `high`.
        split: usize,
        /// Subtree for `[lo, split)`.
        low: Box<DispatchNode>,
        /// Subtree for `[split, hi)`.
        high: Box<DispatchNode>,
    },
}

impl DispatchNode {
    /// Create a leaf for `value`
    pub fn leaf(value: usize) -> Self {
        DispatchNode::Leaf { value }
    }

    /// Create a branch splitting at `split`
    pub fn branch(split: usize, low: DispatchNode, high: DispatchNode) -> Self {
        DispatchNode::Branch {
            split,
            low: Box::new(low),
            high: Box::new(high),
        }
    }

    /// Check if leaf
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, DispatchNode::Leaf { .. })
    }

    /// Longest root-to-leaf path, counted in branches.
    pub fn depth(&self) -> usize {
        match self {
            DispatchNode::Leaf { .. } => 0,
            DispatchNode::Branch { low, high, .. } => 1 + low.depth().max(high.depth()),
        }
    }

    /// Number of terminals.
    pub fn leaf_count(&self) -> usize {
        match self {
            DispatchNode::Leaf { .. } => 1,
            DispatchNode::Branch { low, high, .. } => low.leaf_count() + high.leaf_count(),
        }
    }

    /// Number of conditionals the emitter will produce.
    pub fn branch_count(&self) -> usize {
        match self {
            DispatchNode::Leaf { .. } => 0,
            DispatchNode::Branch { low, high, .. } => {
                1 + low.branch_count() + high.branch_count()
            }
        }
    }

    /// Leaf constants in left-to-right order.
    pub fn leaf_values(&self) -> Vec<usize> {
        let mut values = Vec::with_capacity(self.leaf_count());
        self.collect_leaves(&mut values);
        values
    }

    fn collect_leaves(&self, values: &mut Vec<usize>) {
        match self {
            DispatchNode::Leaf { value } => values.push(*value),
            DispatchNode::Branch { low, high, .. } => {
                low.collect_leaves(values);
                high.collect_leaves(values);
            }
        }
    }
}

impl fmt::Display for DispatchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchNode::Leaf { value } => write!(f, "{}", value),
            DispatchNode::Branch { split, low, high } => {
                write!(f, "({} {} {})", split, low, high)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> DispatchNode {
        DispatchNode::branch(
            2,
            DispatchNode::branch(1, DispatchNode::leaf(0), DispatchNode::leaf(1)),
            DispatchNode::branch(3, DispatchNode::leaf(2), DispatchNode::leaf(3)),
        )
    }

    #[test]
    fn test_counts() {
        let node = four();
        assert_eq!(node.depth(), 2);
        assert_eq!(node.leaf_count(), 4);
        assert_eq!(node.branch_count(), 3);
        assert_eq!(node.leaf_values(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_single_leaf() {
        let node = DispatchNode::leaf(7);
        assert!(node.is_leaf());
        assert_eq!(node.depth(), 0);
        assert_eq!(node.branch_count(), 0);
        assert_eq!(node.leaf_values(), vec![7]);
    }

    #[test]
    fn test_display_sexpr() {
        assert_eq!(four().to_string(), "(2 (1 0 1) (3 2 3))");
        assert_eq!(DispatchNode::leaf(0).to_string(), "0");
    }
}
