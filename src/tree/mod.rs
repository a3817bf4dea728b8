//! Balanced dispatch tree
//!
//! Turns the integer range [lo, hi) into a binary decision tree of height
//! ⌈log2(hi - lo)⌉ via midpoint recursion. Each leaf is one constant of the
//! range, each constant appears in exactly one leaf.

mod node;
mod partition;

pub use node::DispatchNode;
pub use partition::{midpoint, partition, InvalidRangeError};

/// Validated dispatch tree over `[lo, hi)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTree {
    lo: usize,
    hi: usize,
    root: DispatchNode,
}

impl DispatchTree {
    /// Build the tree covering `[0, height)`.
    pub fn build(height: i64) -> Result<Self, InvalidRangeError> {
        Self::build_range(0, height)
    }

    /// Build the tree covering `[lo, hi)`.
    pub fn build_range(lo: i64, hi: i64) -> Result<Self, InvalidRangeError> {
        let root = partition(lo, hi)?;
        // partition() has already proven both bounds are non-negative usizes
        Ok(Self {
            lo: lo as usize,
            hi: hi as usize,
            root,
        })
    }

    /// Root node
    pub fn root(&self) -> &DispatchNode {
        &self.root
    }

    /// Consume the tree, returning the root
    pub fn into_root(self) -> DispatchNode {
        self.root
    }

    /// Inclusive lower bound
    pub fn lo(&self) -> usize {
        self.lo
    }

    /// Exclusive upper bound
    pub fn hi(&self) -> usize {
        self.hi
    }

    /// Number of constants covered
    pub fn len(&self) -> usize {
        self.hi - self.lo
    }

    /// Always false: empty ranges are rejected at construction
    pub fn is_empty(&self) -> bool {
        self.hi == self.lo
    }

    /// Exact height: ⌈log2(hi - lo)⌉
    pub fn height_bound(&self) -> usize {
        ceil_log2(self.len())
    }
}

/// ⌈log2(n)⌉ in integer arithmetic, with ⌈log2(1)⌉ = 0.
pub fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    (usize::BITS - (n - 1).leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_logarithmic() {
        for t in [1, 2, 3, 4, 5, 31, 32, 33, 100, 1000] {
            let tree = DispatchTree::build(t).expect("positive height");
            assert_eq!(tree.root().depth(), tree.height_bound(), "height {}", t);
        }
    }

    #[test]
    fn test_ceil_log2() {
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(5), 3);
        assert_eq!(ceil_log2(32), 5);
        assert_eq!(ceil_log2(33), 6);
    }

    #[test]
    fn test_range_accessors() {
        let tree = DispatchTree::build_range(3, 8).expect("valid range");
        assert_eq!(tree.lo(), 3);
        assert_eq!(tree.hi(), 8);
        assert_eq!(tree.len(), 5);
        assert!(!tree.is_empty());
        assert_eq!(tree.into_root().leaf_values(), vec![3, 4, 5, 6, 7]);
    }
}
