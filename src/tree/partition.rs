//! Range partitioner
//!
//! Split policy: m = lo + (hi - lo) / 2 (floor)
//! Both halves differ in leaf count by at most one, so depth = ⌈log2(hi - lo)⌉.
//! Changing this formula changes every generated artifact.

use thiserror::Error;

use super::DispatchNode;

/// Rejected partition bounds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRangeError {
    /// `hi <= lo`.
    #[error("empty or inverted range [{lo}, {hi})")]
    Empty {
        /// Requested lower bound.
        lo: i64,
        /// Requested upper bound.
        hi: i64,
    },

    /// Negative indices are not supported.
    #[error("negative lower bound {lo}")]
    Negative {
        /// Requested lower bound.
        lo: i64,
    },

    /// Bound does not fit in `usize` on this platform.
    #[error("bound {value} does not fit in usize")]
    Unrepresentable {
        /// Offending bound.
        value: i64,
    },
}

/// Build the balanced dispatch tree covering `[lo, hi)`.
pub fn partition(lo: i64, hi: i64) -> Result<DispatchNode, InvalidRangeError> {
    if lo < 0 {
        return Err(InvalidRangeError::Negative { lo });
    }
    if hi <= lo {
        return Err(InvalidRangeError::Empty { lo, hi });
    }
    let lo_index =
        usize::try_from(lo).map_err(|_| InvalidRangeError::Unrepresentable { value: lo })?;
    let hi_index =
        usize::try_from(hi).map_err(|_| InvalidRangeError::Unrepresentable { value: hi })?;

    Ok(split(lo_index, hi_index))
}

/// Midpoint of a non-empty range, in the overflow-free form.
#[inline]
pub fn midpoint(lo: usize, hi: usize) -> usize {
    lo + (hi - lo) / 2
}

// Caller guarantees lo < hi.
fn split(lo: usize, hi: usize) -> DispatchNode {
    if hi - lo == 1 {
        return DispatchNode::leaf(lo);
    }
    let mid = midpoint(lo, hi);
    DispatchNode::branch(mid, split(lo, mid), split(mid, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_split() {
        assert_eq!(midpoint(0, 100), 50);
        assert_eq!(midpoint(0, 3), 1);
        assert_eq!(midpoint(5, 7), 6);
    }

    #[test]
    fn test_odd_range_puts_extra_leaf_high() {
        let node = partition(0, 3).expect("valid range");
        match node {
            DispatchNode::Branch { split, low, high } => {
                assert_eq!(split, 1);
                assert_eq!(low.leaf_values(), vec![0]);
                assert_eq!(high.leaf_values(), vec![1, 2]);
            }
            DispatchNode::Leaf { .. } => panic!("three values need a branch"),
        }
    }

    #[test]
    fn test_offset_range() {
        let node = partition(10, 14).expect("valid range");
        assert_eq!(node.leaf_values(), vec![10, 11, 12, 13]);
        assert_eq!(node.to_string(), "(12 (11 10 11) (13 12 13))");
    }

    #[test]
    fn test_rejects_bad_bounds() {
        assert_eq!(partition(0, 0), Err(InvalidRangeError::Empty { lo: 0, hi: 0 }));
        assert_eq!(partition(4, 2), Err(InvalidRangeError::Empty { lo: 4, hi: 2 }));
        assert_eq!(partition(-1, 2), Err(InvalidRangeError::Negative { lo: -1 }));
    }
}
