use integral_switch::emit::{indent_lines, Emitter};
use integral_switch::tree::ceil_log2;
use integral_switch::{partition, render, DispatchNode};
use proptest::prelude::*;

fn assert_balanced(node: &DispatchNode) -> Result<(), TestCaseError> {
    if let DispatchNode::Branch { low, high, .. } = node {
        let (l, h) = (low.leaf_count(), high.leaf_count());
        prop_assert!(l.abs_diff(h) <= 1, "unbalanced split {} vs {}", l, h);
        assert_balanced(low)?;
        assert_balanced(high)?;
    }
    Ok(())
}

proptest! {
    #[test]
    fn leaves_cover_range_exactly_once(n in 1i64..600) {
        let tree = partition(0, n).expect("positive range");
        let expected: Vec<usize> = (0..n as usize).collect();
        prop_assert_eq!(tree.leaf_values(), expected);
    }

    #[test]
    fn depth_is_ceil_log2(n in 1i64..600) {
        let tree = partition(0, n).expect("positive range");
        prop_assert_eq!(tree.depth(), ceil_log2(n as usize));
        prop_assert_eq!(tree.branch_count(), n as usize - 1);
    }

    #[test]
    fn every_split_is_balanced(lo in 0i64..1000, len in 1i64..300) {
        let tree = partition(lo, lo + len).expect("positive range");
        assert_balanced(&tree)?;
        let expected: Vec<usize> = (lo as usize..(lo + len) as usize).collect();
        prop_assert_eq!(tree.leaf_values(), expected);
    }

    #[test]
    fn partition_is_deterministic(lo in 0i64..100, len in 1i64..200) {
        let first = partition(lo, lo + len).expect("positive range");
        let second = partition(lo, lo + len).expect("positive range");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_or_negative_ranges_are_rejected(lo in -50i64..50, hi in -50i64..50) {
        prop_assume!(lo < 0 || hi <= lo);
        prop_assert!(partition(lo, hi).is_err());
    }

    #[test]
    fn render_composes_children(n in 2i64..200) {
        let tree = partition(0, n).expect("positive range");
        let emitter = Emitter::new("index");
        match &tree {
            DispatchNode::Branch { split, low, high } => {
                let expected = format!(
                    "if index < {} {{\n{}\n}} else {{\n{}\n}}",
                    split,
                    indent_lines(&emitter.render(low).expect("low renders"), 1),
                    indent_lines(&emitter.render(high).expect("high renders"), 1),
                );
                prop_assert_eq!(emitter.render(&tree).expect("tree renders"), expected);
            }
            DispatchNode::Leaf { .. } => prop_assert!(false, "n >= 2 must branch"),
        }
    }

    #[test]
    fn render_is_repeatable(n in 1i64..200) {
        let tree = partition(0, n).expect("positive range");
        let first = render(&tree, "tag").expect("renders");
        let second = render(&tree, "tag").expect("renders");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_constant_is_a_literal_leaf(n in 1i64..200) {
        let tree = partition(0, n).expect("positive range");
        let text = render(&tree, "index").expect("renders");
        for value in 0..n {
            let call = format!("visitor.visit::<{}>()", value);
            prop_assert_eq!(text.matches(&call).count(), 1, "{}", call);
        }
    }
}
