#[path = "common/mod.rs"]
mod common;

use common::occurrences;
use integral_switch::{
    partition, render, DispatchNode, Generator, GeneratorConfig, InvalidRangeError, Stage,
};
use test_case::test_case;

#[test_case(1, 0, 0, 1 ; "single leaf")]
#[test_case(2, 1, 1, 2 ; "one split")]
#[test_case(4, 2, 3, 4 ; "two levels")]
#[test_case(5, 3, 4, 5 ; "odd height")]
#[test_case(32, 5, 31, 32 ; "canonical height")]
fn tree_shape(n: i64, depth: usize, conditionals: usize, leaves: usize) {
    let tree = partition(0, n).expect("positive range");
    assert_eq!(tree.depth(), depth);

    let text = render(&tree, "index").expect("renders");
    assert_eq!(occurrences(&text, "if index < "), conditionals);
    assert_eq!(occurrences(&text, "visitor.visit::<"), leaves);
}

#[test]
fn n1_is_single_leaf() {
    let tree = partition(0, 1).expect("positive range");
    assert_eq!(tree, DispatchNode::leaf(0));
    assert_eq!(render(&tree, "index").expect("renders"), "visitor.visit::<0>()");
}

#[test]
fn n2_compares_against_one() {
    let tree = partition(0, 2).expect("positive range");
    assert_eq!(
        tree,
        DispatchNode::branch(1, DispatchNode::leaf(0), DispatchNode::leaf(1))
    );
    let text = render(&tree, "index").expect("renders");
    assert_eq!(occurrences(&text, "if index < 1 {"), 1);
}

#[test]
fn n4_splits_at_two_then_one_and_three() {
    let tree = partition(0, 4).expect("positive range");
    let expected = DispatchNode::branch(
        2,
        DispatchNode::branch(1, DispatchNode::leaf(0), DispatchNode::leaf(1)),
        DispatchNode::branch(3, DispatchNode::leaf(2), DispatchNode::leaf(3)),
    );
    assert_eq!(tree, expected);
}

#[test_case(0, InvalidRangeError::Empty { lo: 0, hi: 0 } ; "zero")]
#[test_case(-1, InvalidRangeError::Empty { lo: 0, hi: -1 } ; "negative")]
fn invalid_heights_produce_no_output(n: i64, expected: InvalidRangeError) {
    assert_eq!(partition(0, n), Err(expected));

    let err = Generator::new(GeneratorConfig::new(n))
        .render_raw()
        .expect_err("no partial output");
    assert_eq!(err.stage(), Stage::Partition);
}

#[test]
fn negative_offset_is_rejected() {
    assert_eq!(
        partition(-4, 4),
        Err(InvalidRangeError::Negative { lo: -4 })
    );
}
