use exprtree::{
    ast::{ExpressionTree, Node},
    build_expression_tree, evaluate,
    interpreter::{
        builder::{MAX_DEPTH, build, build_prefix},
        notation::read_words,
        operator::Operator,
    },
};
use pretty_assertions::assert_eq;

const ROUND_TRIP_EXPRESSIONS: &[&str] = &["42",
                                          "2+3*4",
                                          "(2+3)*4",
                                          "2^3^2",
                                          "-2^2",
                                          "2^-2",
                                          "10-4-3",
                                          "-(1 + 2) * 3 - ~4",
                                          "not 0 and 3 < 5 or 0",
                                          "6 xor 3 | 8 & 12",
                                          "1 << 3 >> 1 != 4",
                                          "0.1 + 0.2 * .5 / 7.",
                                          "--3 - -(-2)",
                                          "17 % 5 >= 2 == 1",
                                          "rate * -negative + inf"];

fn tree(src: &str) -> ExpressionTree {
    build_expression_tree(src).unwrap_or_else(|e| panic!("{src:?} failed to parse: {e}"))
}

#[test]
fn in_order_parenthesizes_every_operator() {
    assert_eq!(tree("2+3*4").in_order(), "(2 + (3 * 4))");
    assert_eq!(tree("-2^2").in_order(), "((-2) ^ 2)");
    assert_eq!(tree("not 1 && ~2").in_order(), "((not 1) && (~2))");
    assert_eq!(tree("1 or 0").in_order(), "(1 || 0)");
    assert_eq!(tree("3.5").in_order(), "3.5");
}

#[test]
fn pre_and_post_order_renderings() {
    let t = tree("(1 + 2) * -3");
    assert_eq!(t.pre_order(), "* + 1 2 neg 3");
    assert_eq!(t.post_order(), "1 2 + 3 neg *");

    let t = tree("2^3^2");
    assert_eq!(t.pre_order(), "^ 2 ^ 3 2");
    assert_eq!(t.post_order(), "2 3 2 ^ ^");
}

#[test]
fn sideways_rendering_puts_right_subtree_first() {
    let expected = "        4\n    *\n        3\n+\n    2\n";
    assert_eq!(tree("2+3*4").render_sideways(), expected);

    let expected = "    5\nneg\n";
    assert_eq!(tree("-5").render_sideways(), expected);
}

#[test]
fn unary_minus_is_applied_before_power() {
    let expected = Node::binary(Operator::Pow,
                                Node::unary(Operator::Negate, Node::Operand(2.0)),
                                Node::Operand(2.0));
    assert_eq!(tree("-2^2").root(), Some(&expected));
}

#[test]
fn unary_node_keeps_its_operand_on_the_right() {
    let t = tree("~7");
    let root = t.root().unwrap();
    assert!(root.left().is_none());
    assert_eq!(root.right(), Some(&Node::Operand(7.0)));
    assert!(root.right().unwrap().is_leaf());
}

#[test]
fn in_order_rendering_reparses_to_the_same_tree() {
    for src in ROUND_TRIP_EXPRESSIONS {
        let parsed = tree(src);
        let reparsed = tree(&parsed.in_order());
        assert_eq!(reparsed, parsed, "in-order of {src:?}");
        assert_eq!(evaluate(&reparsed), evaluate(&parsed), "in-order of {src:?}");
    }
}

#[test]
fn post_order_rendering_rebuilds_the_same_tree() {
    for src in ROUND_TRIP_EXPRESSIONS {
        let parsed = tree(src);
        let rebuilt = build(&read_words(&parsed.post_order()).unwrap()).unwrap();
        assert_eq!(rebuilt, parsed, "post-order of {src:?}");
        assert_eq!(evaluate(&rebuilt), evaluate(&parsed), "post-order of {src:?}");
    }
}

#[test]
fn pre_order_rendering_rebuilds_the_same_tree() {
    for src in ROUND_TRIP_EXPRESSIONS {
        let parsed = tree(src);
        let rebuilt = build_prefix(&read_words(&parsed.pre_order()).unwrap()).unwrap();
        assert_eq!(rebuilt, parsed, "pre-order of {src:?}");
        assert_eq!(evaluate(&rebuilt), evaluate(&parsed), "pre-order of {src:?}");
    }
}

#[test]
fn trees_at_the_depth_limit_round_trip() {
    let parsed = tree(&format!("{}7", "-".repeat(MAX_DEPTH - 1)));
    assert_eq!(tree(&parsed.in_order()), parsed);
    assert_eq!(build(&read_words(&parsed.post_order()).unwrap()).unwrap(), parsed);
    assert_eq!(build_prefix(&read_words(&parsed.pre_order()).unwrap()).unwrap(), parsed);
}

#[test]
fn empty_tree_renders_nothing() {
    let t = ExpressionTree::empty();
    assert!(t.is_empty());
    assert_eq!(t.in_order(), "");
    assert_eq!(t.pre_order(), "");
    assert_eq!(t.post_order(), "");
    assert_eq!(t.render_sideways(), "");
}

#[test]
fn display_uses_in_order_form() {
    assert_eq!(tree("1 - 2 - 3").to_string(), "((1 - 2) - 3)");
}
