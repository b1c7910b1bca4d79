use crate::{
    ast::{ExpressionTree, Node},
    error::{RuntimeError, runtime_error::EvalResult},
};

/// Reduces an expression tree to a single number.
///
/// Evaluation is pure: the tree is only read, so it can be evaluated again
/// with the same result.
///
/// # Errors
/// - `EmptyTree` if the tree has no root.
/// - Any error raised by [`eval_node`].
///
/// # Example
/// ```
/// use exprtree::{build_expression_tree, interpreter::evaluator::evaluate};
///
/// let tree = build_expression_tree("(2 + 3) * 4").unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 20.0);
/// ```
pub fn evaluate(tree: &ExpressionTree) -> EvalResult<f64> {
    let root = tree.root().ok_or(RuntimeError::EmptyTree)?;
    let value = eval_node(root)?;

    log::debug!("evaluated {tree} to {value}");

    Ok(value)
}

/// Recursively evaluates a single node.
///
/// Operands return their value. Unary nodes evaluate their operand, binary
/// nodes evaluate left then right, and both then apply their operator.
///
/// # Errors
/// - `UnboundIdentifier` for identifier leaves.
/// - `UnknownUnaryOperator` / `UnknownBinaryOperator` when a node holds an
///   operator of the wrong arity.
/// - Division or modulo by zero and integer conversion errors from the
///   operator table.
pub fn eval_node(node: &Node) -> EvalResult<f64> {
    match node {
        Node::Operand(value) => Ok(*value),
        Node::Identifier(name) => Err(RuntimeError::UnboundIdentifier { name: name.clone() }),
        Node::Unary { op, operand } => {
            let value = eval_node(operand)?;
            op.apply_unary(value)
        },
        Node::Binary { op, left, right } => {
            let left = eval_node(left)?;
            let right = eval_node(right)?;
            op.apply_binary(left, right)
        },
    }
}
