use crate::{
    ast::{ExpressionTree, Node},
    error::{ParseError, parse_error::ParseResult},
    interpreter::{
        lexer::Token,
        operator::{Arity, Operator},
    },
};

/// Deepest tree the builders produce, counting the root as level one.
///
/// Evaluation, rendering and dropping of a tree all recurse once per level,
/// so the bound keeps them within a thread's stack.
pub const MAX_DEPTH: usize = 256;

/// Builds an expression tree from a postfix token sequence.
///
/// Uses an explicit node stack: a number pushes an operand leaf, an
/// identifier pushes an identifier leaf, a unary operator pops one node and a
/// binary operator pops its right then its left operand. Exactly one node
/// must remain at the end.
///
/// # Errors
/// - `InvalidUnarySyntax` if a unary operator finds the stack empty.
/// - `InvalidBinarySyntax` if a binary operator finds fewer than two nodes.
/// - `InvalidExpression` if the final node count is not one.
/// - `NestingTooDeep` if the tree would be deeper than [`MAX_DEPTH`].
/// - `UnexpectedToken` if the sequence contains a parenthesis.
///
/// # Example
/// ```
/// use exprtree::{
///     ast::Node,
///     interpreter::{builder::build, lexer::Token, operator::Operator},
/// };
///
/// let postfix = [Token::number(10.0),
///                Token::number(4.0),
///                Token::Operator(Operator::Sub)];
/// let tree = build(&postfix).unwrap();
/// assert_eq!(tree.root(),
///            Some(&Node::binary(Operator::Sub, Node::Operand(10.0), Node::Operand(4.0))));
/// ```
pub fn build(postfix: &[Token]) -> ParseResult<ExpressionTree> {
    let mut stack: Vec<(Node, usize)> = Vec::new();

    for token in postfix {
        let entry = match token {
            Token::Operator(op) => match op.arity() {
                Arity::Unary => {
                    let (operand, depth) =
                        stack.pop()
                             .ok_or(ParseError::InvalidUnarySyntax { operator: op.symbol() })?;
                    (Node::unary(*op, operand), checked_depth(depth)?)
                },
                Arity::Binary => {
                    let ((left, left_depth), (right, right_depth)) = pop_pair(&mut stack, *op)?;
                    (Node::binary(*op, left, right), checked_depth(left_depth.max(right_depth))?)
                },
            },
            leaf => (leaf_node(leaf)?, 1),
        };
        stack.push(entry);
    }

    finish(stack)
}

/// Builds an expression tree from a prefix (pre-order) token sequence.
///
/// The sequence is scanned right to left with the same node stack as
/// [`build`]; a binary operator therefore finds its left operand on top.
///
/// # Errors
/// Same conditions as [`build`].
///
/// # Example
/// ```
/// use exprtree::interpreter::{builder::build_prefix, notation::read_words};
///
/// let tree = build_prefix(&read_words("- 10 neg 4").unwrap()).unwrap();
/// assert_eq!(tree.in_order(), "(10 - (-4))");
/// ```
pub fn build_prefix(prefix: &[Token]) -> ParseResult<ExpressionTree> {
    let mut stack: Vec<(Node, usize)> = Vec::new();

    for token in prefix.iter().rev() {
        let entry = match token {
            Token::Operator(op) => match op.arity() {
                Arity::Unary => {
                    let (operand, depth) =
                        stack.pop()
                             .ok_or(ParseError::InvalidUnarySyntax { operator: op.symbol() })?;
                    (Node::unary(*op, operand), checked_depth(depth)?)
                },
                Arity::Binary => {
                    let ((right, right_depth), (left, left_depth)) = pop_pair(&mut stack, *op)?;
                    (Node::binary(*op, left, right), checked_depth(left_depth.max(right_depth))?)
                },
            },
            leaf => (leaf_node(leaf)?, 1),
        };
        stack.push(entry);
    }

    finish(stack)
}

/// Pops two nodes, returning them in the order they were pushed.
fn pop_pair(stack: &mut Vec<(Node, usize)>,
            op: Operator)
            -> ParseResult<((Node, usize), (Node, usize))> {
    let second = stack.pop();
    let first = stack.pop();
    first.zip(second)
         .ok_or(ParseError::InvalidBinarySyntax { operator: op.symbol() })
}

/// Depth of a new operator node whose deepest child has depth `child`.
fn checked_depth(child: usize) -> ParseResult<usize> {
    if child >= MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_DEPTH });
    }
    Ok(child + 1)
}

fn leaf_node(token: &Token) -> ParseResult<Node> {
    match token {
        Token::Number(value) => Ok(Node::Operand(value.into_inner())),
        Token::Identifier(name) => Ok(Node::Identifier(name.clone())),
        other => Err(ParseError::UnexpectedToken { token: other.to_string() }),
    }
}

fn finish(mut stack: Vec<(Node, usize)>) -> ParseResult<ExpressionTree> {
    if stack.len() != 1 {
        return Err(ParseError::InvalidExpression { remaining: stack.len() });
    }
    let (root, depth) = stack.pop()
                             .ok_or(ParseError::InvalidExpression { remaining: 0 })?;

    log::trace!("built expression tree of depth {depth}: {root:?}");

    Ok(ExpressionTree::new(root))
}
