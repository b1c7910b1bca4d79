/// The builder module turns postfix token sequences into expression trees.
///
/// # Responsibilities
/// - Pops operands from an explicit node stack according to operator arity.
/// - Rejects sequences with missing operands or leftover nodes.
/// - Reads prefix sequences as well, for re-parsing pre-order renderings.
pub mod builder;
/// The evaluator module reduces expression trees to numbers.
///
/// Evaluation is a recursive walk that applies the operator table to the
/// values of each node's children. It never mutates the tree.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw source text and produces the ordered token
/// sequence the converter consumes: numbers, operators, parentheses and
/// opaque identifiers. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Recognises multi-character operators by longest match.
/// - Maps the keywords `and`, `or`, `not`, `xor` and `neg` to their operators.
/// - Decides whether `-` and `+` are unary from the preceding token.
/// - Reports characters that do not start any token.
pub mod lexer;
/// Reader for the space-separated pre-order and post-order renderings.
pub mod notation;
/// The operator table.
///
/// A closed enumeration of every operator together with its arity,
/// precedence, associativity and evaluation rule. It is plain data and pure
/// functions, shared by every other stage.
pub mod operator;
/// Infix-to-postfix conversion with the shunting-yard algorithm.
///
/// # Responsibilities
/// - Orders operators by precedence and associativity using a pending stack.
/// - Removes parentheses and reports unbalanced ones.
pub mod postfix;
