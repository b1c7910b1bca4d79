//! # exprtree
//!
//! exprtree parses arithmetic and boolean expressions into expression trees
//! and evaluates them to a single `f64`.
//!
//! The pipeline has four pure stages: tokenizing, infix-to-postfix conversion
//! with the shunting-yard algorithm, tree construction from postfix, and
//! recursive evaluation. Every stage consults the same immutable operator
//! table.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::ExpressionTree,
    error::{Error, ParseError},
    interpreter::{builder::build, lexer::tokenize, postfix::to_postfix},
};

/// Defines the expression tree.
///
/// This module declares the `Node` enum and the `ExpressionTree` wrapper that
/// owns the root. The tree is built by the builder, read by the evaluator,
/// and can be rendered in in-order, pre-order and post-order form for
/// diagnostics.
///
/// # Responsibilities
/// - Defines operand, identifier, unary and binary nodes with owned children.
/// - Provides the textual traversals and a sideways structure dump.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that the pipeline can raise. Parse errors
/// cover lexing, parenthesis balance and tree structure; runtime errors cover
/// evaluation. None of them are fatal: the caller decides how to recover.
///
/// # Responsibilities
/// - Defines error enums for each phase.
/// - Implements `Display` with user-facing messages and `std::error::Error`.
pub mod error;
/// Orchestrates tokenizing, conversion, tree building and evaluation.
///
/// Each submodule is one stage of the pipeline; the crate root composes them
/// into the public entry points below.
pub mod interpreter;
/// Numeric conversion helpers shared by the operator table.
pub mod util;

/// Largest distance from the nearest integer at which a result is still
/// printed as an integer.
pub const INTEGER_TOLERANCE: f64 = 1e-10;

/// Parses an expression and builds its expression tree.
///
/// # Errors
/// Returns `Error::Parse` if the expression is empty, contains an unexpected
/// character, has unbalanced parentheses, or does not form a single tree.
///
/// # Examples
/// ```
/// use exprtree::build_expression_tree;
///
/// let tree = build_expression_tree("10 - 4 - 3").unwrap();
/// assert_eq!(tree.in_order(), "((10 - 4) - 3)");
///
/// assert!(build_expression_tree("(1 + 2").is_err());
/// ```
pub fn build_expression_tree(expression: &str) -> Result<ExpressionTree, Error> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression.into());
    }
    let postfix = to_postfix(&tokens)?;
    Ok(build(&postfix)?)
}

/// Evaluates an expression tree.
///
/// # Errors
/// Returns `Error::Runtime` on division or modulo by zero, an identifier
/// leaf, an unusable integer operand, or an empty tree.
pub fn evaluate(tree: &ExpressionTree) -> Result<f64, Error> {
    Ok(interpreter::evaluator::evaluate(tree)?)
}

/// Parses and evaluates an expression in one step.
///
/// # Errors
/// Any error from [`build_expression_tree`] or [`evaluate`].
///
/// # Examples
/// ```
/// use exprtree::evaluate_str;
///
/// assert_eq!(evaluate_str("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_str("2 ^ 3 ^ 2").unwrap(), 512.0);
/// assert_eq!(evaluate_str("-2 ^ 2").unwrap(), 4.0);
/// assert!(evaluate_str("5 / 0").is_err());
/// ```
pub fn evaluate_str(expression: &str) -> Result<f64, Error> {
    let tree = build_expression_tree(expression)?;
    evaluate(&tree)
}

/// Formats a result for display.
///
/// A value within [`INTEGER_TOLERANCE`] of the nearest integer is printed as
/// that integer; anything else is printed in fixed-point notation with six
/// fractional digits.
///
/// # Examples
/// ```
/// use exprtree::format_result;
///
/// assert_eq!(format_result(14.0), "14");
/// assert_eq!(format_result(0.1 + 0.2), "0.300000");
/// assert_eq!(format_result(2.999_999_999_999_9), "3");
/// assert_eq!(format_result(-0.0), "0");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    let nearest = value.round();
    if (value - nearest).abs() < INTEGER_TOLERANCE {
        // Adding zero turns a negative zero into a positive one.
        format!("{:.0}", nearest + 0.0)
    } else {
        format!("{value:.6}")
    }
}
