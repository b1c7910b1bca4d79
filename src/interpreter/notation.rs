use ordered_float::OrderedFloat;

use crate::{
    error::{ParseError, parse_error::ParseResult},
    interpreter::{lexer::Token, operator::Operator},
};

/// Reads a space-separated word sequence, the format produced by
/// [`crate::ast::ExpressionTree::pre_order`] and
/// [`crate::ast::ExpressionTree::post_order`].
///
/// Each word is taken whole, with no unary disambiguation: `neg` is unary
/// minus and `-` is always subtraction. Words that start like a number must
/// parse as a finite one; a word that is neither a number, an operator nor a
/// parenthesis becomes an identifier. `neg` is reserved in infix text too, so
/// no identifier can be mistaken for it here.
///
/// # Errors
/// Returns `ParseError::InvalidNumber` for a word that starts with a digit, a
/// point or a minus sign but is not a finite `f64`.
///
/// # Example
/// ```
/// use exprtree::interpreter::{builder::build, notation::read_words};
///
/// let tree = build(&read_words("1 2 + neg 3 *").unwrap()).unwrap();
/// assert_eq!(tree.in_order(), "((-(1 + 2)) * 3)");
/// ```
pub fn read_words(text: &str) -> ParseResult<Vec<Token>> {
    text.split_whitespace().map(read_word).collect()
}

fn read_word(word: &str) -> ParseResult<Token> {
    match word {
        "(" => return Ok(Token::LParen),
        ")" => return Ok(Token::RParen),
        _ => {},
    }

    if let Some(op) = Operator::from_symbol(word) {
        return Ok(Token::Operator(op));
    }

    if word.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == '-') {
        return word.parse::<f64>()
                   .ok()
                   .filter(|value| value.is_finite())
                   .map(|value| Token::Number(OrderedFloat(value)))
                   .ok_or_else(|| ParseError::InvalidNumber { literal: word.to_string() });
    }

    Ok(Token::Identifier(word.to_string()))
}
