use crate::{
    error::{ParseError, parse_error::ParseResult},
    interpreter::{
        lexer::Token,
        operator::{Associativity, Operator},
    },
};

/// Entry on the pending-operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// An open parenthesis and its index in the input, for error reporting.
    Paren(usize),
    Operator(Operator),
}

/// Converts an infix token sequence to postfix (reverse-Polish) order.
///
/// This is the shunting-yard algorithm with an explicit operator stack:
///
/// - numbers and identifiers go straight to the output,
/// - `(` is pushed, `)` pops operators until the matching `(`,
/// - unary operators are pushed without popping anything,
/// - a binary operator first pops every stacked operator that binds at least
///   as tightly (strictly tighter when the incoming operator is
///   right-associative),
/// - everything left on the stack is popped at the end.
///
/// Parentheses never appear in the output.
///
/// # Errors
/// Returns `ParseError::MismatchedParentheses` for a `)` without a matching
/// `(` or a `(` that is still open at the end of input.
///
/// # Example
/// ```
/// use exprtree::interpreter::{lexer::tokenize, postfix::to_postfix};
///
/// let postfix = to_postfix(&tokenize("2 ^ 3 ^ 2").unwrap()).unwrap();
/// let words: Vec<String> = postfix.iter().map(ToString::to_string).collect();
/// assert_eq!(words, ["2", "3", "2", "^", "^"]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push(token.clone()),

            Token::LParen => stack.push(Pending::Paren(index)),

            Token::RParen => loop {
                match stack.pop() {
                    Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
                    Some(Pending::Paren(_)) => break,
                    None => return Err(ParseError::MismatchedParentheses { index }),
                }
            },

            Token::Operator(op) if op.is_unary() => stack.push(Pending::Operator(*op)),

            Token::Operator(op) => {
                while let Some(Pending::Operator(top)) = stack.last()
                      && yields_to(*op, *top)
                {
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(Pending::Operator(*op));
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::Paren(index) => return Err(ParseError::MismatchedParentheses { index }),
        }
    }

    log::debug!("converted {} infix tokens into {} postfix tokens",
                tokens.len(),
                output.len());

    Ok(output)
}

/// Returns `true` when the stacked operator `top` must be emitted before the
/// incoming operator is pushed.
///
/// # Example
/// ```
/// use exprtree::interpreter::{operator::Operator, postfix::yields_to};
///
/// // Left-associative: equal precedence pops.
/// assert!(yields_to(Operator::Sub, Operator::Add));
/// // Right-associative: equal precedence stays.
/// assert!(!yields_to(Operator::Pow, Operator::Pow));
/// // Unary operators bind tighter than any binary operator.
/// assert!(yields_to(Operator::Pow, Operator::Negate));
/// ```
#[must_use]
pub const fn yields_to(incoming: Operator, top: Operator) -> bool {
    match incoming.associativity() {
        Associativity::Left => incoming.precedence() <= top.precedence(),
        Associativity::Right => incoming.precedence() < top.precedence(),
    }
}
