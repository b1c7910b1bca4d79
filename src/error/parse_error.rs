#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing, postfix conversion
/// or tree construction.
pub enum ParseError {
    /// A character that does not start any token.
    UnexpectedCharacter {
        /// The offending source text.
        found:  String,
        /// Byte offset of the character in the expression.
        offset: usize,
    },
    /// A token appeared where the current stage cannot use it.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// A numeric literal that does not parse to a finite `f64`.
    InvalidNumber {
        /// The literal as written.
        literal: String,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    MismatchedParentheses {
        /// Position of the offending parenthesis in the token sequence.
        index: usize,
    },
    /// A unary operator found no operand to apply to.
    InvalidUnarySyntax {
        /// The operator symbol.
        operator: &'static str,
    },
    /// A binary operator found fewer than two operands.
    InvalidBinarySyntax {
        /// The operator symbol.
        operator: &'static str,
    },
    /// The expression nests operators deeper than the builder accepts.
    NestingTooDeep {
        /// The maximum tree depth.
        limit: usize,
    },
    /// Tree construction finished with a node count other than one.
    InvalidExpression {
        /// How many nodes were left on the stack.
        remaining: usize,
    },
    /// The input contained no tokens at all.
    EmptyExpression,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, offset } => {
                write!(f, "Error: Unexpected character '{found}' at offset {offset}.")
            },
            Self::UnexpectedToken { token } => write!(f, "Error: Unexpected token: {token}."),
            Self::InvalidNumber { literal } => write!(f, "Error: Invalid number '{literal}'."),
            Self::MismatchedParentheses { .. } => write!(f, "Error: Mismatched parentheses."),
            Self::InvalidUnarySyntax { operator } => write!(f,
                                                            "Error: Invalid expression syntax for unary operator '{operator}'."),
            Self::InvalidBinarySyntax { operator } => write!(f,
                                                             "Error: Invalid expression syntax for binary operator '{operator}'."),
            Self::NestingTooDeep { limit } => {
                write!(f, "Error: Expression nests deeper than {limit} levels.")
            },
            Self::InvalidExpression { .. } => write!(f, "Error: Invalid expression."),
            Self::EmptyExpression => write!(f, "Error: Empty expression."),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type used by every parsing stage.
pub type ParseResult<T> = Result<T, ParseError>;
