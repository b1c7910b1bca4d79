/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression,
/// converting it to postfix form, or building the expression tree. These are
/// detected before any value is computed.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an expression
/// tree, such as division by zero or evaluating an unbound identifier.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// Any failure surfaced by the parsing and evaluation pipeline.
///
/// The public entry points in the crate root return this type so that a
/// caller can handle both phases through one `Result`.
pub enum Error {
    /// The expression could not be turned into a tree.
    Parse(ParseError),
    /// The tree could not be reduced to a number.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
