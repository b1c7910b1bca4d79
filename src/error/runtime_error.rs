#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum RuntimeError {
    /// Attempted division by exactly zero.
    DivisionByZero,
    /// Attempted modulo by exactly zero.
    ModuloByZero,
    /// A unary node carried an operator that has no unary form.
    UnknownUnaryOperator {
        /// The operator symbol.
        operator: &'static str,
    },
    /// A binary node carried an operator that has no binary form.
    UnknownBinaryOperator {
        /// The operator symbol.
        operator: &'static str,
    },
    /// An identifier was evaluated; no bindings exist.
    UnboundIdentifier {
        /// The identifier as written.
        name: String,
    },
    /// The tree has no root node.
    EmptyTree,
    /// A bitwise operand cannot be truncated to a 64-bit integer.
    IntegerOutOfRange {
        /// The operand that failed to convert.
        value: f64,
    },
    /// A shift amount outside `0..64`.
    InvalidShift {
        /// The requested shift.
        amount: i64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::ModuloByZero => write!(f, "Error: Modulo by zero."),
            Self::UnknownUnaryOperator { operator } => {
                write!(f, "Error: Unknown unary operator '{operator}'.")
            },
            Self::UnknownBinaryOperator { operator } => {
                write!(f, "Error: Unknown binary operator '{operator}'.")
            },
            Self::UnboundIdentifier { name } => write!(f,
                                                       "Error: Identifier '{name}' has no value. Variables are not supported."),
            Self::EmptyTree => write!(f, "Error: Null node encountered during evaluation."),
            Self::IntegerOutOfRange { value } => write!(f,
                                                        "Error: {value} cannot be used as an integer operand."),
            Self::InvalidShift { amount } => {
                write!(f, "Error: Shift amount {amount} is outside 0..64.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Result type used by the evaluator and the operator table.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;
