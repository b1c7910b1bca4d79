use crate::{
    error::{RuntimeError, runtime_error::EvalResult},
    util::num::{bool_to_f64, f64_to_i64_truncated, i64_to_f64, shift_amount},
};

/// Number of operands an operator consumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Arity {
    /// One operand, written before it (`-x`, `~x`, `not x`).
    Unary,
    /// Two operands, written between them (`a + b`).
    Binary,
}

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Static description of an operator.
///
/// Produced by [`Operator::descriptor`]; the evaluation rule itself lives in
/// [`Operator::apply_unary`] and [`Operator::apply_binary`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OperatorDescriptor {
    /// Canonical infix spelling.
    pub symbol:        &'static str,
    /// Unary or binary.
    pub arity:         Arity,
    /// Precedence rank; higher binds tighter.
    pub precedence:    u8,
    /// Grouping for equal precedence.
    pub associativity: Associativity,
}

/// Every operator the tokenizer can produce.
///
/// The set is closed: a symbol that is not listed here never becomes an
/// operator token. Unary minus is a variant of its own so that it can carry
/// unary arity and the highest precedence, distinct from subtraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Unary minus (`-x`).
    Negate,
    /// Bitwise complement (`~x`).
    BitNot,
    /// Logical not (`!x`, `not x`).
    Not,
    /// Exponentiation (`^`)
    Pow,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating remainder (`%`)
    Mod,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Left shift (`<<`)
    Shl,
    /// Arithmetic right shift (`>>`)
    Shr,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`xor`)
    Xor,
    /// Logical and (`&&`, `and`)
    And,
    /// Logical or (`||`, `or`)
    Or,
}

impl Operator {
    /// All operators, unary first, then binary from tightest to loosest.
    pub const ALL: [Self; 22] = [Self::Negate,
                                 Self::BitNot,
                                 Self::Not,
                                 Self::Pow,
                                 Self::Mul,
                                 Self::Div,
                                 Self::Mod,
                                 Self::Add,
                                 Self::Sub,
                                 Self::Shl,
                                 Self::Shr,
                                 Self::Less,
                                 Self::Greater,
                                 Self::LessEqual,
                                 Self::GreaterEqual,
                                 Self::Equal,
                                 Self::NotEqual,
                                 Self::BitAnd,
                                 Self::BitOr,
                                 Self::Xor,
                                 Self::And,
                                 Self::Or];

    /// Returns the full static description of the operator.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::operator::{Arity, Associativity, Operator};
    ///
    /// let pow = Operator::Pow.descriptor();
    /// assert_eq!(pow.symbol, "^");
    /// assert_eq!(pow.arity, Arity::Binary);
    /// assert_eq!(pow.precedence, 7);
    /// assert_eq!(pow.associativity, Associativity::Right);
    /// ```
    #[must_use]
    pub const fn descriptor(self) -> OperatorDescriptor {
        OperatorDescriptor { symbol:        self.symbol(),
                             arity:         self.arity(),
                             precedence:    self.precedence(),
                             associativity: self.associativity(), }
    }

    /// Canonical infix spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate | Self::Sub => "-",
            Self::BitNot => "~",
            Self::Not => "not",
            Self::Pow => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::Xor => "xor",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Spelling used in pre-order and post-order renderings.
    ///
    /// Identical to [`Operator::symbol`] except for unary minus, which is
    /// written `neg` because operator position alone cannot tell it apart
    /// from subtraction in those notations.
    #[must_use]
    pub const fn notation_symbol(self) -> &'static str {
        match self {
            Self::Negate => "neg",
            _ => self.symbol(),
        }
    }

    /// Looks up an operator by one of its spellings.
    ///
    /// Accepts the canonical symbols plus the keyword synonyms `and`, `or`,
    /// `!` and the notation spelling `neg`. A bare `-` is always subtraction;
    /// deciding whether a `-` in infix text is unary is the tokenizer's job.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("and"), Some(Operator::And));
    /// assert_eq!(Operator::from_symbol("neg"), Some(Operator::Negate));
    /// assert_eq!(Operator::from_symbol("-"), Some(Operator::Sub));
    /// assert_eq!(Operator::from_symbol("max"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "neg" => Some(Self::Negate),
            "!" | "not" => Some(Self::Not),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => Self::ALL.into_iter()
                          .find(|op| op.arity() == Arity::Binary && op.symbol() == symbol)
                          .or_else(|| (symbol == "~").then_some(Self::BitNot)),
        }
    }

    /// Returns whether the operator takes one or two operands.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Negate | Self::BitNot | Self::Not => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// Returns `true` for `Negate`, `BitNot` and `Not`.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self.arity(), Arity::Unary)
    }

    /// Precedence rank; higher binds tighter.
    ///
    /// Unary operators rank above `^`, so `-2^2` is `(-2)^2`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Negate | Self::BitNot | Self::Not => 8,
            Self::Pow => 7,
            Self::Mul | Self::Div | Self::Mod => 6,
            Self::Add | Self::Sub => 5,
            Self::Shl | Self::Shr => 4,
            Self::Less | Self::Greater | Self::LessEqual | Self::GreaterEqual => 3,
            Self::Equal | Self::NotEqual => 2,
            Self::BitAnd | Self::BitOr | Self::Xor | Self::And | Self::Or => 1,
        }
    }

    /// Power and every unary operator are right-associative; everything else
    /// groups left to right.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow | Self::Negate | Self::BitNot | Self::Not => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Applies a unary operator to its evaluated operand.
    ///
    /// # Errors
    /// - `UnknownUnaryOperator` if `self` has no unary form.
    /// - `IntegerOutOfRange` if `~` receives a value that is not a finite
    ///   `i64` after truncation.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Negate.apply_unary(3.0).unwrap(), -3.0);
    /// assert_eq!(Operator::BitNot.apply_unary(5.0).unwrap(), -6.0);
    /// assert_eq!(Operator::Not.apply_unary(0.0).unwrap(), 1.0);
    /// assert!(Operator::Add.apply_unary(1.0).is_err());
    /// ```
    pub fn apply_unary(self, operand: f64) -> EvalResult<f64> {
        match self {
            Self::Negate => Ok(-operand),
            Self::BitNot => Ok(i64_to_f64(!f64_to_i64_truncated(operand)?)),
            Self::Not => Ok(bool_to_f64(operand == 0.0)),
            _ => Err(RuntimeError::UnknownUnaryOperator { operator: self.symbol() }),
        }
    }

    /// Applies a binary operator to its evaluated operands.
    ///
    /// Comparison and logical operators yield exactly `1.0` or `0.0`; any
    /// non-zero operand counts as true. Bitwise and shift operators truncate
    /// both operands toward zero before operating.
    ///
    /// # Errors
    /// - `DivisionByZero` / `ModuloByZero` when the right operand of `/` or
    ///   `%` is exactly zero.
    /// - `IntegerOutOfRange` / `InvalidShift` for unusable integer operands.
    /// - `UnknownBinaryOperator` if `self` has no binary form.
    ///
    /// # Example
    /// ```
    /// use exprtree::{error::RuntimeError, interpreter::operator::Operator};
    ///
    /// assert_eq!(Operator::Pow.apply_binary(2.0, 10.0).unwrap(), 1024.0);
    /// assert_eq!(Operator::Less.apply_binary(3.0, 5.0).unwrap(), 1.0);
    /// assert_eq!(Operator::Xor.apply_binary(6.0, 3.0).unwrap(), 5.0);
    /// assert_eq!(Operator::Div.apply_binary(1.0, 0.0).unwrap_err(),
    ///            RuntimeError::DivisionByZero);
    /// ```
    pub fn apply_binary(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
            Self::Mod => {
                if right == 0.0 {
                    return Err(RuntimeError::ModuloByZero);
                }
                Ok(left % right)
            },
            Self::Pow => Ok(left.powf(right)),

            #[allow(clippy::float_cmp)]
            Self::Equal => Ok(bool_to_f64(left == right)),
            #[allow(clippy::float_cmp)]
            Self::NotEqual => Ok(bool_to_f64(left != right)),
            Self::Less => Ok(bool_to_f64(left < right)),
            Self::Greater => Ok(bool_to_f64(left > right)),
            Self::LessEqual => Ok(bool_to_f64(left <= right)),
            Self::GreaterEqual => Ok(bool_to_f64(left >= right)),

            Self::And => Ok(bool_to_f64(left != 0.0 && right != 0.0)),
            Self::Or => Ok(bool_to_f64(left != 0.0 || right != 0.0)),

            Self::BitAnd | Self::BitOr | Self::Xor | Self::Shl | Self::Shr => {
                Self::apply_integer(self, f64_to_i64_truncated(left)?, f64_to_i64_truncated(right)?)
            },

            Self::Negate | Self::BitNot | Self::Not => {
                Err(RuntimeError::UnknownBinaryOperator { operator: self.symbol() })
            },
        }
    }

    /// Bitwise and shift operators on already truncated operands.
    fn apply_integer(self, left: i64, right: i64) -> EvalResult<f64> {
        let result = match self {
            Self::BitAnd => left & right,
            Self::BitOr => left | right,
            Self::Xor => left ^ right,
            Self::Shl => left.wrapping_shl(shift_amount(right)?),
            Self::Shr => left.wrapping_shr(shift_amount(right)?),
            _ => return Err(RuntimeError::UnknownBinaryOperator { operator: self.symbol() }),
        };
        Ok(i64_to_f64(result))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
