use logos::Logos;
use ordered_float::OrderedFloat;

use crate::{
    error::{ParseError, parse_error::ParseResult},
    interpreter::operator::Operator,
};

/// Raw lexical unit recognised by the scanner.
///
/// A lexeme knows nothing about context; whether a `-` is subtraction or
/// negation is decided afterwards by [`tokenize`]. Multi-character operators
/// are declared as their own tokens so the scanner prefers them over their
/// single-character prefixes (`<=` over `<`, `&&` over `&`).
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Lexeme {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `7.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(OrderedFloat<f64>),
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `xor`
    #[token("xor")]
    Xor,
    /// `neg`, the spelling of unary minus in pre-order and post-order text.
    #[token("neg")]
    Neg,
    /// Any other word; passed through as an opaque identifier.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `~`
    #[token("~")]
    Tilde,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current token slice.
///
/// The result may be infinite when the literal has too many digits;
/// [`tokenize`] rejects those.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<OrderedFloat<f64>> {
    lex.slice().parse::<f64>().ok().map(OrderedFloat)
}

/// A token of the expression language after unary disambiguation.
///
/// Tokens appear in source order. Operators carry their resolved
/// [`Operator`], so a unary minus is already distinct from subtraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A numeric literal.
    Number(OrderedFloat<f64>),
    /// An operator with its arity already decided.
    Operator(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// A word that is not a keyword; reserved for variable support.
    Identifier(String),
}

impl Token {
    /// Creates a numeric token.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    /// Returns `true` when a `-`, `+`, `~` or `!` following this token must be
    /// read as a unary operator: after `(` or after any operator.
    const fn opens_operand(&self) -> bool {
        matches!(self, Self::LParen | Self::Operator(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Identifier(name) => write!(f, "{name}"),
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

/// Splits an expression into tokens.
///
/// Whitespace is skipped. A `-` or `+` at the start of the input, right after
/// `(`, or right after another operator is unary: unary `+` is dropped and
/// unary `-` becomes [`Operator::Negate`]. `~`, `!`, `not` and `neg` only
/// exist as unary operators. `and` and `or` are synonyms of `&&` and `||`.
///
/// # Errors
/// - `UnexpectedCharacter` for any character that does not start a token.
/// - `InvalidNumber` for a literal too large to be a finite `f64`.
///
/// # Example
/// ```
/// use exprtree::interpreter::{
///     lexer::{Token, tokenize},
///     operator::Operator,
/// };
///
/// let tokens = tokenize("-3 - +2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Operator(Operator::Negate),
///                 Token::number(3.0),
///                 Token::Operator(Operator::Sub),
///                 Token::number(2.0)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let Ok(lexeme) = lexeme else {
            return Err(ParseError::UnexpectedCharacter { found:  lexer.slice().to_string(),
                                                         offset: lexer.span().start, });
        };

        let unary_position = tokens.last().is_none_or(Token::opens_operand);

        let token: Token = match lexeme {
            Lexeme::Number(n) if n.into_inner().is_finite() => Token::Number(n),
            Lexeme::Number(_) => {
                return Err(ParseError::InvalidNumber { literal: lexer.slice().to_string() });
            },
            Lexeme::Word(name) => Token::Identifier(name),
            Lexeme::LParen => Token::LParen,
            Lexeme::RParen => Token::RParen,

            Lexeme::Plus if unary_position => continue,
            Lexeme::Minus if unary_position => Operator::Negate.into(),
            Lexeme::Neg => Operator::Negate.into(),
            Lexeme::Tilde => Operator::BitNot.into(),
            Lexeme::Bang | Lexeme::Not => Operator::Not.into(),

            Lexeme::Plus => Operator::Add.into(),
            Lexeme::Minus => Operator::Sub.into(),
            Lexeme::Star => Operator::Mul.into(),
            Lexeme::Slash => Operator::Div.into(),
            Lexeme::Percent => Operator::Mod.into(),
            Lexeme::Caret => Operator::Pow.into(),
            Lexeme::EqualEqual => Operator::Equal.into(),
            Lexeme::BangEqual => Operator::NotEqual.into(),
            Lexeme::LessEqual => Operator::LessEqual.into(),
            Lexeme::GreaterEqual => Operator::GreaterEqual.into(),
            Lexeme::Less => Operator::Less.into(),
            Lexeme::Greater => Operator::Greater.into(),
            Lexeme::ShiftLeft => Operator::Shl.into(),
            Lexeme::ShiftRight => Operator::Shr.into(),
            Lexeme::Ampersand => Operator::BitAnd.into(),
            Lexeme::Pipe => Operator::BitOr.into(),
            Lexeme::Xor => Operator::Xor.into(),
            Lexeme::DoubleAmpersand | Lexeme::And => Operator::And.into(),
            Lexeme::DoublePipe | Lexeme::Or => Operator::Or.into(),
        };
        tokens.push(token);
    }

    log::debug!("tokenized {source:?} into {} tokens", tokens.len());
    log::trace!("tokens: {tokens:?}");

    Ok(tokens)
}
