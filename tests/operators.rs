use exprtree::{
    ast::{ExpressionTree, Node},
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        builder::{MAX_DEPTH, build, build_prefix},
        lexer::{Token, tokenize},
        notation::read_words,
        operator::{Arity, Associativity, Operator},
        postfix::to_postfix,
    },
};

fn op(operator: Operator) -> Token {
    Token::Operator(operator)
}

#[test]
fn precedence_table_is_fixed() {
    use Operator::*;

    let ranks = [(Negate, 8),
                 (BitNot, 8),
                 (Not, 8),
                 (Pow, 7),
                 (Mul, 6),
                 (Div, 6),
                 (Mod, 6),
                 (Add, 5),
                 (Sub, 5),
                 (Shl, 4),
                 (Shr, 4),
                 (Less, 3),
                 (Greater, 3),
                 (LessEqual, 3),
                 (GreaterEqual, 3),
                 (Equal, 2),
                 (NotEqual, 2),
                 (BitAnd, 1),
                 (BitOr, 1),
                 (Xor, 1),
                 (And, 1),
                 (Or, 1)];

    assert_eq!(ranks.len(), Operator::ALL.len());
    for (operator, rank) in ranks {
        assert_eq!(operator.precedence(), rank, "{operator:?}");
    }
}

#[test]
fn only_power_and_unary_operators_are_right_associative() {
    for operator in Operator::ALL {
        let expected = if operator.is_unary() || operator == Operator::Pow {
            Associativity::Right
        } else {
            Associativity::Left
        };
        assert_eq!(operator.associativity(), expected, "{operator:?}");
    }
}

#[test]
fn descriptor_matches_accessors() {
    for operator in Operator::ALL {
        let descriptor = operator.descriptor();
        assert_eq!(descriptor.symbol, operator.symbol());
        assert_eq!(descriptor.arity, operator.arity());
        assert_eq!(descriptor.precedence, operator.precedence());
        assert_eq!(descriptor.associativity, operator.associativity());
    }
    assert_eq!(Operator::ALL.iter().filter(|o| o.arity() == Arity::Unary).count(), 3);
}

#[test]
fn every_notation_symbol_reads_back() {
    for operator in Operator::ALL {
        assert_eq!(Operator::from_symbol(operator.notation_symbol()),
                   Some(operator),
                   "{operator:?}");
    }
}

#[test]
fn operators_with_the_wrong_arity_fail_to_apply() {
    assert_eq!(Operator::Mul.apply_unary(2.0),
               Err(RuntimeError::UnknownUnaryOperator { operator: "*" }));
    assert_eq!(Operator::Not.apply_binary(1.0, 2.0),
               Err(RuntimeError::UnknownBinaryOperator { operator: "not" }));
}

#[test]
fn hand_built_trees_with_wrong_arity_fail_to_evaluate() {
    let unary_plus = ExpressionTree::new(Node::unary(Operator::Add, Node::Operand(1.0)));
    assert_eq!(evaluate(&unary_plus),
               Err(Error::Runtime(RuntimeError::UnknownUnaryOperator { operator: "+" })));

    let binary_negate = ExpressionTree::new(Node::binary(Operator::Negate,
                                                         Node::Operand(1.0),
                                                         Node::Operand(2.0)));
    assert_eq!(evaluate(&binary_negate),
               Err(Error::Runtime(RuntimeError::UnknownBinaryOperator { operator: "-" })));
}

#[test]
fn empty_tree_is_a_null_structure_error() {
    assert_eq!(evaluate(&ExpressionTree::empty()),
               Err(Error::Runtime(RuntimeError::EmptyTree)));
}

#[test]
fn integer_operands_must_be_finite() {
    assert!(matches!(Operator::BitAnd.apply_binary(f64::INFINITY, 1.0),
                     Err(RuntimeError::IntegerOutOfRange { .. })));
    assert!(matches!(Operator::BitNot.apply_unary(1e300),
                     Err(RuntimeError::IntegerOutOfRange { .. })));
}

#[test]
fn tokenizer_prefers_multi_character_operators() {
    assert_eq!(tokenize("1<=2").unwrap(),
               vec![Token::number(1.0), op(Operator::LessEqual), Token::number(2.0)]);
    assert_eq!(tokenize("1<<2>>3").unwrap(),
               vec![Token::number(1.0),
                    op(Operator::Shl),
                    Token::number(2.0),
                    op(Operator::Shr),
                    Token::number(3.0)]);
    assert_eq!(tokenize("1&&2||3&4|5").unwrap(),
               vec![Token::number(1.0),
                    op(Operator::And),
                    Token::number(2.0),
                    op(Operator::Or),
                    Token::number(3.0),
                    op(Operator::BitAnd),
                    Token::number(4.0),
                    op(Operator::BitOr),
                    Token::number(5.0)]);
}

#[test]
fn tokenizer_maps_keywords_and_passes_other_words_through() {
    assert_eq!(tokenize("a and b or not c xor d").unwrap(),
               vec![Token::Identifier("a".to_string()),
                    op(Operator::And),
                    Token::Identifier("b".to_string()),
                    op(Operator::Or),
                    op(Operator::Not),
                    Token::Identifier("c".to_string()),
                    op(Operator::Xor),
                    Token::Identifier("d".to_string())]);
    assert_eq!(tokenize("android").unwrap(),
               vec![Token::Identifier("android".to_string())]);
}

#[test]
fn tokenizer_disambiguates_unary_operators() {
    assert_eq!(tokenize("-(+2 - -3)").unwrap(),
               vec![op(Operator::Negate),
                    Token::LParen,
                    Token::number(2.0),
                    op(Operator::Sub),
                    op(Operator::Negate),
                    Token::number(3.0),
                    Token::RParen]);
    assert_eq!(tokenize("x - 1").unwrap(),
               vec![Token::Identifier("x".to_string()),
                    op(Operator::Sub),
                    Token::number(1.0)]);
    assert_eq!(tokenize("!1 ~ 2").unwrap(),
               vec![op(Operator::Not),
                    Token::number(1.0),
                    op(Operator::BitNot),
                    Token::number(2.0)]);
}

#[test]
fn tokenizer_reserves_the_notation_spelling_of_unary_minus() {
    assert_eq!(tokenize("2 * neg 3").unwrap(),
               vec![Token::number(2.0),
                    op(Operator::Mul),
                    op(Operator::Negate),
                    Token::number(3.0)]);
    assert_eq!(tokenize("negative").unwrap(),
               vec![Token::Identifier("negative".to_string())]);
    assert_eq!(evaluate(&exprtree::build_expression_tree("neg 2 ^ 2").unwrap()), Ok(4.0));
}

#[test]
fn tokenizer_rejects_literals_beyond_f64() {
    let literal = format!("9{}", "9".repeat(320));
    assert_eq!(tokenize(&format!("1 + {literal}")),
               Err(ParseError::InvalidNumber { literal }));
}

#[test]
fn tokenizer_reports_unknown_characters() {
    assert_eq!(tokenize("1 + $"),
               Err(ParseError::UnexpectedCharacter { found:  "$".to_string(),
                                                     offset: 4, }));
}

#[test]
fn converter_pushes_unary_operators_without_popping() {
    let postfix = to_postfix(&tokenize("2 ^ -3").unwrap()).unwrap();
    assert_eq!(postfix,
               vec![Token::number(2.0),
                    Token::number(3.0),
                    op(Operator::Negate),
                    op(Operator::Pow)]);
}

#[test]
fn builder_rejects_parentheses_and_short_stacks() {
    assert_eq!(build(&[Token::LParen]),
               Err(ParseError::UnexpectedToken { token: "(".to_string() }));
    assert_eq!(build(&[Token::number(1.0), op(Operator::Mul)]),
               Err(ParseError::InvalidBinarySyntax { operator: "*" }));
    assert_eq!(build(&[op(Operator::Not)]),
               Err(ParseError::InvalidUnarySyntax { operator: "not" }));
}

#[test]
fn notation_reader_rejects_malformed_numbers() {
    assert_eq!(read_words("1.2.3 4 +"),
               Err(ParseError::InvalidNumber { literal: "1.2.3".to_string() }));
    assert_eq!(read_words("1e999"),
               Err(ParseError::InvalidNumber { literal: "1e999".to_string() }));
}

#[test]
fn notation_reader_treats_non_numeric_words_like_the_tokenizer() {
    for word in ["inf", "nan", "rate"] {
        assert_eq!(read_words(word).unwrap(), tokenize(word).unwrap(), "{word:?}");
    }
}

#[test]
fn builders_reject_trees_deeper_than_the_limit() {
    let too_deep = Err(ParseError::NestingTooDeep { limit: MAX_DEPTH });

    let prefix = read_words(&format!("{}1", "neg ".repeat(10_000))).unwrap();
    assert_eq!(build_prefix(&prefix), too_deep);

    let postfix = read_words(&format!("1{}", " neg".repeat(10_000))).unwrap();
    assert_eq!(build(&postfix), too_deep);

    let prefix = read_words(&format!("{}1", "neg ".repeat(MAX_DEPTH - 1))).unwrap();
    assert!(build_prefix(&prefix).is_ok());
}

#[test]
fn public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Token>();
    assert_send_sync::<Operator>();
    assert_send_sync::<ExpressionTree>();
    assert_send_sync::<Error>();
}
