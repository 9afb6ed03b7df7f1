use crate::token::{BinaryOp, Paren, TokenKind, UnaryOp};
use crate::utils::{UtilsError, parse_numbers, parse_program};

#[test]
fn test_parse_numbers_valid() {
    assert_eq!(parse_numbers("1234"), Ok([1.0, 2.0, 3.0, 4.0]));
    assert_eq!(parse_numbers(" 9 0 0 7 "), Ok([9.0, 0.0, 0.0, 7.0]));
    assert_eq!(parse_numbers("5,5,5,5"), Ok([5.0, 5.0, 5.0, 5.0]));
}

#[test]
fn test_parse_numbers_invalid() {
    assert_eq!(parse_numbers(""), Err(UtilsError::EmptyInput));
    assert_eq!(
        parse_numbers("12a4"),
        Err(UtilsError::InvalidDigitString("12a4".to_string()))
    );
    assert_eq!(
        parse_numbers("123"),
        Err(UtilsError::WrongDigitCount {
            expected: 4,
            found: 3
        })
    );
    assert!(parse_numbers("12345").is_err());
    assert!(parse_numbers("1.5 2 3").is_err());
}

#[test]
fn test_parse_program() {
    let tokens = parse_program("(3-1)*5+0");
    assert_eq!(
        tokens,
        Ok(vec![
            TokenKind::Paren(Paren::Open),
            TokenKind::Number(3.0),
            TokenKind::Binary(BinaryOp::Sub),
            TokenKind::Number(1.0),
            TokenKind::Paren(Paren::Close),
            TokenKind::Binary(BinaryOp::Mul),
            TokenKind::Number(5.0),
            TokenKind::Binary(BinaryOp::Add),
            TokenKind::Number(0.0),
        ])
    );
}

#[test]
fn test_parse_program_unary_and_glyphs() {
    let tokens = parse_program("sqrt 9 + 4! ÷ √4");
    assert_eq!(
        tokens,
        Ok(vec![
            TokenKind::Unary(UnaryOp::Sqrt),
            TokenKind::Number(9.0),
            TokenKind::Binary(BinaryOp::Add),
            TokenKind::Number(4.0),
            TokenKind::Unary(UnaryOp::Factorial),
            TokenKind::Binary(BinaryOp::Div),
            TokenKind::Unary(UnaryOp::Sqrt),
            TokenKind::Number(4.0),
        ])
    );
}

#[test]
fn test_parse_program_rejects_unknown_symbols() {
    assert_eq!(
        parse_program("1 ^ 2"),
        Err(UtilsError::UnknownSymbol {
            symbol: "^".to_string(),
            offset: 2
        })
    );
    assert_eq!(parse_program("   "), Err(UtilsError::EmptyInput));
    assert_eq!(
        parse_program("2x5"),
        Err(UtilsError::UnknownSymbol {
            symbol: "x".to_string(),
            offset: 1
        })
    );
}
