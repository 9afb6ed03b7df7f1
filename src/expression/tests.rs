use crate::arith::ArithmeticError;
use crate::expression::{
    EvalFault, Evaluation, Expression, PostfixItem, StructuralError, evaluate, evaluate_postfix,
    render_tokens, to_postfix, validate_structure,
};
use crate::token::{BinaryOp, Operator, Paren, TokenKind, UnaryOp};

/// Build tokens from a whitespace-separated program such as `( 3 - 1 ) * 5`
fn tokens(program: &str) -> Vec<TokenKind> {
    program
        .split_whitespace()
        .filter_map(|part| match part.parse::<f64>() {
            Ok(n) => Some(TokenKind::Number(n)),
            Err(_) => part.parse::<Operator>().ok().map(TokenKind::from),
        })
        .collect()
}

fn assert_value(evaluation: &Evaluation, expected: f64) {
    assert!(
        evaluation.is_valid(),
        "expected a valid evaluation, got {:?}",
        evaluation
    );
    if let Some(value) = evaluation.result() {
        assert!((value - expected).abs() < 1e-9, "got {}", value);
    }
}

#[test]
fn test_too_few_numbers() {
    let evaluation = evaluate(&tokens("5 * 2"));
    assert_eq!(
        evaluation,
        Evaluation::Invalid(Some(StructuralError::WrongNumberCount { found: 2 }))
    );
    assert!(!evaluation.is_win());
}

#[test]
fn test_plain_sum_wins() {
    let evaluation = evaluate(&tokens("1 + 2 + 3 + 4"));
    assert_value(&evaluation, 10.0);
    assert!(evaluation.is_win());
}

#[test]
fn test_parenthesized_group() {
    let evaluation = evaluate(&tokens("( 3 - 1 ) * 5 + 0"));
    assert_value(&evaluation, 10.0);
    assert!(evaluation.is_win());
}

#[test]
fn test_factorial_binds_tightest() {
    let evaluation = evaluate(&tokens("4 ! / 2 - 2 * 1"));
    assert_value(&evaluation, 10.0);
}

#[test]
fn test_missing_closing_parenthesis() {
    let evaluation = evaluate(&tokens("sqrt ( 9 + 1 + 0 + 0"));
    assert_eq!(
        evaluation,
        Evaluation::Invalid(Some(StructuralError::UnbalancedParentheses))
    );
    assert_eq!(
        evaluation.error().map(|e| e.to_string()),
        Some("Parentheses are not balanced".to_string())
    );
}

#[test]
fn test_close_before_open() {
    let result = validate_structure(&tokens(") 1 + 2 + 3 + 4 ("));
    assert_eq!(result, Err(StructuralError::UnbalancedParentheses));
}

#[test]
fn test_division_by_zero_has_no_message() {
    let evaluation = evaluate(&tokens("5 / 0 + 1 + 1"));
    assert_eq!(evaluation, Evaluation::Invalid(None));
    assert_eq!(evaluation.error(), None);
}

#[test]
fn test_dangling_operator_is_invalid() {
    assert_eq!(evaluate(&tokens("1 + 2 + 3 + 4 -")), Evaluation::Invalid(None));
}

#[test]
fn test_adjacent_numbers_are_invalid() {
    // the starting layout: four numbers and no operators
    assert_eq!(evaluate(&tokens("1 2 3 4")), Evaluation::Invalid(None));
}

#[test]
fn test_precedence_of_multiplication() {
    assert_value(&evaluate(&tokens("2 + 2 * 4 - 0")), 10.0);
    assert_value(&evaluate(&tokens("9 - 8 / 4 * 2")), 5.0);
}

#[test]
fn test_left_associative_subtraction() {
    assert_value(&evaluate(&tokens("9 - 3 - 2 - 1")), 3.0);
    assert_value(&evaluate(&tokens("8 / 2 / 2 * 1")), 2.0);
}

#[test]
fn test_sqrt_prefix() {
    assert_value(&evaluate(&tokens("sqrt 9 + 7 * 1 + 0")), 10.0);
    assert_value(&evaluate(&tokens("sqrt ( 4 * 9 ) + 4 * 1")), 10.0);
}

#[test]
fn test_nested_sqrt_is_right_associative() {
    let postfix = to_postfix(&tokens("sqrt sqrt 16"));
    assert_eq!(
        postfix,
        Ok(vec![
            PostfixItem::Number(16.0),
            PostfixItem::Unary(UnaryOp::Sqrt),
            PostfixItem::Unary(UnaryOp::Sqrt),
        ])
    );
    assert_eq!(evaluate_postfix(&postfix.unwrap_or_default()), Ok(2.0));
}

#[test]
fn test_factorial_after_sqrt_applies_to_root() {
    // equal precedence: the stacked sqrt is emitted before `!`
    let postfix = to_postfix(&tokens("sqrt 9 !"));
    assert_eq!(
        postfix,
        Ok(vec![
            PostfixItem::Number(9.0),
            PostfixItem::Unary(UnaryOp::Sqrt),
            PostfixItem::Unary(UnaryOp::Factorial),
        ])
    );
}

#[test]
fn test_negative_sqrt_fault() {
    assert_eq!(evaluate(&tokens("sqrt ( 1 - 2 ) + 3 + 4")), Evaluation::Invalid(None));
    let postfix = vec![
        PostfixItem::Number(-4.0),
        PostfixItem::Unary(UnaryOp::Sqrt),
    ];
    assert_eq!(
        evaluate_postfix(&postfix),
        Err(EvalFault::NegativeSquareRoot(-4.0))
    );
}

#[test]
fn test_factorial_faults_propagate() {
    let postfix = vec![
        PostfixItem::Number(2.5),
        PostfixItem::Unary(UnaryOp::Factorial),
    ];
    assert_eq!(
        evaluate_postfix(&postfix),
        Err(EvalFault::Arithmetic(ArithmeticError::NotAnInteger(2.5)))
    );
    assert_eq!(evaluate(&tokens("9 ! ! + 1 + 2 + 3")), Evaluation::Invalid(None));
}

#[test]
fn test_postfix_underflow() {
    let postfix = vec![PostfixItem::Binary(BinaryOp::Add)];
    assert_eq!(evaluate_postfix(&postfix), Err(EvalFault::MissingOperand("+")));
    assert_eq!(
        evaluate_postfix(&[]),
        Err(EvalFault::InvalidExpression(0))
    );
}

#[test]
fn test_unmatched_close_in_postfix_conversion() {
    assert_eq!(
        to_postfix(&tokens("1 + 2 )")),
        Err(EvalFault::MismatchedParentheses)
    );
    assert_eq!(
        to_postfix(&tokens("( 1 + 2")),
        Err(EvalFault::MismatchedParentheses)
    );
}

#[test]
fn test_evaluation_is_idempotent() {
    let program = tokens("( 1 + 4 ) * ( 3 - 1 )");
    assert_eq!(evaluate(&program), evaluate(&program));
}

#[test]
fn test_not_a_win_when_valid_but_off_target() {
    let evaluation = evaluate(&tokens("1 * 2 * 3 * 4"));
    assert_value(&evaluation, 24.0);
    assert!(!evaluation.is_win());
}

#[test]
fn test_render_tokens() {
    assert_eq!(render_tokens(&tokens("( 3 - 1 ) * 5 + 0")), "(3 - 1) × 5 + 0");
    assert_eq!(render_tokens(&tokens("4 ! / 2")), "4! ÷ 2");
    assert_eq!(render_tokens(&tokens("sqrt ( 9 )")), "√(9)");
    assert_eq!(render_tokens(&tokens("1 2 3 4")), "1 2 3 4");
}

#[test]
fn test_expression_to_tokens_round_trips_through_evaluator() {
    let expr = Expression::Mul(
        Box::new(Expression::Add(
            Box::new(Expression::Factorial(Box::new(Expression::Sub(
                Box::new(Expression::Number(3.0)),
                Box::new(Expression::Number(1.0)),
            )))),
            Box::new(Expression::Number(8.0)),
        )),
        Box::new(Expression::Sqrt(Box::new(Expression::Number(1.0)))),
    );
    assert_eq!(expr.evaluate(), Ok(10.0));
    assert_eq!(expr.numbers(), vec![3.0, 1.0, 8.0, 1.0]);
    assert_eq!(expr.to_string(), "((3 - 1)! + 8) × √1");
    assert!(evaluate(&expr.to_tokens()).is_win());
}

#[test]
fn test_right_operand_of_equal_precedence_keeps_parens() {
    let expr = Expression::binary(
        BinaryOp::Sub,
        Expression::Number(9.0),
        Expression::binary(BinaryOp::Sub, Expression::Number(3.0), Expression::Number(2.0)),
    );
    assert_eq!(expr.to_string(), "9 - (3 - 2)");
    assert_eq!(expr.evaluate(), Ok(8.0));
    let tokens = expr.to_tokens();
    assert_eq!(tokens.get(2), Some(&TokenKind::Paren(Paren::Open)));
}

#[test]
fn test_expression_division_fault() {
    let expr = Expression::binary(BinaryOp::Div, Expression::Number(1.0), Expression::Number(0.0));
    assert_eq!(expr.evaluate(), Err(EvalFault::DivisionByZero));
}
