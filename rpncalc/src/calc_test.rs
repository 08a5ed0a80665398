use crate::parser::{Paren, ParseError};
use crate::rpneval::{EvalErr, Malformed};
use crate::testutil::init_tracing;
use crate::{calculate, convert, evaluate, format_result, CalcError};
use lexers::Op;
use pretty_assertions::assert_eq;

#[test]
fn convert_then_evaluate() {
    init_tracing();
    let rpn = convert("3 + 4 * 2").unwrap();
    assert_eq!(rpn, vec!["3", "4", "2", "*", "+"]);
    assert_eq!(evaluate(&rpn), Ok(11.0));

    let rpn = convert("(1 + 2) * 3").unwrap();
    assert_eq!(rpn, vec!["1", "2", "+", "3", "*"]);
    assert_eq!(evaluate(&rpn), Ok(9.0));

    let rpn = convert("8 / 4 / 2").unwrap();
    assert_eq!(rpn, vec!["8", "4", "/", "2", "/"]);
    assert_eq!(evaluate(&rpn), Ok(1.0));
}

#[test]
fn conversion_errors() {
    assert_eq!(convert("(3 + 4"), Err(ParseError::UnbalancedParens(Paren::Close)));
    assert_eq!(convert("3 + 4)"), Err(ParseError::UnbalancedParens(Paren::Open)));
    assert_eq!(convert("3 & 4"), Err(ParseError::InvalidToken(format!("&"))));
    assert_eq!(convert(""), Ok(vec![]));
}

#[test]
fn overflowing_literal() {
    let huge = "9".repeat(400);
    let expr = format!("{} - {}", huge, huge);
    assert_eq!(convert(&expr), Err(ParseError::InvalidToken(huge.clone())));
    assert_eq!(calculate(&expr), Err(CalcError::Parse(ParseError::InvalidToken(huge))));
    // largest literals that still fit go through both passes
    let big = "9".repeat(300);
    let rpn = convert(&format!("{} - {}", big, big)).unwrap();
    assert_eq!(evaluate(&rpn), Ok(0.0));
}

#[test]
fn calculate_expressions() {
    assert_eq!(calculate("3 + 4 * 2"), Ok(11.0));
    assert_eq!(calculate("2.5 * 4 - 10"), Ok(0.0));
    assert_eq!(
        calculate("1 + (2"),
        Err(CalcError::Parse(ParseError::UnbalancedParens(Paren::Close)))
    );
    assert_eq!(calculate("5 / (3 - 3)"), Err(CalcError::Eval(EvalErr::DivisionByZero)));
    assert_eq!(
        calculate("1 + 2 3"),
        Err(CalcError::Eval(EvalErr::Malformed(Malformed::Operands(2))))
    );
    assert_eq!(
        calculate(""),
        Err(CalcError::Eval(EvalErr::Malformed(Malformed::Operands(0))))
    );
    assert_eq!(
        calculate("-3"),
        Err(CalcError::Eval(EvalErr::Malformed(Malformed::Underflow(Op::Sub))))
    );
}

#[test]
fn error_messages() {
    let err = calculate("(1").unwrap_err();
    assert_eq!(err.to_string(), "parse error: unbalanced parentheses: missing closing paren");
    let err = calculate("1 $ 2").unwrap_err();
    assert_eq!(err.to_string(), "parse error: invalid token \"$\"");
    let err = calculate("4 / 0").unwrap_err();
    assert_eq!(err.to_string(), "eval error: division by zero");
}

#[test]
fn format_results() {
    assert_eq!(format_result(11.0), "11");
    assert_eq!(format_result(2.5), "2.5");
    assert_eq!(format_result(-0.0), "0");
    assert_eq!(format_result(-7.25), "-7.25");
    assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_result(1.0 / 3.0).parse::<f64>(), Ok(1.0 / 3.0));
}
