//! Arithmetic expression evaluation in two passes: infix input is reordered
//! into postfix (Reverse Polish) form by the shunting-yard algorithm, and the
//! postfix sequence is then reduced on an operand stack.
//!
//! ```
//! let rpn = rpncalc::convert("3 + 4 * 2").unwrap();
//! assert_eq!(rpn, ["3", "4", "2", "*", "+"]);
//! assert_eq!(rpncalc::evaluate(&rpn), Ok(11.0));
//! ```

pub use lexers::{CalcToken, Op};

pub use parser::{Assoc, Paren, ParseError, RPNExpr, ShuntingParser};

pub mod parser;

pub use self::rpneval::{EvalErr, Malformed, RPNEvaluator};

mod rpnprint;
mod rpneval;
#[cfg(test)]
mod calc_test;
#[cfg(test)]
mod testutil;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalErr),
}

/// Infix expression to postfix lexemes, eg: `"(1 + 2) * 3"` gives
/// `["1", "2", "+", "3", "*"]`.
pub fn convert(expr: &str) -> Result<Vec<String>, ParseError> {
    Ok(ShuntingParser::parse_str(expr)?.lexemes())
}

pub fn evaluate<S: AsRef<str>>(lexemes: &[S]) -> Result<f64, EvalErr> {
    RPNEvaluator::eval_lexemes(lexemes)
}

pub fn calculate(expr: &str) -> Result<f64, CalcError> {
    let rpn = ShuntingParser::parse_str(expr)?;
    Ok(RPNEvaluator::eval(&rpn)?)
}

/// Shortest text that parses back to the same value. Negative zero is
/// printed as plain `0`.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
