use lexers::{CalcToken, Op};
use tracing::{debug, trace};

use crate::parser::RPNExpr;

/// Ways in which a postfix sequence fails to describe a single value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("not enough operands for '{0}'")]
    Underflow(Op),
    #[error("expected a single result, found {0} values")]
    Operands(usize),
    #[error("bad token {0:?}")]
    BadToken(String),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErr {
    #[error("division by zero")]
    DivisionByZero,
    #[error("malformed expression: {0}")]
    Malformed(#[from] Malformed),
}

impl RPNExpr {
    /// Builds a postfix sequence out of string lexemes, eg: `["3", "4", "+"]`.
    /// Only numbers and binary operators are allowed.
    pub fn from_lexemes<S: AsRef<str>>(lexemes: &[S]) -> Result<RPNExpr, Malformed> {
        lexemes
            .iter()
            .map(|lexeme| {
                let lexeme = lexeme.as_ref();
                match lexeme.parse::<CalcToken>() {
                    Ok(token @ (CalcToken::Number(_) | CalcToken::BOp(_))) => Ok(token),
                    _ => Err(Malformed::BadToken(lexeme.to_string())),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(RPNExpr)
    }
}

pub fn apply(op: Op, l: f64, r: f64) -> Result<f64, EvalErr> {
    match op {
        Op::Add => Ok(l + r),
        Op::Sub => Ok(l - r),
        Op::Mul => Ok(l * r),
        Op::Div if r == 0.0 => Err(EvalErr::DivisionByZero),
        Op::Div => Ok(l / r),
    }
}

pub struct RPNEvaluator;

impl RPNEvaluator {
    pub fn eval(rpn: &RPNExpr) -> Result<f64, EvalErr> {
        let result = Self::reduce(rpn);
        match &result {
            Ok(value) => debug!(value, "evaluated postfix expression"),
            Err(err) => debug!(%err, "evaluation failed"),
        }
        result
    }

    pub fn eval_lexemes<S: AsRef<str>>(lexemes: &[S]) -> Result<f64, EvalErr> {
        Self::eval(&RPNExpr::from_lexemes(lexemes)?)
    }

    fn reduce(rpn: &RPNExpr) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in rpn.iter() {
            trace!(%token, depth = operands.len(), "reducing");
            match *token {
                CalcToken::Number(num) => operands.push(num),
                CalcToken::BOp(op) => {
                    let r = operands.pop().ok_or(Malformed::Underflow(op))?;
                    let l = operands.pop().ok_or(Malformed::Underflow(op))?;
                    operands.push(apply(op, l, r)?);
                }
                _ => return Err(Malformed::BadToken(token.to_string()).into()),
            }
        }
        match operands[..] {
            [result] => Ok(result),
            _ => Err(Malformed::Operands(operands.len()).into()),
        }
    }
}
