use std::fmt;
use std::ops::Deref;

use lexers::{CalcToken, CalcTokenizer, Op};
use tracing::{debug, trace};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

// Indexed by `Op as usize`, rows must follow the declaration order of Op.
static OPERATORS: [(Op, usize, Assoc); 4] = [
    (Op::Add, 1, Assoc::Left),
    (Op::Sub, 1, Assoc::Left),
    (Op::Mul, 2, Assoc::Left),
    (Op::Div, 2, Assoc::Left),
];

pub fn precedence(op: Op) -> (usize, Assoc) {
    let (row, prec, assoc) = OPERATORS[op as usize];
    debug_assert_eq!(row, op, "operator table out of order");
    (prec, assoc)
}

/// Whether an operator sitting on the stack has to be emitted before the
/// incoming one is pushed: it binds tighter, or just as tight and the
/// incoming operator groups to the left.
pub fn pops_before(stacked: (usize, Assoc), incoming: (usize, Assoc)) -> bool {
    let (prec_lhs, _) = stacked;
    let (prec_rhs, assoc_rhs) = incoming;
    prec_lhs > prec_rhs || (prec_lhs == prec_rhs && assoc_rhs == Assoc::Left)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Paren {
    Open,
    Close,
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Paren::Open => write!(f, "opening"),
            Paren::Close => write!(f, "closing"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid token {0:?}")]
    InvalidToken(String),
    /// The missing side of the pair.
    #[error("unbalanced parentheses: missing {0} paren")]
    UnbalancedParens(Paren),
}

/// Tokens in postfix order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RPNExpr(pub Vec<CalcToken>);

impl Deref for RPNExpr {
    type Target = [CalcToken];
    fn deref(&self) -> &[CalcToken] {
        &self.0
    }
}

impl RPNExpr {
    pub fn lexemes(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut CalcTokenizer::new(expr.chars()))
    }

    pub fn parse(lex: &mut impl Iterator<Item = CalcToken>) -> Result<RPNExpr, ParseError> {
        let result = Self::shunt(lex);
        match &result {
            Ok(rpn) => debug!(tokens = rpn.len(), "converted to postfix"),
            Err(err) => debug!(%err, "conversion failed"),
        }
        result
    }

    fn shunt(lex: &mut impl Iterator<Item = CalcToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        while let Some(token) = lex.next() {
            trace!(%token, depth = stack.len(), "shunting");
            match token {
                CalcToken::Number(_) => out.push(token),
                CalcToken::OParen => stack.push(token),
                CalcToken::CParen => loop {
                    match stack.pop() {
                        Some(CalcToken::OParen) => break,
                        Some(top) => out.push(top),
                        None => return Err(ParseError::UnbalancedParens(Paren::Open)),
                    }
                },
                CalcToken::BOp(op) => {
                    // an OParen on top ends the loop, it only leaves on CParen
                    while let Some(&CalcToken::BOp(top)) = stack.last() {
                        if !pops_before(precedence(top), precedence(op)) {
                            break;
                        }
                        stack.pop();
                        out.push(CalcToken::BOp(top));
                    }
                    stack.push(token);
                }
                CalcToken::Unknown(lexeme) => return Err(ParseError::InvalidToken(lexeme)),
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                CalcToken::OParen => return Err(ParseError::UnbalancedParens(Paren::Close)),
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }
}
