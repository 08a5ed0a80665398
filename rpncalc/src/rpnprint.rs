use crate::parser::{precedence, Assoc, RPNExpr};
use crate::rpneval::Malformed;
use lexers::{CalcToken, Op};
use std::fmt;

#[derive(Debug, Clone)]
enum AST {
    Leaf(f64),
    Node(Op, Box<AST>, Box<AST>),
}

impl RPNExpr {
    fn build_ast(&self) -> Result<AST, Malformed> {
        let mut nodes = Vec::new();
        for token in self.iter() {
            match *token {
                CalcToken::Number(num) => nodes.push(AST::Leaf(num)),
                CalcToken::BOp(op) => {
                    let rhs = nodes.pop().ok_or(Malformed::Underflow(op))?;
                    let lhs = nodes.pop().ok_or(Malformed::Underflow(op))?;
                    nodes.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
                _ => return Err(Malformed::BadToken(token.to_string())),
            }
        }
        if nodes.len() != 1 {
            return Err(Malformed::Operands(nodes.len()));
        }
        nodes.pop().ok_or(Malformed::Operands(0))
    }

    /// Infix rendering with the fewest parentheses that keep the grouping.
    /// Converting the result again yields this same postfix sequence.
    pub fn to_infix(&self) -> Result<String, Malformed> {
        // leaves bind tighter than any operator
        fn printer(root: &AST) -> (String, usize) {
            match root {
                AST::Leaf(num) => (format!("{}", num), usize::MAX),
                AST::Node(op, lhs, rhs) => {
                    let (prec, assoc) = precedence(*op);
                    let (lhs, prec_lhs) = printer(lhs);
                    let (rhs, prec_rhs) = printer(rhs);

                    let lh = if prec > prec_lhs || (prec == prec_lhs && assoc != Assoc::Left) {
                        format!("({})", lhs)
                    } else {
                        lhs
                    };
                    let rh = if prec > prec_rhs || (prec == prec_rhs && assoc != Assoc::Right) {
                        format!("({})", rhs)
                    } else {
                        rhs
                    };
                    // NOTE: '2+(3+4)' keeps its parens, they change the postfix order
                    (format!("{} {} {}", lh, op, rh), prec)
                }
            }
        }

        Ok(printer(&self.build_ast()?).0)
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lexemes().join(" "))
    }
}
