#![deny(warnings)]

use std::fmt;
use std::str::FromStr;
use crate::scanner::Scanner;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Op {
    Add, Sub, Mul, Div,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Op> {
        Self::ALL.iter().copied().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum CalcToken {
    Unknown(String),
    Number(f64),
    BOp(Op),
    OParen, CParen,
}

impl fmt::Display for CalcToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcToken::Unknown(lexeme) => write!(f, "{}", lexeme),
            CalcToken::Number(num) => write!(f, "{}", num),
            CalcToken::BOp(op) => write!(f, "{}", op),
            CalcToken::OParen => write!(f, "("),
            CalcToken::CParen => write!(f, ")"),
        }
    }
}

// A lexeme must hold exactly one recognized token, eg: "3.5" or "*"
impl FromStr for CalcToken {
    type Err = String;
    fn from_str(lexeme: &str) -> Result<Self, Self::Err> {
        let mut lx = CalcTokenizer::new(lexeme.chars());
        match (lx.next(), lx.next()) {
            (Some(CalcToken::Unknown(_)), _) | (Some(_), Some(_)) | (None, _) =>
                Err(format!("Bad token: {}", lexeme)),
            (Some(token), None) => Ok(token),
        }
    }
}

pub struct CalcTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> CalcTokenizer<I> {
    pub fn new(source: I) -> Self {
        CalcTokenizer{src: Scanner::new(source)}
    }

    fn get_token(&mut self) -> Option<CalcToken> {
        self.src.ignore_ws();
        if let Some(num) = self.src.scan_number() {
            return Some(match num.parse::<f64>() {
                // too long a run of digits overflows to inf
                Ok(value) if value.is_finite() => CalcToken::Number(value),
                _ => CalcToken::Unknown(num),
            });
        }
        let symbol = self.src.next()?;
        self.src.ignore();
        Some(match symbol {
            '(' => CalcToken::OParen,
            ')' => CalcToken::CParen,
            other => match Op::from_symbol(other) {
                Some(op) => CalcToken::BOp(op),
                None => CalcToken::Unknown(other.to_string()),
            },
        })
    }
}

impl<I: Iterator<Item=char>> Iterator for CalcTokenizer<I> {
    type Item = CalcToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
