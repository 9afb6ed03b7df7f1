use std::fmt;
use std::str::FromStr;

use crate::arith::format_number;
use crate::token::errors::SequenceError;

/// Stable identity of a token within one puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub(crate) u32);

impl TokenId {
    pub fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl FromStr for TokenId {
    type Err = SequenceError;

    /// Accepts both the rendered form (`t7`) and a bare index (`7`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('t').unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .map(TokenId)
            .map_err(|_| SequenceError::InvalidTokenId(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Search and evaluation order
    pub const ALL: [BinaryOp; 4] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div];

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "×",
            BinaryOp::Div => "÷",
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 2,
            BinaryOp::Mul | BinaryOp::Div => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sqrt,
    Factorial,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Factorial => "!",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            UnaryOp::Sqrt => "√",
            UnaryOp::Factorial => "!",
        }
    }

    pub fn precedence(&self) -> u8 {
        4
    }

    /// Square root reads as a prefix operator, so equal precedence does not pop it
    pub fn is_right_associative(&self) -> bool {
        matches!(self, UnaryOp::Sqrt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paren {
    Open,
    Close,
}

impl Paren {
    pub fn symbol(&self) -> &'static str {
        match self {
            Paren::Open => "(",
            Paren::Close => ")",
        }
    }
}

/// Anything the player can insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Paren(Paren),
}

impl FromStr for Operator {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Binary(BinaryOp::Add)),
            "-" | "−" => Ok(Operator::Binary(BinaryOp::Sub)),
            "*" | "×" => Ok(Operator::Binary(BinaryOp::Mul)),
            "/" | "÷" => Ok(Operator::Binary(BinaryOp::Div)),
            "sqrt" | "√" => Ok(Operator::Unary(UnaryOp::Sqrt)),
            "!" => Ok(Operator::Unary(UnaryOp::Factorial)),
            "(" => Ok(Operator::Paren(Paren::Open)),
            ")" => Ok(Operator::Paren(Paren::Close)),
            other => Err(SequenceError::UnknownOperator(other.to_string())),
        }
    }
}

impl From<Operator> for TokenKind {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Binary(op) => TokenKind::Binary(op),
            Operator::Unary(op) => TokenKind::Unary(op),
            Operator::Paren(paren) => TokenKind::Paren(paren),
        }
    }
}

/// What a token means, independent of its identity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Binary(BinaryOp),
    Unary(UnaryOp),
    Paren(Paren),
}

impl TokenKind {
    pub fn is_number(&self) -> bool {
        matches!(self, TokenKind::Number(_))
    }

    /// Canonical symbol (`*`, `sqrt`, digits for numbers)
    pub fn symbol(&self) -> String {
        match self {
            TokenKind::Number(n) => format_number(*n),
            TokenKind::Binary(op) => op.symbol().to_string(),
            TokenKind::Unary(op) => op.symbol().to_string(),
            TokenKind::Paren(paren) => paren.symbol().to_string(),
        }
    }

    /// Cosmetic rendering (`×`, `÷`, `√`)
    pub fn glyph(&self) -> String {
        match self {
            TokenKind::Number(n) => format_number(*n),
            TokenKind::Binary(op) => op.glyph().to_string(),
            TokenKind::Unary(op) => op.glyph().to_string(),
            TokenKind::Paren(paren) => paren.symbol().to_string(),
        }
    }
}

impl AsRef<TokenKind> for TokenKind {
    fn as_ref(&self) -> &TokenKind {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub id: TokenId,
    pub kind: TokenKind,
}

impl AsRef<TokenKind> for Token {
    fn as_ref(&self) -> &TokenKind {
        &self.kind
    }
}
