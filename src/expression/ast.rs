use crate::token::{BinaryOp, UnaryOp};

/// Expression tree over the puzzle operators
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Sqrt(Box<Expression>),
    Factorial(Box<Expression>),
}

impl Expression {
    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        match op {
            BinaryOp::Add => Expression::Add(left, right),
            BinaryOp::Sub => Expression::Sub(left, right),
            BinaryOp::Mul => Expression::Mul(left, right),
            BinaryOp::Div => Expression::Div(left, right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        match op {
            UnaryOp::Sqrt => Expression::Sqrt(Box::new(operand)),
            UnaryOp::Factorial => Expression::Factorial(Box::new(operand)),
        }
    }

    /// Binding strength when rendered as infix tokens
    pub fn precedence(&self) -> u8 {
        match self {
            Expression::Add(_, _) | Expression::Sub(_, _) => BinaryOp::Add.precedence(),
            Expression::Mul(_, _) | Expression::Div(_, _) => BinaryOp::Mul.precedence(),
            Expression::Sqrt(_) | Expression::Factorial(_) => UnaryOp::Sqrt.precedence(),
            Expression::Number(_) => 5,
        }
    }

    /// Leaf values from left to right
    pub fn numbers(&self) -> Vec<f64> {
        let mut out = Vec::new();
        self.collect_numbers(&mut out);
        out
    }

    fn collect_numbers(&self, out: &mut Vec<f64>) {
        match self {
            Expression::Number(n) => out.push(*n),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => {
                l.collect_numbers(out);
                r.collect_numbers(out);
            }
            Expression::Sqrt(e) | Expression::Factorial(e) => e.collect_numbers(out),
        }
    }
}
