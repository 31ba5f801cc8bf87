use serde::Serialize;

use crate::compiler::source::Span;

use super::LocalVar;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Expression {
    Integer(Span, i64),
    Variable(Span, LocalVar),
    BinaryOp(Span, BinaryOperator, Box<Expression>, Box<Expression>),

    /// Stores the value of the right side into the location named by the
    /// left side, which must be a [`Expression::Variable`]
    Assign(Span, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn span(&self) -> Span {
        use Expression::*;
        match self {
            Integer(span, ..) | Variable(span, ..) | BinaryOp(span, ..) | Assign(span, ..) => {
                *span
            }
        }
    }

    /// Returns true if this expression names a storage location and can be
    /// assigned to.
    pub fn is_lvalue(&self) -> bool {
        matches!(self, Expression::Variable(..))
    }

    pub fn root_str(&self) -> String {
        use Expression::*;
        match self {
            Integer(_, v) => format!("{}", v),
            Variable(_, var) => format!("{}", var),
            BinaryOp(_, op, ..) => format!("{}", op),
            Assign(..) => "=".into(),
        }
    }
}

impl std::fmt::Display for Expression {
    /// Writes the tree as an s-expression: `(+ 1 (* 2 3))`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Expression::*;
        match self {
            Integer(..) | Variable(..) => f.write_str(&self.root_str()),
            BinaryOp(_, _, l, r) | Assign(_, l, r) => {
                write!(f, "({} {} {})", self.root_str(), l, r)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Ls,
    LsEq,
    Eq,
    NEq,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::*;
        match self {
            Add => f.write_str("+"),
            Sub => f.write_str("-"),
            Mul => f.write_str("*"),
            Div => f.write_str("/"),
            Ls => f.write_str("<"),
            LsEq => f.write_str("<="),
            Eq => f.write_str("=="),
            NEq => f.write_str("!="),
        }
    }
}
