//! The abstract syntax tree produced by the parser and consumed by the code
//! generator.  Each statement of a program is a single [`Expression`] tree
//! which owns all of its children.

mod expression;
mod program;
mod vartable;

pub use expression::{BinaryOperator, Expression};
pub use program::Program;
pub use vartable::{LocalVar, VarDecl, VarTable, WORD_SIZE};
