use serde::Serialize;

use super::{Expression, VarTable};

/// A parsed program: its statements, in source order, along with the table
/// of every local variable those statements use.
#[derive(Debug, PartialEq, Serialize)]
pub struct Program {
    statements: Vec<Expression>,
    vars: VarTable,
}

impl Program {
    pub fn new(statements: Vec<Expression>, vars: VarTable) -> Program {
        Program { statements, vars }
    }

    pub fn statements(&self) -> &[Expression] {
        &self.statements
    }

    pub fn vars(&self) -> &VarTable {
        &self.vars
    }
}
