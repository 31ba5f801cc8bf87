use serde::Serialize;

use crate::compiler::{
    source::{Source, Span},
    CompilerDisplay, CompilerDisplayError,
};

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub enum Lex {
    Integer(i64),
    Identifier(char),
    Mul,
    Div,
    Add,
    Minus,
    GrEq,
    LsEq,
    Gr,
    Ls,
    Eq,
    NEq,
    Assign,
    Semicolon,
    LParen,
    RParen,
    Eof,
}

impl std::fmt::Display for Lex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Lex::*;
        match self {
            Integer(i) => f.write_str(&format!("integer literal {}", i)),
            Identifier(id) => f.write_str(&format!("identifier {}", id)),
            Mul => f.write_str("*"),
            Div => f.write_str("/"),
            Add => f.write_str("+"),
            Minus => f.write_str("-"),
            GrEq => f.write_str(">="),
            LsEq => f.write_str("<="),
            Gr => f.write_str(">"),
            Ls => f.write_str("<"),
            Eq => f.write_str("=="),
            NEq => f.write_str("!="),
            Assign => f.write_str("="),
            Semicolon => f.write_str(";"),
            LParen => f.write_str("("),
            RParen => f.write_str(")"),
            Eof => f.write_str("EOF"),
        }
    }
}

impl CompilerDisplay for Lex {
    fn fmt(&self, _: &Source) -> Result<String, CompilerDisplayError> {
        Ok(format!("{}", self))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub sym: Lex,
    pub span: Span,

    /// The source line that the token starts on.  Used for tracing.
    pub line: u32,
}

impl Token {
    pub fn new(sym: Lex, span: Span, line: u32) -> Token {
        Token { sym, span, line }
    }

    /// Compares the kind of this token with `a`, ignoring any payload. So an
    /// `Integer(5)` token is equal to `Lex::Integer(0)`.
    pub fn token_eq(&self, a: &Lex) -> bool {
        std::mem::discriminant(&self.sym) == std::mem::discriminant(a)
    }

    pub fn is_eof(&self) -> bool {
        self.sym == Lex::Eof
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}:{}", self.line, self.sym)
    }
}

impl CompilerDisplay for Token {
    /// Shows the token as the text it was lexed from.
    fn fmt(&self, src: &Source) -> Result<String, CompilerDisplayError> {
        if self.is_eof() {
            return Ok("EOF".into());
        }

        src.text_in_span(self.span)
            .map(|text| format!("`{}`", text))
            .ok_or(CompilerDisplayError::SpanOutOfRange(self.span))
    }
}
