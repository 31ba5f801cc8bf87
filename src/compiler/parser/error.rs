use crate::compiler::{
    lexer::tokens::Lex, source::Source, CompilerDisplay, CompilerDisplayError,
};

/// Compiler errors that happen within the Parser stage of compilation.
#[derive(Clone, Debug, PartialEq)]
pub enum ParserError {
    /// The token stream did not end with an EOF token
    MissingEof,
    ExpectedButFound(Vec<Lex>, Lex),
    /// A unary operator was not followed by a term: (operator, found)
    ExpectedTermAfter(Lex, Lex),
    ExpectedTerm(Lex),
    InvalidAssignTarget,
}

impl CompilerDisplay for ParserError {
    /// Format a ParserError into a human readable message
    fn fmt(&self, src: &Source) -> Result<String, CompilerDisplayError> {
        let msg = match self {
            ParserError::MissingEof => "Token stream must end with EOF".into(),
            ParserError::ExpectedButFound(expected, actual) => {
                format!(
                    "Expected {}, but found {}",
                    lex_set_to_string(src, expected)?,
                    actual.fmt(src)?
                )
            }
            ParserError::ExpectedTermAfter(op, found) => {
                format!(
                    "Expected term after {}, but found {}",
                    op.fmt(src)?,
                    found.fmt(src)?
                )
            }
            ParserError::ExpectedTerm(found) => {
                format!(
                    "Expected a number, a variable or (, but found {}",
                    found.fmt(src)?
                )
            }
            ParserError::InvalidAssignTarget => {
                "Left side of = must be a variable".into()
            }
        };
        Ok(msg)
    }
}

fn lex_set_to_string(src: &Source, set: &[Lex]) -> Result<String, CompilerDisplayError> {
    Ok(set
        .iter()
        .map(|l| l.fmt(src))
        .collect::<Result<Vec<_>, _>>()?
        .join(" or "))
}
