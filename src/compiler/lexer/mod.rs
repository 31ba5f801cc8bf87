use super::CompilerError;

mod error;

pub mod lexer;
pub mod tokens;

pub use error::LexerError;

pub type LexerResult<T> = Result<T, CompilerError<LexerError>>;
