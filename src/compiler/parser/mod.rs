use super::CompilerError;

/// Prints the name of the grammar function being entered along with the
/// token the parser is currently looking at, when parser tracing is enabled.
macro_rules! trace {
    ($p:expr) => {{
        let token = $p.stream.peek();
        if $crate::compiler::parser::should_trace(token.line) {
            eprintln!("{} <- {}", ::stdext::function_name!(), token)
        }
    }};
}

mod error;
mod expression;
mod statement;
mod tests;
mod tokenstream;

pub mod parser;

pub use error::ParserError;
pub use parser::{parse, set_tracing};
pub(crate) use parser::should_trace;

pub type ParserResult<T> = Result<T, CompilerError<ParserError>>;
