/**
 * The Compiler takes the text of a program and converts it into x86-64
 * assembly language.
 *
 * Compilation runs in three stages:
 * 1. The `lexer` splits the source text into tokens.
 * 2. The `parser` converts the tokens into a `Program`: one expression tree
 * per statement plus the table of local variables, each of which is given
 * its own slot in the stack frame.  The parser also rejects assignments to
 * anything that is not a variable.  This is the last stage where a User
 * error can occur.
 * 3. The `Compiler` walks each expression tree and generates stack machine
 * code: every node pushes its value onto the hardware stack.
 *
 * The whole program is lexed and parsed before any code is generated, so an
 * error in the input never produces partial assembly.
 *
 * If any error happens in the code generator, we assume that the error
 * cannot be caused by User input; therefore, it must be a bug in the compiler
 * itself. An error in this stage, then, is always considered critical
 * and unrecoverable, so the policy is to immediately panic from exactly the
 * point the error was first discovered.
 */

/// Returns an `Err` holding a [`CompilerError`] for the given span and
/// stage specific error.
macro_rules! err {
    ($span:expr, $kind:expr) => {
        Err($crate::compiler::CompilerError::new($span, $kind))
    };
}

pub mod ast;
pub mod compiler;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod x86;

mod error;

pub use self::compiler::Compiler;
pub use error::{CompilerDisplay, CompilerDisplayError, CompilerError};
pub use lexer::lexer::Lexer;
pub use parser::parse;
