pub mod cli;
pub mod compiler;
pub mod diagnostics;

pub use cli::*;
