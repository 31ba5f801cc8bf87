use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use log::debug;

use crate::compiler::{
    ast::{Program, VarTable},
    lexer::tokens::Token,
    source::Span,
};
use crate::diagnostics::config::TracingConfig;

use super::{statement::statement, tokenstream::TokenStream, ParserError, ParserResult};

/*
    Grammar
    NUMBER := 0-9+
    IDENTIFIER := a-z
    PRIMARY := LPAREN EXPRESSION RPAREN | NUMBER | IDENTIFIER
    UNARY := [+ | -] PRIMARY
    MULTIPLICATIVE := UNARY [(* | /) UNARY]*
    ADDITIVE := MULTIPLICATIVE [(+ | -) MULTIPLICATIVE]*
    RELATIONAL := ADDITIVE [(< | <= | > | >=) ADDITIVE]*
    EQUALITY := RELATIONAL [(== | !=) RELATIONAL]*
    ASSIGNMENT := EQUALITY [= ASSIGNMENT]
    EXPRESSION := ASSIGNMENT
    STATEMENT := EXPRESSION SEMICOLON
    PROGRAM := STATEMENT* EOF

    tokenize - takes a string of text and converts it to a string of tokens
    parse - takes a string of tokens and converts it into a list of statements
*/

static ENABLE_TRACING: AtomicBool = AtomicBool::new(false);
static TRACE_START: AtomicUsize = AtomicUsize::new(0);
static TRACE_END: AtomicUsize = AtomicUsize::new(0);

pub fn set_tracing(config: TracingConfig) {
    let (enable, start, end) = match config {
        TracingConfig::All => (true, 0, 0),
        TracingConfig::After(start) => (true, start, 0),
        TracingConfig::Before(end) => (true, 0, end),
        TracingConfig::Between(start, end) => (true, start, end),
        TracingConfig::Only(line) => (true, line, line),
        TracingConfig::Off => (false, 0, 0),
    };

    ENABLE_TRACING.store(enable, Ordering::SeqCst);
    TRACE_START.store(start, Ordering::SeqCst);
    TRACE_END.store(end, Ordering::SeqCst);
}

/// Returns true if parser tracing is enabled for the given source line.  A
/// bound of 0 means that side of the range is open.
pub(crate) fn should_trace(line: u32) -> bool {
    if !ENABLE_TRACING.load(Ordering::SeqCst) {
        return false;
    }

    let line = line as usize;
    let start = TRACE_START.load(Ordering::SeqCst);
    let end = TRACE_END.load(Ordering::SeqCst);
    (start == 0 || start <= line) && (end == 0 || line <= end)
}

/// The state of a parse: the cursor over the token stream and the table of
/// local variables seen so far.  This is threaded through every grammar
/// function.
pub(super) struct Parser<'a> {
    pub(super) stream: TokenStream<'a>,
    pub(super) vars: VarTable,
}

impl<'a> Parser<'a> {
    pub(super) fn new(stream: TokenStream<'a>) -> Parser<'a> {
        Parser {
            stream,
            vars: VarTable::new(),
        }
    }
}

/// Parses every statement in the token stream.  The stream must end with
/// an EOF token, which is what the lexer produces.
pub fn parse(tokens: &[Token]) -> ParserResult<Program> {
    let stream = match TokenStream::new(tokens) {
        Some(stream) => stream,
        None => {
            let span = tokens.last().map_or(Span::zero(), |t| t.span);
            return err!(span, ParserError::MissingEof);
        }
    };

    let mut p = Parser::new(stream);
    let mut statements = vec![];

    while !p.stream.at_eof() {
        let stmt = statement(&mut p)?;
        debug!("Parsed statement {}: {}", statements.len(), stmt);
        statements.push(stmt);
    }

    debug!(
        "Parsed {} statements using {} variables",
        statements.len(),
        p.vars.len()
    );
    Ok(Program::new(statements, p.vars))
}
