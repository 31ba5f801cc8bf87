use crate::compiler::{ast::Expression, lexer::tokens::Lex};

use super::{expression::expression, parser::Parser, ParserResult};

pub(super) fn statement(p: &mut Parser) -> ParserResult<Expression> {
    trace!(p);
    let exp = expression(p)?;
    p.stream.next_must_be(&Lex::Semicolon)?;
    Ok(exp)
}
