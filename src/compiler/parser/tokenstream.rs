use super::{ParserError, ParserResult};
use crate::compiler::lexer::tokens::{Lex, Token};

/// A forward only cursor over the tokens of a program.  The final token is
/// always [`Lex::Eof`] and the cursor never moves past it, so a parser that
/// runs out of input keeps seeing EOF.
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> TokenStream<'a> {
    /// Returns `None` if `tokens` is not terminated by an EOF token.
    pub fn new(tokens: &'a [Token]) -> Option<TokenStream<'a>> {
        match tokens.last() {
            Some(t) if t.is_eof() => Some(TokenStream { tokens, index: 0 }),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> Token {
        let token = self.tokens[self.index].clone();
        if !token.is_eof() {
            self.index += 1;
        }
        log::trace!("Consumed {}", token);
        token
    }

    pub fn next_if(&mut self, test: &Lex) -> Option<Token> {
        if self.test_if(test) {
            Some(self.next())
        } else {
            None
        }
    }

    pub fn next_if_one_of(&mut self, set: &[Lex]) -> Option<Token> {
        if self.test_if_one_of(set) {
            Some(self.next())
        } else {
            None
        }
    }

    pub fn next_must_be(&mut self, test: &Lex) -> ParserResult<Token> {
        match self.next_if(test) {
            Some(t) => Ok(t),
            None => {
                let found = self.peek();
                err!(
                    found.span,
                    ParserError::ExpectedButFound(vec![*test], found.sym)
                )
            }
        }
    }

    pub fn peek(&self) -> &Token {
        &self.tokens[self.index]
    }

    pub fn at_eof(&self) -> bool {
        self.peek().is_eof()
    }

    pub fn test_if(&self, test: &Lex) -> bool {
        self.peek().token_eq(test)
    }

    pub fn test_if_one_of(&self, set: &[Lex]) -> bool {
        set.iter().any(|l| self.peek().token_eq(l))
    }
}
