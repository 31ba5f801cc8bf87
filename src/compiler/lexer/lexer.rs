// Lexer - converts the source text into the sequence of tokens which is
// consumed by the parser
use log::debug;

use crate::compiler::{
    source::{Offset, Source, SourceChar, Span},
    CompilerError,
};

use super::LexerResult;
use super::{
    tokens::{Lex, Token},
    LexerError,
};
use Lex::*;

/// Operators ordered so that every two character operator is tried before
/// any single character operator that it starts with.
const OPERATORS: [(&str, Lex); 14] = [
    ("==", Eq),
    ("!=", NEq),
    ("<=", LsEq),
    (">=", GrEq),
    ("+", Add),
    ("-", Minus),
    ("*", Mul),
    ("/", Div),
    ("(", LParen),
    (")", RParen),
    ("<", Ls),
    (">", Gr),
    ("=", Assign),
    (";", Semicolon),
];

struct LexerBranch<'a, 's> {
    lexer: &'a mut Lexer<'s>,
    index: usize,
}

impl<'a, 's> LexerBranch<'a, 's> {
    fn from(l: &'a mut Lexer<'s>) -> LexerBranch<'a, 's> {
        LexerBranch {
            index: l.index,
            lexer: l,
        }
    }

    /// Merges this branch back into its source Lexer.  Merging has the effect
    /// of accepting the current branch as correct and updating the source lexer
    /// to match the cursor state of the branch.  Returns the span covered by
    /// the branch, or `None` if the branch did not consume anything.
    fn merge(mut self) -> Option<Span> {
        let span = self.span();
        if span.is_some() {
            self.lexer.index = self.index;
        }
        span
    }

    /// The span from where the source lexer is pointing up to where the
    /// branch cursor currently is.
    fn span(&self) -> Option<Span> {
        let start = self.lexer.index;
        let stop = self.index;

        if start == stop {
            None
        } else {
            let low = self.lexer.chars[start].offset();
            let high = self.lexer.offset_at(stop);
            Some(Span::new(low, high))
        }
    }

    /// Advances the cursor one character and returns the character that was
    /// pointed to by the cursor before the advance.  Returns None if the cursor
    /// was already at the end of the stream.
    fn next(&mut self) -> Option<SourceChar> {
        let c = self.peek();
        if c.is_some() {
            self.index += 1;
        }
        c
    }

    /// Will advance the cursor if the stream after the cursor starts with the
    /// given test string.  If the remaining stream does not start with the
    /// test string then the cursor is not advanced.
    fn next_if_word(&mut self, t: &str) -> bool {
        if self.peek_ifn(t) {
            self.index += t.chars().count();
            true
        } else {
            false
        }
    }

    /// Returns the character pointed at by the cursor which is the next
    /// character in the stream.
    fn peek(&self) -> Option<SourceChar> {
        if self.index < self.lexer.chars.len() {
            Some(self.lexer.chars[self.index])
        } else {
            None
        }
    }

    /// Checks if the character stream from the current cursor starts with
    /// the given test string, without advancing the cursor.
    fn peek_ifn(&self, t: &str) -> bool {
        let mut i = self.index;
        for tc in t.chars() {
            if i >= self.lexer.chars.len() || self.lexer.chars[i] != tc {
                return false;
            }
            i += 1;
        }
        true
    }
}

pub struct Lexer<'a> {
    chars: &'a Source,
    index: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a Source) -> Lexer<'a> {
        Lexer {
            chars: text,
            index: 0,
            line: 1,
        }
    }

    /// Converts the source text into a vector of tokens.  The final token is
    /// always [`Lex::Eof`].  Stops at the first character which cannot start a
    /// token.
    pub fn tokenize(&mut self) -> LexerResult<Vec<Token>> {
        let mut tokens = vec![];

        loop {
            // Consume any whitespace before attempting to lex the next token
            self.consume_whitespace();

            if self.index >= self.chars.len() {
                break;
            }

            let token = self.next_token()?;
            debug!("Lexed {} at {}", token, token.span);
            tokens.push(token);
        }

        tokens.push(Token::new(Eof, Span::at(self.chars.high()), self.line));
        Ok(tokens)
    }

    /// Attempt to lex the token which immediately follows from where the lexer
    /// cursor is currently pointing.
    fn next_token(&mut self) -> LexerResult<Token> {
        if let Some(t) = self.consume_integer()? {
            return Ok(t);
        }

        if let Some(t) = self.consume_identifier() {
            return Ok(t);
        }

        if let Some(t) = self.consume_operator() {
            return Ok(t);
        }

        // Nothing can be lexed from the current character
        let c = self.chars[self.index];
        err!(self.current_char_span(), LexerError::InvalidCharacter(c.char()))
    }

    fn consume_whitespace(&mut self) {
        while self.index < self.chars.len() && self.chars[self.index].is_whitespace() {
            if self.chars[self.index] == '\n' {
                self.line += 1;
            }
            self.index += 1;
        }
    }

    fn consume_integer(&mut self) -> LexerResult<Option<Token>> {
        let line = self.line;
        let mut branch = LexerBranch::from(self);

        // read until a non-digit is hit
        while branch.peek().map_or(false, |c| c.is_ascii_digit()) {
            branch.next();
        }

        match branch.merge() {
            None => Ok(None),
            Some(span) => {
                let digits = self
                    .chars
                    .text_in_span(span)
                    .expect("Span of a lexed integer must lie within the source");
                let value = digits
                    .parse::<i64>()
                    .map_err(|e| CompilerError::new(span, LexerError::from(e)))?;
                Ok(Some(Token::new(Integer(value), span, line)))
            }
        }
    }

    /// Identifiers are a single lower case letter.  A run of letters will be
    /// lexed as a run of identifiers.
    fn consume_identifier(&mut self) -> Option<Token> {
        let line = self.line;
        let mut branch = LexerBranch::from(self);

        let id = match branch.peek() {
            Some(c) if c.is_ascii_lowercase() => c.char(),
            _ => return None,
        };
        branch.next();

        branch
            .merge()
            .map(|span| Token::new(Identifier(id), span, line))
    }

    fn consume_operator(&mut self) -> Option<Token> {
        let line = self.line;
        let mut branch = LexerBranch::from(self);

        let sym = OPERATORS
            .iter()
            .find(|(op, _)| branch.next_if_word(op))
            .map(|(_, sym)| *sym)?;

        branch.merge().map(|span| Token::new(sym, span, line))
    }

    /// Returns the span covered by the character the lexer cursor is currently
    /// pointing at.
    fn current_char_span(&self) -> Span {
        Span::new(
            self.offset_at(self.index),
            self.offset_at(self.index + 1),
        )
    }

    /// The byte offset of the character at `index`, or the end of the source
    /// if `index` is past the last character.
    fn offset_at(&self, index: usize) -> Offset {
        if index < self.chars.len() {
            self.chars[index].offset()
        } else {
            self.chars.high()
        }
    }
}
