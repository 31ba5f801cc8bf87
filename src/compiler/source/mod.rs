//! This module abstracts out the source code from which the compiler derives
//! its input data.  The [`Source`] type owns the program text and provides a
//! common way to reference and retrieve the code that a token or syntax node
//! was built from.

use std::{
    fmt::{Display, Write},
    ops::AddAssign,
};

use serde::Serialize;

mod source;
mod span;

pub use source::{Location, Source};
pub use span::Span;

/// Represents a single char from the source code.  This includes the character
/// and the byte offset of the character within the source text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceChar {
    offset: Offset,
    c: char,
}

impl SourceChar {
    pub fn new(o: Offset, c: char) -> SourceChar {
        SourceChar { c, offset: o }
    }

    pub fn char(&self) -> char {
        self.c
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn is_ascii_digit(&self) -> bool {
        self.c.is_ascii_digit()
    }

    pub fn is_ascii_lowercase(&self) -> bool {
        self.c.is_ascii_lowercase()
    }

    pub fn is_whitespace(&self) -> bool {
        self.c.is_whitespace()
    }
}

impl PartialEq<char> for SourceChar {
    fn eq(&self, other: &char) -> bool {
        self.c == *other
    }
}

impl Display for SourceChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.char())
    }
}

/// A byte offset into the source text.  Every token and syntax node refers
/// back to the code it came from through a pair of these (see [`Span`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Offset(u32);

impl Offset {
    pub fn new(o: u32) -> Offset {
        Offset(o)
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl AddAssign<u32> for Offset {
    fn add_assign(&mut self, rhs: u32) {
        self.0 += rhs
    }
}

impl Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
