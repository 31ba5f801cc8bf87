//! Represents the contents of a unit of source code: either the text given
//! on the command line or the contents of an input file.

use std::ops::Index;

use super::{Offset, SourceChar, Span};

/// A compilation unit
pub struct Source {
    /// The source text exactly as it was given to the compiler.
    text: String,

    /// Every character of `text` joined with its byte offset.
    chars: Vec<SourceChar>,
}

/// Where an [`Offset`] falls within the source, in terms a human can use to
/// find it.
#[derive(Debug, PartialEq)]
pub struct Location<'a> {
    /// 1 based line number
    pub line: u32,

    /// Number of characters on the line before the offset
    pub column: usize,

    /// The full text of the line, without its line break
    pub text: &'a str,
}

impl Source {
    pub fn new(text: &str) -> Source {
        let chars = text
            .char_indices()
            .map(|(i, c)| SourceChar::new(Offset::new(i as u32), c))
            .collect();

        Source {
            text: text.into(),
            chars,
        }
    }

    /// Number of characters (not bytes) in the source.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The offset one past the final byte of the source.
    pub fn high(&self) -> Offset {
        Offset::new(self.text.len() as u32)
    }

    /// Returns the text covered by the given span, or `None` if the span does
    /// not lie within this source.
    pub fn text_in_span(&self, span: Span) -> Option<&str> {
        self.text.get(span.low().as_usize()..span.high().as_usize())
    }

    /// Converts an offset into the line and column that it falls on.  Offsets
    /// past the end of the source are clamped to the end.
    pub fn locate(&self, o: Offset) -> Location {
        let pos = o.as_usize().min(self.text.len());

        let line_start = self.text[..pos].rfind('\n').map_or(0, |nl| nl + 1);
        let line_end = self.text[pos..]
            .find('\n')
            .map_or(self.text.len(), |nl| pos + nl);

        let line = self.text[..line_start].matches('\n').count() as u32 + 1;
        let column = self.text[line_start..pos].chars().count();
        let text = self.text[line_start..line_end].trim_end_matches('\r');

        Location { line, column, text }
    }
}

impl Index<usize> for Source {
    type Output = SourceChar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chars[index]
    }
}
