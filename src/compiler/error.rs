use super::source::{Source, Span};

/// Represents all errors that are generated from within the Compiler
/// module and its submodules.
///
/// This type captures common metadata which is necessarily present for
/// all errors which are caused by input source code: the [`Span`] of the
/// code that caused the error.  This also handles formatting all error messages
/// with the universal metadata along with the inner metadata.
///
/// The inner error allows metadata which is specific to a submodule within
/// the compiler. E.g., the errors themselves are submodule specific and
/// are stored in the `inner` field.
#[derive(Clone, Debug, PartialEq)]
pub struct CompilerError<IE: CompilerDisplay> {
    span: Span,
    inner: IE,
}

impl<IE> CompilerError<IE>
where
    IE: CompilerDisplay,
{
    pub fn new(span: Span, inner: IE) -> Self {
        CompilerError { span, inner }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn inner(&self) -> &IE {
        &self.inner
    }

    pub fn take(self) -> (Span, IE) {
        (self.span, self.inner)
    }
}

impl<IE> CompilerDisplay for CompilerError<IE>
where
    IE: CompilerDisplay,
{
    /// Renders the error the way it is shown to the user: the line of source
    /// the error is on, then a caret under the offending column followed by
    /// the message.
    fn fmt(&self, src: &Source) -> Result<String, CompilerDisplayError> {
        let msg = self.inner.fmt(src)?;
        let loc = src.locate(self.span.low());
        Ok(format!(
            "{}\n{}^ L{}: {}",
            loc.text,
            " ".repeat(loc.column),
            loc.line,
            msg
        ))
    }
}

/// Formats a compiler type into a human readable message, looking up any
/// source text it refers to.
pub trait CompilerDisplay {
    fn fmt(&self, src: &Source) -> Result<String, CompilerDisplayError>;
}

/// Raised when a value cannot be rendered against the given [`Source`]
#[derive(Clone, Debug, PartialEq)]
pub enum CompilerDisplayError {
    SpanOutOfRange(Span),
}

impl std::fmt::Display for CompilerDisplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompilerDisplayError::SpanOutOfRange(span) => {
                write!(f, "Span {} is outside of the source code", span)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::source::Offset;

    #[derive(Clone, Debug, PartialEq)]
    struct Oops;

    impl CompilerDisplay for Oops {
        fn fmt(&self, _: &Source) -> Result<String, CompilerDisplayError> {
            Ok("oops".into())
        }
    }

    #[test]
    fn caret_under_column() {
        let src = Source::new("1 & 2;");
        let err = CompilerError::new(Span::new(Offset::new(2), Offset::new(3)), Oops);
        assert_eq!(err.fmt(&src).unwrap(), "1 & 2;\n  ^ L1: oops");
    }

    #[test]
    fn caret_on_second_line() {
        let src = Source::new("a = 1;\n  b $ 2;");
        let err = CompilerError::new(Span::new(Offset::new(11), Offset::new(12)), Oops);
        assert_eq!(err.fmt(&src).unwrap(), "  b $ 2;\n    ^ L2: oops");
    }

    #[test]
    fn caret_at_end_of_input() {
        let src = Source::new("1 +");
        let err = CompilerError::new(Span::at(src.high()), Oops);
        assert_eq!(err.fmt(&src).unwrap(), "1 +\n   ^ L1: oops");
    }
}
