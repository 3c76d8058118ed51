use std::{
    fmt::{self, Display},
    io,
};

use crate::tag::Tag;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of failure that occurred, independent of where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// End of stream reached while a declared field still had bytes to
    /// read.
    TruncatedInput,
    /// A tag byte outside `0x00..=0x0C` was encountered where a tag was
    /// expected.
    UnknownTag,
    /// A `0x00` (End) byte was encountered where a tag in `0x01..=0x0C`
    /// was required.
    UnexpectedEnd,
    /// A decompressor reported a framing error, or a `String` payload was
    /// not valid UTF-8.
    CorruptInput,
    /// A typed accessor or typed list view asked for a tag that does not
    /// match the node's actual tag.
    TypeMismatch,
    /// Indexed or keyed access went past the end of a `List` or missed a
    /// `Compound` key.
    OutOfRange,
    /// The underlying byte source reported an OS-level error unrelated to
    /// reaching end of stream.
    IoError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::TruncatedInput => "truncated input",
            ErrorKind::UnknownTag => "unknown tag",
            ErrorKind::UnexpectedEnd => "unexpected end tag",
            ErrorKind::CorruptInput => "corrupt input",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::IoError => "I/O error",
        };
        f.write_str(name)
    }
}

/// A parse or navigation failure: a [`ErrorKind`] plus a short context
/// string identifying what was being attempted when the fault was
/// detected.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    context: String,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }

    pub(crate) fn truncated(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::TruncatedInput, context)
    }

    pub(crate) fn unknown_tag(byte: u8) -> Self {
        Self::new(ErrorKind::UnknownTag, format!("tag byte 0x{byte:02X}"))
    }

    pub(crate) fn unexpected_end(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnexpectedEnd, context)
    }

    pub(crate) fn corrupt(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::CorruptInput, context)
    }

    pub(crate) fn type_mismatch(expected: Tag, actual: Tag) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("expected {expected} tag but found {actual}"),
        )
    }

    pub(crate) fn out_of_range(context: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfRange, context)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        match value.kind() {
            io::ErrorKind::UnexpectedEof => Error::new(ErrorKind::TruncatedInput, value.to_string()),
            io::ErrorKind::InvalidData => Error::new(ErrorKind::CorruptInput, value.to_string()),
            _ => Error::new(ErrorKind::IoError, value.to_string()),
        }
    }
}
