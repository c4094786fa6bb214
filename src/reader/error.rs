use thiserror::Error;

#[doc = r#"
A set of errors that can occur while reading chunks out of a blob
"#]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReaderErrorKind {
    /// The bytes at the position do not carry the expected chunk tag.
    #[error("Expected a {} tag", String::from_utf8_lossy(.expected))]
    TagMismatch {
        /// The tag the caller expected
        expected: [u8; 4],
    },
    /// Reading out of bounds.
    #[error("Read out of bounds!")]
    OutOfBounds,
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }
    /// True if out of bounds or unexpected end of the blob
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::OutOfBounds)
    }
    /// True if a chunk parser was pointed at the wrong tag
    pub const fn is_tag_mismatch(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::TagMismatch { .. })
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Create a new tag mismatch error
    pub const fn tag_mismatch(position: usize, expected: [u8; 4]) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::TagMismatch { expected },
        }
    }

    /// Create a new out of bounds error
    pub const fn oob(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::OutOfBounds,
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;
