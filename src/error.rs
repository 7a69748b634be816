use thiserror::Error;

/// Top-level error type for the planar crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised when constructing or accessing vectors and arrays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("expected a sequence of {expected} elements, got {found}")]
    InvalidArity { expected: usize, found: usize },

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised when text does not match the vector or array grammar.
///
/// Every variant carries the byte offset in the input where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected '{expected}' at offset {offset}, found '{found}'")]
    UnexpectedCharacter {
        expected: char,
        found: char,
        offset: usize,
    },

    #[error("expected '{expected}' at offset {offset}, found end of input")]
    UnexpectedEnd { expected: char, offset: usize },

    #[error("invalid number \"{text}\" at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("number \"{text}\" at offset {offset} is outside the representable range")]
    OutOfRange { text: String, offset: usize },

    #[error("unexpected trailing characters at offset {offset}")]
    TrailingCharacters { offset: usize },
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
