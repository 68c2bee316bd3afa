//! # Error Types

/// Errors from padding and encoding operations.
#[derive(Debug, thiserror::Error)]
pub enum PadError {
    /// Padding policy name is not one of `end`, `symmetric` or `dual`.
    #[error("undefined padding type: {0:?}; must be one of 'end', 'symmetric', or 'dual'")]
    InvalidPolicy(String),

    /// Encoding name is not one of `onehot` or `label`.
    #[error("undefined encoding type: {0:?}; must be one of 'onehot' or 'label'")]
    InvalidEncoding(String),

    /// Target length is zero or could not be parsed.
    #[error("invalid pad length: {0:?}; must be 'max' or a positive integer")]
    InvalidPadLength(String),

    /// The pad unit is the empty string.
    #[error("pad string must not be empty")]
    EmptyPadUnit,

    /// Encoder input rows do not share one length.
    #[error("string sequences should be of the same length, found lengths {lengths:?}")]
    UnequalLengths {
        /// The distinct row lengths observed, sorted.
        lengths: Vec<usize>,
    },

    /// A symbol is missing from a fixed alphabet.
    #[error("symbol {symbol:?} in row {row} is not in the alphabet")]
    UnknownSymbol {
        /// The offending symbol.
        symbol: char,
        /// Index of the row it was found in.
        row: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure writing an `.npy` file.
    #[error(transparent)]
    Npy(#[from] ndarray_npy::WriteNpyError),
}

/// Result type for padding and encoding operations.
pub type Result<T> = core::result::Result<T, PadError>;
