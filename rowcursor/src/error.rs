use std::borrow::Cow;

pub type CursorResult<T, E = Error> = Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A row was required but the cursor had none left.
    #[error("unexpected end of result set; expected at least one more row")]
    UnexpectedEnd,

    /// At most one row was required but the cursor had a further row.
    #[error("unexpected continuation of result set; expected no more rows")]
    UnexpectedContinuation,

    /// The decoder could not map the current row to the requested shape.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The cursor was advanced after it had been closed by its owner.
    #[error("cursor is closed")]
    CursorClosed,

    /// A failure reported by the underlying cursor transport.
    #[error("cursor error: {0}")]
    Cursor(Cow<'static, str>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A column was read while the cursor wasn't positioned at a row.
    #[error("no current row")]
    NoCurrentRow,

    /// Column offsets are 1-based.
    #[error("invalid column offset 0")]
    InvalidOffset,

    /// The shape is wider than the row.
    #[error("column {offset} out of bounds for row of arity {arity}")]
    ColumnOutOfBounds { offset: usize, arity: usize },

    /// The column holds a value of another type.
    #[error("unexpected type for column {offset}: expected `{expected}`, but found `{actual}`")]
    TypeMismatch {
        offset: usize,
        expected: &'static str,
        actual: &'static str,
    },

    /// A non-nullable shape met a null column.
    #[error("unexpected null in column {offset}")]
    UnexpectedNull { offset: usize },
}

impl Error {
    /// Returns `true` if the error is a cardinality violation, i.e., either
    /// [`Error::UnexpectedEnd`] or [`Error::UnexpectedContinuation`].
    pub fn is_cardinality(&self) -> bool {
        matches!(self, Error::UnexpectedEnd | Error::UnexpectedContinuation)
    }
}
