use tracing::trace;

use crate::{config::FIRST_COLUMN, cursor::CursorHandle, decode::RowDecoder, error::CursorResult};

/// Advances the cursor by one row. Returns `true` if a new current row is
/// available.
pub fn next<C>(cursor: &mut C) -> CursorResult<bool>
where
    C: CursorHandle,
{
    let available = cursor.advance()?;
    trace!(available, "advanced cursor");
    Ok(available)
}

/// Decodes the current row, starting at the first column.
pub fn get<C, D>(cursor: &C, decoder: &D) -> CursorResult<D::Output>
where
    C: CursorHandle,
    D: RowDecoder + ?Sized,
{
    decoder.decode_at(cursor, FIRST_COLUMN)
}

/// Advances the cursor once and decodes the new current row, if any.
pub fn get_next<C, D>(cursor: &mut C, decoder: &D) -> CursorResult<Option<D::Output>>
where
    C: CursorHandle,
    D: RowDecoder + ?Sized,
{
    if next(cursor)? {
        get(cursor, decoder).map(Some)
    } else {
        Ok(None)
    }
}
