use crate::{error::CursorResult, value::Value};

pub mod mem;

/// A forward-only handle over a tabular result.
///
/// The handle has at most one current row at a time, which may only be
/// changed through [`CursorHandle::advance`]. Once exhausted, the handle stays
/// exhausted. The position itself is never exposed.
///
/// Handles are owned by the caller; the operations in [`crate::exec`] only
/// borrow them and never call [`CursorHandle::close`].
pub trait CursorHandle {
    /// Moves to the next row. Returns `true` if a new current row is
    /// available.
    fn advance(&mut self) -> CursorResult<bool>;

    /// Returns the number of columns of each row.
    fn column_count(&self) -> usize;

    /// Returns the value of the column at the given 1-based offset of the
    /// current row.
    fn column(&self, offset: usize) -> CursorResult<&Value>;

    /// Releases the underlying resources.
    fn close(&mut self) -> CursorResult<()>;
}

impl<C> CursorHandle for &mut C
where
    C: CursorHandle + ?Sized,
{
    fn advance(&mut self) -> CursorResult<bool> {
        (**self).advance()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn column(&self, offset: usize) -> CursorResult<&Value> {
        (**self).column(offset)
    }

    fn close(&mut self) -> CursorResult<()> {
        (**self).close()
    }
}
