use crate::{
    config::DEFAULT_CHUNK_SIZE,
    cursor::CursorHandle,
    decode::RowDecoder,
    error::CursorResult,
};

pub mod step;

mod chunk;
pub use chunk::*;

mod extract;
pub use extract::*;

mod stream;
pub use stream::*;

/// A typed view over a [`CursorHandle`].
///
/// The extraction methods borrow the handle for the duration of the call. The
/// handle itself, and thus the cursor position, is never exposed; it may only
/// be handed back to its owner through [`RowCursor::into_inner`].
pub struct RowCursor<C> {
    handle: C,
}

impl<C> RowCursor<C>
where
    C: CursorHandle,
{
    pub fn new(handle: C) -> Self {
        RowCursor { handle }
    }

    /// Returns the underlying cursor handle, which is *not* closed.
    pub fn into_inner(self) -> C {
        self.handle
    }

    /// See [`fetch_chunk`].
    pub fn fetch_chunk<D>(
        &mut self,
        decoder: &D,
        chunk_size: isize,
    ) -> CursorResult<Batch<D::Output>>
    where
        D: RowDecoder + ?Sized,
    {
        fetch_chunk(&mut self.handle, decoder, chunk_size)
    }

    /// See [`exactly_one`].
    pub fn exactly_one<D>(&mut self, decoder: &D) -> CursorResult<D::Output>
    where
        D: RowDecoder + ?Sized,
    {
        exactly_one(&mut self.handle, decoder)
    }

    /// See [`at_most_one`].
    pub fn at_most_one<D>(&mut self, decoder: &D) -> CursorResult<Option<D::Output>>
    where
        D: RowDecoder + ?Sized,
    {
        at_most_one(&mut self.handle, decoder)
    }

    /// See [`at_least_one`].
    pub fn at_least_one<D>(&mut self, decoder: &D) -> CursorResult<NonEmpty<D::Output>>
    where
        D: RowDecoder + ?Sized,
    {
        at_least_one(&mut self.handle, decoder)
    }

    /// See [`all`].
    pub fn all<D>(&mut self, decoder: &D) -> CursorResult<Vec<D::Output>>
    where
        D: RowDecoder + ?Sized,
    {
        all(&mut self.handle, decoder)
    }

    /// Streams the remaining rows using [`DEFAULT_CHUNK_SIZE`]. See
    /// [`as_lazy_stream`].
    pub fn stream<D>(&mut self, decoder: D) -> LazyRowStream<&mut C, D>
    where
        D: RowDecoder,
    {
        self.stream_with_chunk_size(decoder, DEFAULT_CHUNK_SIZE)
    }

    /// See [`as_lazy_stream`].
    pub fn stream_with_chunk_size<D>(
        &mut self,
        decoder: D,
        chunk_size: isize,
    ) -> LazyRowStream<&mut C, D>
    where
        D: RowDecoder,
    {
        as_lazy_stream(&mut self.handle, decoder, chunk_size)
    }

    /// See [`fetch_chunks`].
    pub fn chunks<D>(&mut self, decoder: D, chunk_size: isize) -> Chunks<&mut C, D>
    where
        D: RowDecoder,
    {
        fetch_chunks(&mut self.handle, decoder, chunk_size)
    }

    /// Decodes every remaining row, passing each one to the callback.
    ///
    /// Cursor and decoding failures are returned as the outer error. If the
    /// callback fails, no further row is fetched and its error is returned as
    /// the inner result.
    pub fn process<D, E, F>(&mut self, decoder: &D, mut f: F) -> CursorResult<Result<(), E>>
    where
        D: RowDecoder + ?Sized,
        F: FnMut(D::Output) -> Result<(), E>,
    {
        while let Some(item) = step::get_next(&mut self.handle, decoder)? {
            if let error @ Err(_) = f(item) {
                return Ok(error);
            }
        }
        Ok(Ok(()))
    }
}
