use std::vec;

use futures_util::stream;
use tracing::debug;

use crate::{
    cursor::CursorHandle,
    decode::RowDecoder,
    error::CursorResult,
    exec::chunk::{fetch_chunk, Batch},
};

/// Returns an iterator over the batches fetched at `chunk_size` rows each.
///
/// The iterator ends after the first batch shorter than `chunk_size`; empty
/// batches are never yielded. A non-positive `chunk_size` yields nothing and
/// never advances the cursor.
pub fn fetch_chunks<C, D>(cursor: C, decoder: D, chunk_size: isize) -> Chunks<C, D>
where
    C: CursorHandle,
    D: RowDecoder,
{
    Chunks {
        cursor,
        decoder,
        chunk_size,
        state: State::Fetching,
        fetched: 0,
    }
}

/// Returns a lazy stream of the remaining rows, fetched `chunk_size` rows at
/// a time.
///
/// The stream can't be restarted; a new stream must be issued over the
/// cursor. Dropping the stream early leaves the cursor right after the last
/// fetched chunk. The cursor is never closed.
pub fn as_lazy_stream<C, D>(cursor: C, decoder: D, chunk_size: isize) -> LazyRowStream<C, D>
where
    C: CursorHandle,
    D: RowDecoder,
{
    LazyRowStream {
        chunks: fetch_chunks(cursor, decoder, chunk_size),
        current: Batch::new().into_iter(),
    }
}

/// See [`fetch_chunks`].
pub struct Chunks<C, D> {
    cursor: C,
    decoder: D,
    chunk_size: isize,
    state: State,
    fetched: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Fetching,
    Exhausted,
}

impl<C, D> Chunks<C, D> {
    /// Returns the number of rows fetched so far.
    pub fn fetched(&self) -> usize {
        self.fetched
    }

    /// Checks if no further chunk will be fetched.
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    /// Returns the underlying cursor, which is left where the last fetch
    /// stopped.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C, D> Iterator for Chunks<C, D>
where
    C: CursorHandle,
    D: RowDecoder,
{
    type Item = CursorResult<Batch<D::Output>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == State::Exhausted {
            return None;
        }

        let batch = match fetch_chunk(&mut self.cursor, &self.decoder, self.chunk_size) {
            Ok(batch) => batch,
            Err(error) => {
                debug!(fetched = self.fetched, "stream failed");
                self.state = State::Exhausted;
                return Some(Err(error));
            }
        };
        self.fetched += batch.len();

        // `len` is bounded by a positive `chunk_size` here, so it fits.
        if batch.is_empty() || (batch.len() as isize) < self.chunk_size {
            debug!(fetched = self.fetched, "stream exhausted");
            self.state = State::Exhausted;
        }
        if batch.is_empty() {
            return None;
        }
        Some(Ok(batch))
    }
}

/// See [`as_lazy_stream`].
///
/// Yields decoded rows one at a time, holding at most one chunk in memory. A
/// decode error is yielded once, after which the stream ends.
pub struct LazyRowStream<C, D>
where
    D: RowDecoder,
{
    chunks: Chunks<C, D>,
    current: vec::IntoIter<D::Output>,
}

impl<C, D> LazyRowStream<C, D>
where
    C: CursorHandle,
    D: RowDecoder,
{
    /// Adapts this stream into a [`futures_util::Stream`]. Each poll pulls
    /// from the cursor synchronously; nothing else is buffered.
    pub fn into_async(self) -> stream::Iter<Self> {
        stream::iter(self)
    }
}

impl<C, D> LazyRowStream<C, D>
where
    D: RowDecoder,
{
    /// Returns the number of rows fetched from the cursor so far, including
    /// the ones still waiting in the current chunk.
    pub fn fetched(&self) -> usize {
        self.chunks.fetched()
    }

    /// Returns the underlying cursor. Rows of the current chunk which were
    /// not yet pulled are dropped.
    pub fn into_inner(self) -> C {
        self.chunks.into_inner()
    }
}

impl<C, D> Iterator for LazyRowStream<C, D>
where
    C: CursorHandle,
    D: RowDecoder,
{
    type Item = CursorResult<D::Output>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                return Some(Ok(value));
            }
            match self.chunks.next()? {
                Ok(batch) => self.current = batch.into_iter(),
                Err(error) => return Some(Err(error)),
            }
        }
    }
}
