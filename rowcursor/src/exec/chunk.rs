use tracing::{debug, instrument, trace};

use crate::{
    config::MAX_CHUNK_PREALLOC, cursor::CursorHandle, decode::RowDecoder, error::CursorResult,
    exec::step,
};

/// An ordered group of decoded rows fetched by a single [`fetch_chunk`] call.
pub type Batch<A> = Vec<A>;

/// Fetches up to `chunk_size` rows, stopping early if the cursor runs out of
/// rows.
///
/// A batch shorter than `chunk_size` means the cursor is exhausted. A
/// non-positive `chunk_size` yields an empty batch without advancing the
/// cursor at all.
///
/// If a row fails to decode, the error is returned and the rows already
/// decoded in this call are discarded.
#[instrument(level = "debug", skip_all, fields(chunk_size = chunk_size))]
pub fn fetch_chunk<C, D>(
    cursor: &mut C,
    decoder: &D,
    chunk_size: isize,
) -> CursorResult<Batch<D::Output>>
where
    C: CursorHandle,
    D: RowDecoder + ?Sized,
{
    let limit = match usize::try_from(chunk_size) {
        Ok(limit) if limit > 0 => limit,
        _ => {
            trace!("non-positive chunk size, nothing to fetch");
            return Ok(Batch::new());
        }
    };

    let mut batch = Batch::with_capacity(limit.min(MAX_CHUNK_PREALLOC));
    while batch.len() < limit {
        match step::get_next(cursor, decoder)? {
            Some(value) => batch.push(value),
            None => break,
        }
    }

    debug!(len = batch.len(), short = batch.len() < limit, "fetched chunk");
    Ok(batch)
}
