//! Typed, chunked extraction of rows from a forward-only result cursor.
//!
//! A [`cursor::CursorHandle`] is consumed through a [`decode::RowDecoder`]
//! either one row at a time, with a cardinality requirement (see
//! [`exec::exactly_one`], [`exec::at_most_one`], [`exec::at_least_one`] and
//! [`exec::all`]), in bounded batches ([`exec::fetch_chunk`]), or as a lazy
//! stream ([`exec::as_lazy_stream`]).

pub mod error;

pub mod config;
pub mod value;

pub mod cursor;
pub mod decode;

pub mod exec;

pub use exec::RowCursor;
