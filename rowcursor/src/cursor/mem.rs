use std::vec;

use tracing::{error, trace};

use crate::{
    cursor::CursorHandle,
    error::{CursorResult, DecodeError, Error},
    value::Value,
};

/// An in-memory cursor over an owned list of rows.
///
/// Behaves like a transport-backed cursor: it starts before the first row,
/// moves forward only, and stays exhausted after the last row.
pub struct MemCursor {
    column_count: usize,
    rows: vec::IntoIter<Vec<Value>>,
    current: Option<Vec<Value>>,
    state: State,
    advances: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    BeforeFirst,
    OnRow,
    Exhausted,
    Closed,
}

impl MemCursor {
    /// Constructs a new cursor over `rows`, each of which must have exactly
    /// `column_count` columns.
    pub fn new(column_count: usize, rows: Vec<Vec<Value>>) -> CursorResult<Self> {
        if let Some(index) = rows.iter().position(|row| row.len() != column_count) {
            error!(index, column_count, "row arity doesn't match column count");
            return Err(Error::Cursor(
                format!("row {index} doesn't have {column_count} columns").into(),
            ));
        }
        Ok(MemCursor {
            column_count,
            rows: rows.into_iter(),
            current: None,
            state: State::BeforeFirst,
            advances: 0,
        })
    }

    /// Constructs a new cursor from rows of anything convertible to [`Value`].
    pub fn from_rows<R, V>(column_count: usize, rows: R) -> CursorResult<Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::new(column_count, rows)
    }

    /// Returns the number of times [`CursorHandle::advance`] has been called
    /// on this cursor, including the calls that reported exhaustion.
    pub fn advances(&self) -> u64 {
        self.advances
    }

    /// Returns the number of rows not yet visited.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }

    /// Checks if the cursor went past its last row.
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }
}

impl CursorHandle for MemCursor {
    fn advance(&mut self) -> CursorResult<bool> {
        match self.state {
            State::Closed => return Err(Error::CursorClosed),
            State::Exhausted => {
                self.advances += 1;
                return Ok(false);
            }
            State::BeforeFirst | State::OnRow => {}
        }

        self.advances += 1;
        self.current = self.rows.next();
        if self.current.is_some() {
            self.state = State::OnRow;
            Ok(true)
        } else {
            trace!(advances = self.advances, "no more rows");
            self.state = State::Exhausted;
            Ok(false)
        }
    }

    fn column_count(&self) -> usize {
        self.column_count
    }

    fn column(&self, offset: usize) -> CursorResult<&Value> {
        let row = match (&self.state, &self.current) {
            (State::Closed, _) => return Err(Error::CursorClosed),
            (State::OnRow, Some(row)) => row,
            _ => return Err(DecodeError::NoCurrentRow.into()),
        };
        if offset == 0 {
            return Err(DecodeError::InvalidOffset.into());
        }
        row.get(offset - 1).ok_or_else(|| {
            DecodeError::ColumnOutOfBounds {
                offset,
                arity: self.column_count,
            }
            .into()
        })
    }

    fn close(&mut self) -> CursorResult<()> {
        self.state = State::Closed;
        self.current = None;
        Ok(())
    }
}
