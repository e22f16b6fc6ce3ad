use std::{slice, vec};

use tracing::{debug, instrument};

use crate::{
    cursor::CursorHandle,
    decode::RowDecoder,
    error::{CursorResult, Error},
    exec::step,
};

/// Consumes exactly one remaining row.
///
/// After decoding the row, the cursor is advanced once more to prove that
/// there are no further rows. On success the cursor is thus left exhausted.
#[instrument(level = "debug", skip_all)]
pub fn exactly_one<C, D>(cursor: &mut C, decoder: &D) -> CursorResult<D::Output>
where
    C: CursorHandle,
    D: RowDecoder + ?Sized,
{
    match step::get_next(cursor, decoder)? {
        Some(value) => ensure_end(cursor).map(|()| value),
        None => {
            debug!("expected one row, found none");
            Err(Error::UnexpectedEnd)
        }
    }
}

/// Consumes zero or one remaining row.
///
/// Like [`exactly_one`], a found row is followed by one extra advance that
/// must report exhaustion.
#[instrument(level = "debug", skip_all)]
pub fn at_most_one<C, D>(cursor: &mut C, decoder: &D) -> CursorResult<Option<D::Output>>
where
    C: CursorHandle,
    D: RowDecoder + ?Sized,
{
    match step::get_next(cursor, decoder)? {
        Some(value) => ensure_end(cursor).map(|()| Some(value)),
        None => Ok(None),
    }
}

/// Consumes all remaining rows, of which there must be at least one.
#[instrument(level = "debug", skip_all)]
pub fn at_least_one<C, D>(cursor: &mut C, decoder: &D) -> CursorResult<NonEmpty<D::Output>>
where
    C: CursorHandle,
    D: RowDecoder + ?Sized,
{
    let Some(head) = step::get_next(cursor, decoder)? else {
        debug!("expected at least one row, found none");
        return Err(Error::UnexpectedEnd);
    };
    let tail = all(cursor, decoder)?;
    Ok(NonEmpty { head, tail })
}

/// Consumes all remaining rows.
#[instrument(level = "debug", skip_all)]
pub fn all<C, D>(cursor: &mut C, decoder: &D) -> CursorResult<Vec<D::Output>>
where
    C: CursorHandle,
    D: RowDecoder + ?Sized,
{
    let mut values = Vec::new();
    while let Some(value) = step::get_next(cursor, decoder)? {
        values.push(value);
    }
    debug!(len = values.len(), "drained cursor");
    Ok(values)
}

/// Advances once, failing if a further row exists.
fn ensure_end<C>(cursor: &mut C) -> CursorResult<()>
where
    C: CursorHandle,
{
    if step::next(cursor)? {
        debug!("expected no more rows, found another one");
        return Err(Error::UnexpectedContinuation);
    }
    Ok(())
}

/// An ordered sequence with at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmpty<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmpty<T> {
    /// Constructs a new sequence from its first element and the rest.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        NonEmpty { head, tail }
    }

    /// Returns `None` if `values` is empty.
    pub fn from_vec(values: Vec<T>) -> Option<Self> {
        let mut values = values.into_iter();
        let head = values.next()?;
        Some(NonEmpty {
            head,
            tail: values.collect(),
        })
    }

    pub fn head(&self) -> &T {
        &self.head
    }

    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`. Present for parity with other collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> NonEmptyIter<'_, T> {
        NonEmptyIter {
            head: Some(&self.head),
            tail: self.tail.iter(),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        values.push(self.head);
        values.extend(self.tail);
        values
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(value: NonEmpty<T>) -> Self {
        value.into_vec()
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = NonEmptyIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`NonEmpty`].
pub struct NonEmptyIter<'a, T> {
    head: Option<&'a T>,
    tail: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for NonEmptyIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().or_else(|| self.tail.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.head.is_some()) + self.tail.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for NonEmptyIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cursor::mem::MemCursor, decode::decoder};

    fn ints(values: &[i32]) -> MemCursor {
        MemCursor::from_rows(1, values.iter().map(|&v| [v])).unwrap()
    }

    #[test]
    fn test_exactly_one() {
        let mut cursor = ints(&[42]);
        assert_eq!(exactly_one(&mut cursor, &decoder::<i32>()).unwrap(), 42);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.advances(), 2);

        let err = exactly_one(&mut ints(&[]), &decoder::<i32>()).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEnd));

        let mut cursor = ints(&[1, 2, 3]);
        let err = exactly_one(&mut cursor, &decoder::<i32>()).unwrap_err();
        assert!(matches!(err, Error::UnexpectedContinuation));
        // The proof row was consumed; only the third row remains.
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_at_most_one() {
        assert_eq!(at_most_one(&mut ints(&[]), &decoder::<i32>()).unwrap(), None);
        assert_eq!(
            at_most_one(&mut ints(&[7]), &decoder::<i32>()).unwrap(),
            Some(7)
        );
        let err = at_most_one(&mut ints(&[7, 8]), &decoder::<i32>()).unwrap_err();
        assert!(matches!(err, Error::UnexpectedContinuation));
    }

    #[test]
    fn test_at_least_one() {
        let values = at_least_one(&mut ints(&[1, 2, 3]), &decoder::<i32>()).unwrap();
        assert_eq!(values.head(), &1);
        assert_eq!(values.tail(), &[2, 3]);
        assert_eq!(values.len(), 3);
        assert_eq!(values.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(values.into_vec(), vec![1, 2, 3]);

        let single = at_least_one(&mut ints(&[9]), &decoder::<i32>()).unwrap();
        assert_eq!(single.into_vec(), vec![9]);

        let err = at_least_one(&mut ints(&[]), &decoder::<i32>()).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEnd));
    }

    #[test]
    fn test_all() {
        assert!(all(&mut ints(&[]), &decoder::<i32>()).unwrap().is_empty());
        assert_eq!(
            all(&mut ints(&[3, 1, 2]), &decoder::<i32>()).unwrap(),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn test_decode_error_is_propagated() {
        let mut cursor = MemCursor::from_rows(1, [["not a number"]]).unwrap();
        let err = all(&mut cursor, &decoder::<i32>()).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_non_empty_from_vec() {
        assert_eq!(NonEmpty::<i32>::from_vec(Vec::new()), None);
        let values = NonEmpty::from_vec(vec![1, 2]).unwrap();
        assert_eq!(values, NonEmpty::new(1, vec![2]));
        assert_eq!(Vec::from(values), vec![1, 2]);
    }
}
