use std::{fmt, marker::PhantomData};

use crate::{
    cursor::CursorHandle,
    error::{CursorResult, DecodeError, Error},
    value::{TypeId, Value},
};

mod impls;

/// A row shape; i.e., a type that may be decoded from a contiguous range of
/// columns of the cursor's current row.
///
/// Composite shapes (such as tuples) decode each of their fields at
/// increasing offsets, where each field takes [`Decode::WIDTH`] columns.
pub trait Decode: Sized {
    /// The number of columns this shape takes.
    const WIDTH: usize;

    /// Decodes the value starting at the given 1-based column offset. Must not
    /// advance the cursor.
    fn decode_at(cursor: &dyn CursorHandle, offset: usize) -> CursorResult<Self>;
}

/// A row decoding capability, which is passed to every extraction operation.
///
/// Implementations must be total over a valid current row and must never
/// advance the cursor.
pub trait RowDecoder {
    /// The decoded value type.
    type Output;

    /// Returns the number of columns read by this decoder.
    fn width(&self) -> usize;

    /// Decodes a value starting at the given 1-based column offset of the
    /// cursor's current row.
    fn decode_at(&self, cursor: &dyn CursorHandle, offset: usize) -> CursorResult<Self::Output>;

    /// Returns a decoder that applies `f` to each decoded value.
    fn map<F, B>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
    {
        Map { inner: self, f }
    }

    /// Returns a decoder for the pair of this decoder's value and `other`'s,
    /// which starts reading right after this decoder's last column.
    fn and<D>(self, other: D) -> Product<Self, D>
    where
        Self: Sized,
        D: RowDecoder,
    {
        Product {
            left: self,
            right: other,
        }
    }
}

impl<D> RowDecoder for &D
where
    D: RowDecoder + ?Sized,
{
    type Output = D::Output;

    fn width(&self) -> usize {
        (**self).width()
    }

    fn decode_at(&self, cursor: &dyn CursorHandle, offset: usize) -> CursorResult<Self::Output> {
        (**self).decode_at(cursor, offset)
    }
}

/// Returns a decoder for the given [`Decode`] shape.
pub fn decoder<T: Decode>() -> Typed<T> {
    Typed(PhantomData)
}

/// Returns a decoder backed by the given function, which reads `width`
/// columns.
pub fn from_fn<F, A>(width: usize, f: F) -> FromFn<F>
where
    F: Fn(&dyn CursorHandle, usize) -> CursorResult<A>,
{
    FromFn { width, f }
}

/// See [`decoder`].
pub struct Typed<T>(PhantomData<fn() -> T>);

impl<T: Decode> RowDecoder for Typed<T> {
    type Output = T;

    fn width(&self) -> usize {
        T::WIDTH
    }

    fn decode_at(&self, cursor: &dyn CursorHandle, offset: usize) -> CursorResult<T> {
        T::decode_at(cursor, offset)
    }
}

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Typed<T> {}

impl<T> fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Typed<{}>", std::any::type_name::<T>())
    }
}

/// See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    width: usize,
    f: F,
}

impl<F, A> RowDecoder for FromFn<F>
where
    F: Fn(&dyn CursorHandle, usize) -> CursorResult<A>,
{
    type Output = A;

    fn width(&self) -> usize {
        self.width
    }

    fn decode_at(&self, cursor: &dyn CursorHandle, offset: usize) -> CursorResult<A> {
        (self.f)(cursor, offset)
    }
}

/// See [`RowDecoder::map`].
#[derive(Clone)]
pub struct Map<D, F> {
    inner: D,
    f: F,
}

impl<D, F, B> RowDecoder for Map<D, F>
where
    D: RowDecoder,
    F: Fn(D::Output) -> B,
{
    type Output = B;

    fn width(&self) -> usize {
        self.inner.width()
    }

    fn decode_at(&self, cursor: &dyn CursorHandle, offset: usize) -> CursorResult<B> {
        self.inner.decode_at(cursor, offset).map(&self.f)
    }
}

/// See [`RowDecoder::and`].
#[derive(Clone)]
pub struct Product<L, R> {
    left: L,
    right: R,
}

impl<L, R> RowDecoder for Product<L, R>
where
    L: RowDecoder,
    R: RowDecoder,
{
    type Output = (L::Output, R::Output);

    fn width(&self) -> usize {
        self.left.width() + self.right.width()
    }

    fn decode_at(&self, cursor: &dyn CursorHandle, offset: usize) -> CursorResult<Self::Output> {
        let left = self.left.decode_at(cursor, offset)?;
        let right = self.right.decode_at(cursor, offset + self.left.width())?;
        Ok((left, right))
    }
}

/// Reads the column at `offset`, failing on nulls.
fn non_null(cursor: &dyn CursorHandle, offset: usize) -> CursorResult<&Value> {
    match cursor.column(offset)? {
        Value::Null => Err(DecodeError::UnexpectedNull { offset }.into()),
        value => Ok(value),
    }
}

fn mismatch(offset: usize, expected: TypeId, actual: &Value) -> Error {
    DecodeError::TypeMismatch {
        offset,
        expected: expected.name(),
        actual: actual.type_id().name(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::mem::MemCursor;

    fn positioned(row: Vec<Value>) -> MemCursor {
        let mut cursor = MemCursor::new(row.len(), vec![row]).unwrap();
        assert!(cursor.advance().unwrap());
        cursor
    }

    #[test]
    fn test_tuple_decodes_at_increasing_offsets() {
        let cursor = positioned(vec!["ARE".into(), 2441000_i32.into(), true.into()]);
        let value = decoder::<(String, i32, bool)>()
            .decode_at(&cursor, 1)
            .unwrap();
        assert_eq!(value, ("ARE".to_owned(), 2441000, true));

        let tail = decoder::<(i32, bool)>().decode_at(&cursor, 2).unwrap();
        assert_eq!(tail, (2441000, true));
    }

    #[test]
    fn test_product_and_map() {
        let cursor = positioned(vec!["GBR".into(), 59623400_i32.into()]);
        let dec = decoder::<String>()
            .and(decoder::<i32>())
            .map(|(code, pop)| format!("{code}:{pop}"));
        assert_eq!(dec.width(), 2);
        assert_eq!(dec.decode_at(&cursor, 1).unwrap(), "GBR:59623400");
    }

    #[test]
    fn test_from_fn_reads_raw_columns() {
        let cursor = positioned(vec![1_i32.into(), 2_i32.into()]);
        let sum = from_fn(2, |cursor, offset| {
            let a = i32::decode_at(cursor, offset)?;
            let b = i32::decode_at(cursor, offset + 1)?;
            Ok(a + b)
        });
        assert_eq!(sum.decode_at(&cursor, 1).unwrap(), 3);
    }

    #[test]
    fn test_type_mismatch() {
        let cursor = positioned(vec!["ARE".into()]);
        let err = decoder::<i32>().decode_at(&cursor, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::TypeMismatch {
                offset: 1,
                expected: "int",
                actual: "text",
            })
        ));
    }

    #[test]
    fn test_arity_mismatch() {
        let cursor = positioned(vec!["ARE".into()]);
        let err = decoder::<(String, i32)>().decode_at(&cursor, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::ColumnOutOfBounds {
                offset: 2,
                arity: 1
            })
        ));
    }

    #[test]
    fn test_optional_shapes() {
        let cursor = positioned(vec![Value::Null, Value::Null, 7_i64.into()]);
        let value = decoder::<(Option<(String, i32)>, Option<i64>)>()
            .decode_at(&cursor, 1)
            .unwrap();
        assert_eq!(value, (None, Some(7)));

        let err = decoder::<String>().decode_at(&cursor, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::UnexpectedNull { offset: 1 })
        ));
    }

    #[test]
    fn test_integer_widening() {
        let cursor = positioned(vec![Value::ShortInt(3), Value::Int(4)]);
        assert_eq!(decoder::<(i64, i64)>().decode_at(&cursor, 1).unwrap(), (3, 4));
    }
}
