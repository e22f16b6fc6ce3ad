use crate::{
    cursor::CursorHandle,
    decode::{mismatch, non_null, Decode},
    error::CursorResult,
    value::{TypeId, Value},
};

macro_rules! primitive_impls {
    ($($type:ty => $variant:ident),+) => {
        $(
            impl Decode for $type {
                const WIDTH: usize = 1;

                fn decode_at(cursor: &dyn CursorHandle, offset: usize) -> CursorResult<Self> {
                    match non_null(cursor, offset)? {
                        Value::$variant(inner) => Ok(Clone::clone(inner)),
                        other => Err(mismatch(offset, TypeId::$variant, other)),
                    }
                }
            }
        )+
    };
}

primitive_impls![
    bool => Bool,
    i16 => ShortInt,
    f64 => Double,
    String => Text,
    Vec<u8> => Blob
];

// Integers accept narrower integer columns.

impl Decode for i32 {
    const WIDTH: usize = 1;

    fn decode_at(cursor: &dyn CursorHandle, offset: usize) -> CursorResult<Self> {
        match non_null(cursor, offset)? {
            Value::ShortInt(inner) => Ok(i32::from(*inner)),
            Value::Int(inner) => Ok(*inner),
            other => Err(mismatch(offset, TypeId::Int, other)),
        }
    }
}

impl Decode for i64 {
    const WIDTH: usize = 1;

    fn decode_at(cursor: &dyn CursorHandle, offset: usize) -> CursorResult<Self> {
        match non_null(cursor, offset)? {
            Value::ShortInt(inner) => Ok(i64::from(*inner)),
            Value::Int(inner) => Ok(i64::from(*inner)),
            Value::BigInt(inner) | Value::Timestamp(inner) => Ok(*inner),
            other => Err(mismatch(offset, TypeId::BigInt, other)),
        }
    }
}

impl Decode for Value {
    const WIDTH: usize = 1;

    fn decode_at(cursor: &dyn CursorHandle, offset: usize) -> CursorResult<Self> {
        cursor.column(offset).cloned()
    }
}

/// An optional shape is absent if all of its columns are null.
impl<T: Decode> Decode for Option<T> {
    const WIDTH: usize = T::WIDTH;

    fn decode_at(cursor: &dyn CursorHandle, offset: usize) -> CursorResult<Self> {
        for column in offset..offset + T::WIDTH {
            if !cursor.column(column)?.is_null() {
                return T::decode_at(cursor, offset).map(Some);
            }
        }
        Ok(None)
    }
}

macro_rules! tuple_impls {
    ($($type:ident $field:ident),+) => {
        impl<$($type: Decode),+> Decode for ($($type,)+) {
            const WIDTH: usize = 0 $(+ $type::WIDTH)+;

            fn decode_at(cursor: &dyn CursorHandle, offset: usize) -> CursorResult<Self> {
                let mut _at = offset;
                $(
                    let $field = $type::decode_at(cursor, _at)?;
                    _at += $type::WIDTH;
                )+
                Ok(($($field,)+))
            }
        }
    };
}

tuple_impls!(T1 t1);
tuple_impls!(T1 t1, T2 t2);
tuple_impls!(T1 t1, T2 t2, T3 t3);
tuple_impls!(T1 t1, T2 t2, T3 t3, T4 t4);
tuple_impls!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5);
tuple_impls!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6);
tuple_impls!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7);
tuple_impls!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8);
