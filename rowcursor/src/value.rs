use std::fmt;

/// The type of a column value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeId {
    Null,
    Bool,
    ShortInt,
    Int,
    BigInt,
    Double,
    Timestamp,
    Text,
    Blob,
}

impl TypeId {
    /// Returns the canonical type name.
    pub fn name(self) -> &'static str {
        match self {
            TypeId::Null => "null",
            TypeId::Bool => "bool",
            TypeId::ShortInt => "shortint",
            TypeId::Int => "int",
            TypeId::BigInt => "bigint",
            TypeId::Double => "double",
            TypeId::Timestamp => "timestamp",
            TypeId::Text => "text",
            TypeId::Blob => "blob",
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A column value, as exposed by the cursor at its current row.
#[derive(Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    ShortInt(i16),
    Int(i32),
    BigInt(i64),
    Double(f64),
    Timestamp(i64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Returns the corresponding type id.
    pub fn type_id(&self) -> TypeId {
        match self {
            Value::Null => TypeId::Null,
            Value::Bool(_) => TypeId::Bool,
            Value::ShortInt(_) => TypeId::ShortInt,
            Value::Int(_) => TypeId::Int,
            Value::BigInt(_) => TypeId::BigInt,
            Value::Double(_) => TypeId::Double,
            Value::Timestamp(_) => TypeId::Timestamp,
            Value::Text(_) => TypeId::Text,
            Value::Blob(_) => TypeId::Blob,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(inner) => inner.fmt(f),
            Value::ShortInt(inner) => inner.fmt(f),
            Value::Int(inner) => inner.fmt(f),
            Value::BigInt(inner) => inner.fmt(f),
            Value::Double(inner) => inner.fmt(f),
            Value::Timestamp(inner) => inner.fmt(f),
            Value::Text(inner) => inner.fmt(f),
            Value::Blob(inner) => write!(f, "<bytes ({})>", inner.len()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(inner) => inner.fmt(f),
            Value::ShortInt(inner) => inner.fmt(f),
            Value::Int(inner) => inner.fmt(f),
            Value::BigInt(inner) => inner.fmt(f),
            Value::Double(inner) => inner.fmt(f),
            Value::Timestamp(inner) => inner.fmt(f),
            Value::Text(_) => f.write_str("<string>"),
            Value::Blob(_) => f.write_str("<blob>"),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($type:ty => $variant:ident),+) => {
        $(
            impl From<$type> for Value {
                fn from(value: $type) -> Self {
                    Value::$variant(value)
                }
            }
        )+
    };
}

impl_from_primitive![
    bool => Bool,
    i16 => ShortInt,
    i32 => Int,
    i64 => BigInt,
    f64 => Double,
    String => Text,
    Vec<u8> => Blob
];

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
