//! The Value type - the dynamically-typed payload of a variable.
//!
//! Every variable holds exactly one `Value`. Typed reads go through
//! [`FromValue`], which only accepts the exact storage kind (or its
//! same-width signed/unsigned partner), so a stored `Int` can never be
//! read back as a `Long` or a `String` by accident.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dynamically-typed variable value.
///
/// # Design Notes
///
/// - Unsigned/signed partners of one width share a storage kind. `i8` is
///   stored as `Byte`, `u16` as `Short`, `u32` as `Int` and `u64` as `Long`,
///   by reinterpreting the bit pattern rather than range checking.
/// - `Null` is the "no value" marker. Setting a variable to `Null` removes
///   it; a store never holds a `Null` entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    Bool(bool),
    /// Unsigned 8-bit integer (also carries `i8`).
    Byte(u8),
    /// Signed 16-bit integer (also carries `u16`).
    Short(i16),
    /// Signed 32-bit integer (also carries `u32`).
    Int(i32),
    /// Signed 64-bit integer (also carries `u64`).
    Long(i64),
    Float(f32),
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Raw byte sequence.
    Bytes(Vec<u8>),
}

/// Runtime type tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarType {
    Null,
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    Bytes,
}

impl VarType {
    /// Lowercase name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            VarType::Null => "null",
            VarType::Bool => "bool",
            VarType::Byte => "byte",
            VarType::Short => "short",
            VarType::Int => "int",
            VarType::Long => "long",
            VarType::Float => "float",
            VarType::Double => "double",
            VarType::String => "string",
            VarType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// The runtime type of this value.
    pub fn var_type(&self) -> VarType {
        match self {
            Value::Null => VarType::Null,
            Value::Bool(_) => VarType::Bool,
            Value::Byte(_) => VarType::Byte,
            Value::Short(_) => VarType::Short,
            Value::Int(_) => VarType::Int,
            Value::Long(_) => VarType::Long,
            Value::Float(_) => VarType::Float,
            Value::Double(_) => VarType::Double,
            Value::String(_) => VarType::String,
            Value::Bytes(_) => VarType::Bytes,
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extract this value as `T`, or `None` if the runtime type doesn't match.
    pub fn to<T: FromValue>(&self) -> Option<T> {
        T::from_value(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Byte(v) => write!(f, "{}", v),
            Value::Short(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
            Value::Bytes(bytes) => {
                for b in bytes {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
        }
    }
}

/// Types that can be read out of a [`Value`].
///
/// Implementations accept only their own storage kind. Same-width
/// signed/unsigned partners reinterpret the stored bits, so a `u16` read of
/// `Short(-1)` yields `65535`.
pub trait FromValue: Sized {
    /// The storage kind this type is read from.
    const TYPE: VarType;

    /// Name of the requested type, as reported in type mismatch errors.
    /// Differs from `TYPE` for reinterpreted types (`u16` is "ushort").
    const NAME: &'static str;

    /// Extract `value` as `Self`, or `None` if it holds another kind.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! scalar_value {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl FromValue for $ty {
            const TYPE: VarType = VarType::$variant;
            const NAME: &'static str = $name;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v)
            }
        }
    };
}

macro_rules! reinterpreted_value {
    ($ty:ty, $stored:ty, $variant:ident, $name:literal) => {
        impl FromValue for $ty {
            const TYPE: VarType = VarType::$variant;
            const NAME: &'static str = $name;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(*v as $ty),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v as $stored)
            }
        }
    };
}

scalar_value!(bool, Bool, "bool");
scalar_value!(u8, Byte, "byte");
scalar_value!(i16, Short, "short");
scalar_value!(i32, Int, "int");
scalar_value!(i64, Long, "long");
scalar_value!(f32, Float, "float");
scalar_value!(f64, Double, "double");

reinterpreted_value!(i8, u8, Byte, "sbyte");
reinterpreted_value!(u16, i16, Short, "ushort");
reinterpreted_value!(u32, i32, Int, "uint");
reinterpreted_value!(u64, i64, Long, "ulong");

impl FromValue for String {
    const TYPE: VarType = VarType::String;
    const NAME: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromValue for Vec<u8> {
    const TYPE: VarType = VarType::Bytes;
    const NAME: &'static str = "bytes";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bytes(b) => Some(b.clone()),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
