use crate::{Error, Result};

/// A single column value, as bound to a statement or read from a row.
///
/// Signed integers are carried as `I64`, `u64` and `usize` as `U64`, and
/// floats as `F64`; the field's declared [`Type`](super::Type) narrows them on
/// load.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 64-bit floating point
    F64(f64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Takes the value out, leaving `Null` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            // SQLite has no boolean storage class
            Self::I64(v) => Ok(v != 0),
            _ => Err(Error::type_conversion(self, "bool")),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "String")),
        }
    }

    pub fn to_f64(self) -> Result<f64> {
        match self {
            Self::F64(v) => Ok(v),
            Self::I64(v) => Ok(v as f64),
            _ => Err(Error::type_conversion(self, "f64")),
        }
    }

    /// Name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::U64(_) => "U64",
            Self::F64(_) => "F64",
            Self::Null => "Null",
            Self::String(_) => "String",
        }
    }
}

macro_rules! impl_integer {
    ( $( $t:ident => $variant:ident($repr:ty) ),+ ) => {
        $(
            impl From<$t> for Value {
                fn from(src: $t) -> Value {
                    Value::$variant(src as $repr)
                }
            }

            impl TryFrom<Value> for $t {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    let converted = match value {
                        Value::I64(v) => $t::try_from(v).ok(),
                        Value::U64(v) => $t::try_from(v).ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($t)))
                }
            }
        )+
    };
}

impl_integer!(
    i8 => I64(i64),
    i16 => I64(i64),
    i32 => I64(i64),
    i64 => I64(i64),
    isize => I64(i64),
    u8 => I64(i64),
    u16 => I64(i64),
    u32 => I64(i64),
    u64 => U64(u64),
    usize => U64(u64)
);

impl From<bool> for Value {
    fn from(src: bool) -> Value {
        Value::Bool(src)
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Value {
        Value::F64(src as f64)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Value {
        Value::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Value {
        Value::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Value {
        Value::String(src.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Value {
        match src {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_bool()
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_f64()
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_f64().map(|v| v as f32)
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_string()
    }
}
