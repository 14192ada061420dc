use dorm_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core dorm value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a dorm value of type `ty`.
    ///
    /// SQLite stores booleans as integers and may hand back integral floats
    /// as integers; both are accepted. Any other mismatch between the storage
    /// class and `ty` is a type conversion error.
    pub fn from_sql(row: &Row, index: usize, ty: stmt::Type) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::execution)?;

        let core_value = match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) if ty.is_bool() => CoreValue::Bool(value != 0),
            SqlValue::Integer(value) if ty.is_integer() => CoreValue::I64(value),
            SqlValue::Integer(value) if ty.is_float() => CoreValue::F64(value as f64),
            SqlValue::Real(value) if ty.is_float() => CoreValue::F64(value),
            SqlValue::Text(value) if ty.is_string() => CoreValue::String(value),
            SqlValue::Integer(value) => {
                return Err(Error::type_conversion(CoreValue::I64(value), ty.name()))
            }
            SqlValue::Real(value) => {
                return Err(Error::type_conversion(CoreValue::F64(value), ty.name()))
            }
            SqlValue::Text(value) => {
                return Err(Error::type_conversion(CoreValue::String(value), ty.name()))
            }
            SqlValue::Blob(_) => return Err(Error::type_conversion_from("Blob", ty.name())),
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            // SQLite integers are signed 64-bit
            Value::U64(v) => i64::try_from(*v)
                .map(|v| ToSqlOutput::Owned(SqlValue::Integer(v)))
                .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
