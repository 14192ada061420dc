use super::{Formatter, Params, ToSql};

use crate::stmt::Value;

/// A value written into the SQL text.
///
/// Strings are single-quoted with embedded quotes doubled. Numbers and
/// booleans use their default text form. Infinite floats are written as
/// out-of-range literals (`9e999`), which SQLite reads back as infinity; NaN is
/// stored as NULL by SQLite and is written as `NULL`.
pub(super) struct Literal<'a>(pub(super) &'a Value);

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self.0 {
            Value::Bool(value) => f.dst.push_str(if *value { "true" } else { "false" }),
            Value::I64(value) => f.dst.push_str(&value.to_string()),
            Value::U64(value) => f.dst.push_str(&value.to_string()),
            Value::F64(value) if value.is_nan() => f.dst.push_str("NULL"),
            Value::F64(value) if value.is_infinite() => {
                f.dst.push_str(if *value > 0.0 { "9e999" } else { "-9e999" })
            }
            Value::F64(value) => f.dst.push_str(&value.to_string()),
            Value::Null => f.dst.push_str("NULL"),
            Value::String(value) => {
                f.dst.push('\'');
                f.dst.push_str(&value.replace('\'', "''"));
                f.dst.push('\'');
            }
        }
    }
}

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
    }
}
