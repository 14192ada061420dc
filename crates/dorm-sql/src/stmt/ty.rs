use dorm_core::stmt;

use std::fmt;

/// Storage type of a column in a `CREATE TABLE` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Boolean,
    Integer,
    Real,
    Text,
}

impl ColumnType {
    pub fn from_core(ty: stmt::Type) -> ColumnType {
        if ty.is_bool() {
            ColumnType::Boolean
        } else if ty.is_integer() {
            ColumnType::Integer
        } else if ty.is_float() {
            ColumnType::Real
        } else {
            ColumnType::Text
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Boolean => write!(f, "BOOLEAN"),
            ColumnType::Integer => write!(f, "INTEGER"),
            ColumnType::Real => write!(f, "REAL"),
            ColumnType::Text => write!(f, "TEXT"),
        }
    }
}
