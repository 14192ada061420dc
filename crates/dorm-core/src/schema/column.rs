use crate::stmt::Type;

use std_util::str;

/// Describes how one visible field of a record type maps to a table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Name of the field in the record type
    pub field: String,

    /// Name of the column in the table
    pub name: String,

    /// Scalar type of the field
    pub ty: Type,

    /// True when the field is annotated as the primary key
    pub primary_key: bool,
}

impl Column {
    /// Describes a field, deriving the column name from the field name.
    pub fn new(field: impl Into<String>, ty: Type) -> Column {
        let field = field.into();
        let name = str::snake_case(field.trim_start_matches("r#"));

        Column {
            field,
            name,
            ty,
            primary_key: false,
        }
    }

    /// Overrides the derived column name.
    pub fn rename(mut self, name: impl Into<String>) -> Column {
        self.name = name.into();
        self
    }

    /// Marks the column as the primary key.
    pub fn primary_key(mut self) -> Column {
        self.primary_key = true;
        self
    }
}
