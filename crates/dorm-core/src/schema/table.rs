use super::Column;
use crate::{stmt::Type, Error, Result};

use std_util::str;

/// Describes the table a record type maps to.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// Columns in field declaration order
    pub columns: Vec<Column>,

    /// Index into `columns` of the primary key, if the record type has one
    pub primary_key: Option<usize>,
}

impl Table {
    /// Describes the table for the record type `model`.
    ///
    /// The table name is `model` converted to snake case. Returns an
    /// `InvalidSchema` error when the record type has no columns, more than
    /// one primary key, a primary key other than `i64` or two fields mapping
    /// to the same column.
    pub fn new(model: impl Into<String>, columns: Vec<Column>) -> Result<Table> {
        let model = model.into();
        let name = str::snake_case(&model);

        if columns.is_empty() {
            return Err(Error::invalid_schema(format!(
                "`{model}` has no visible fields"
            )));
        }

        let mut primary_key = None;

        for (index, column) in columns.iter().enumerate() {
            if columns[..index].iter().any(|prev| prev.name == column.name) {
                return Err(Error::invalid_schema(format!(
                    "`{model}` maps more than one field to column `{}`",
                    column.name
                )));
            }

            if !column.primary_key {
                continue;
            }

            if let Some(prev) = primary_key {
                let prev: &Column = &columns[prev];
                return Err(Error::invalid_schema(format!(
                    "`{model}` has more than one primary key: `{}` and `{}`",
                    prev.field, column.field
                )));
            }

            // The key receives the store's 64-bit row identifier.
            if column.ty != Type::I64 {
                return Err(Error::invalid_schema(format!(
                    "primary key `{model}::{}` must be `i64`, found `{}`",
                    column.field,
                    column.ty.name()
                )));
            }

            primary_key = Some(index);
        }

        Ok(Table {
            name,
            columns,
            primary_key,
        })
    }

    /// Overrides the derived table name.
    pub fn rename(mut self, name: impl Into<String>) -> Table {
        self.name = name.into();
        self
    }

    pub fn primary_key_column(&self) -> Option<&Column> {
        self.primary_key.map(|index| &self.columns[index])
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| &column.name[..])
    }
}
