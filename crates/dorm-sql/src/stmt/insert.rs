use super::{Statement, Value, ValueRecord};

use dorm_core::schema::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Value>,

    /// Replace an existing row that conflicts on a unique column.
    pub replace: bool,
}

impl Statement {
    /// Inserts `record` into `table`, replacing any conflicting row.
    ///
    /// The primary key column is left out so the store assigns a fresh row
    /// identifier.
    pub fn insert_or_replace(table: &Table, record: &ValueRecord) -> Self {
        let (columns, values): (Vec<String>, Vec<Value>) = table
            .columns
            .iter()
            .zip(record.iter())
            .filter(|(column, _)| !column.primary_key)
            .map(|(column, value)| (column.name.clone(), value.clone()))
            .unzip();

        Insert {
            table: table.name.clone(),
            columns,
            values,
            replace: true,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
