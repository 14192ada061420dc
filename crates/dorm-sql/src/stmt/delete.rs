use super::{Expr, Operand, Statement, ValueRecord};

use dorm_core::schema::Table;

/// `DELETE FROM <table> WHERE <filter>`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub filter: Expr,
}

impl Statement {
    /// Deletes the rows of `table` matching any column of `record`. Values
    /// are bound as parameters.
    pub fn delete(table: &Table, record: &ValueRecord) -> Self {
        Delete {
            table: table.name.clone(),
            filter: Expr::any_column_eq(table, record, Operand::Param),
        }
        .into()
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
