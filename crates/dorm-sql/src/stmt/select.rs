use super::{Expr, Operand, Statement, ValueRecord};

use dorm_core::schema::Table;

/// `SELECT * FROM <table> [WHERE <filter>] [LIMIT <n>]`
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,
    pub filter: Option<Expr>,
    pub limit: Option<u64>,
}

impl Statement {
    /// Selects every row of `table`. Also serves as the table-existence probe.
    pub fn select(table: &Table) -> Self {
        Select {
            table: table.name.clone(),
            filter: None,
            limit: None,
        }
        .into()
    }

    /// Selects at most `n` rows of `table`.
    pub fn select_limit(table: &Table, n: u64) -> Self {
        Select {
            table: table.name.clone(),
            filter: None,
            limit: Some(n),
        }
        .into()
    }

    /// Selects the rows of `table` matching any column of `record`. Values are
    /// written into the SQL text as literals.
    pub fn filter(table: &Table, record: &ValueRecord) -> Self {
        Select {
            table: table.name.clone(),
            filter: Some(Expr::any_column_eq(table, record, Operand::Literal)),
            limit: None,
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
