use super::{Value, ValueRecord};

use dorm_core::schema::Table;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Disjunction of the operands. An empty disjunction is false.
    Or(Vec<Expr>),

    /// `column = operand`, or `column IS NULL` when the operand is null.
    Eq { column: String, operand: Operand },
}

/// Right-hand side of an equality test.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Bound as a positional parameter
    Param(Value),

    /// Written into the SQL text
    Literal(Value),
}

impl Expr {
    pub fn eq(column: impl Into<String>, operand: Operand) -> Expr {
        Expr::Eq {
            column: column.into(),
            operand,
        }
    }

    /// `c1 = v1 OR c2 = v2 ...` over every column of `table`, pairing each
    /// column with the value at the same position in `record`.
    pub fn any_column_eq(
        table: &Table,
        record: &ValueRecord,
        operand: impl Fn(Value) -> Operand,
    ) -> Expr {
        Expr::Or(
            table
                .columns
                .iter()
                .zip(record.iter())
                .map(|(column, value)| Expr::eq(&column.name[..], operand(value.clone())))
                .collect(),
        )
    }
}

impl Operand {
    pub fn value(&self) -> &Value {
        match self {
            Operand::Param(value) | Operand::Literal(value) => value,
        }
    }

    pub fn is_null(&self) -> bool {
        self.value().is_null()
    }
}
