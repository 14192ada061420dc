use super::{value::Literal, Delimited, Ident, Params, ToSql};

use crate::stmt::{Expr, Operand};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Expr::Or(operands) if operands.is_empty() => fmt!(f, "FALSE"),
            Expr::Or(operands) => fmt!(f, Delimited(operands, " OR ")),
            Expr::Eq { column, operand } if operand.is_null() => {
                fmt!(f, Ident(column) " IS NULL")
            }
            Expr::Eq { column, operand } => fmt!(f, Ident(column) " = " operand),
        }
    }
}

impl ToSql for &Operand {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Operand::Param(value) => fmt!(f, value),
            Operand::Literal(value) => fmt!(f, Literal(value)),
        }
    }
}
