mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod expr;
pub use expr::{Expr, Operand};

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod ty;
pub use ty::ColumnType;

pub use dorm_core::stmt::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
}
