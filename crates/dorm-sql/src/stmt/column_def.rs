use super::ColumnType;

use dorm_core::schema::Column;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: ColumnType,

    /// Declares the column as the primary key. The column then aliases the
    /// store's row identifier.
    pub primary_key: bool,
}

impl ColumnDef {
    pub fn from_schema(column: &Column) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: ColumnType::from_core(column.ty),
            primary_key: column.primary_key,
        }
    }
}
