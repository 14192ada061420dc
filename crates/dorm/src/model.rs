use crate::Result;

use dorm_core::{schema::Table, stmt};

/// A record type mapped to one table.
///
/// Implemented by `#[derive(Model)]`. Only `pub` fields are mapped to
/// columns, in declaration order; other fields are left out of every
/// statement and load as `Default::default()`.
pub trait Model: Sized + 'static {
    /// Describes the table backing this record type.
    fn schema() -> Result<Table>;

    /// Load an instance of the model, populating fields using the given row.
    fn load(row: stmt::ValueRecord) -> Result<Self>;

    /// Values of the mapped fields, in column order.
    fn values(&self) -> stmt::ValueRecord;

    /// Overwrites the primary key field. Does nothing when the model has no
    /// primary key.
    fn set_primary_key(&mut self, value: stmt::Value) -> Result<()>;
}

/// Name of the table backing `M`.
pub fn table_name<M: Model>() -> Result<String> {
    Ok(M::schema()?.name)
}

/// Column names of `M`, in field declaration order.
pub fn column_names<M: Model>() -> Result<Vec<String>> {
    Ok(M::schema()?
        .columns
        .into_iter()
        .map(|column| column.name)
        .collect())
}
