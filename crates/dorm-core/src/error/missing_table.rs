use super::Error;

/// Error when the table backing a record type does not exist.
///
/// Tables are only created through `Db::create_table` and `Db::push_schema`;
/// every other operation requires the table to be present.
#[derive(Debug)]
pub(super) struct MissingTableError {
    table: Box<str>,
}

impl std::error::Error for MissingTableError {}

impl core::fmt::Display for MissingTableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table `{}` does not exist", self.table)
    }
}

impl Error {
    /// Creates a missing table error for the named table.
    pub fn missing_table(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingTable(MissingTableError {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing table error.
    pub fn is_missing_table(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingTable(_)))
    }
}
