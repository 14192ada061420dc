use super::{AdhocError, Error};

/// Error when the relational store fails to execute a statement.
///
/// This wraps errors from the underlying driver library:
/// - Malformed SQL, including caller-supplied raw queries
/// - Constraint violations
/// - Connection errors while opening the store
#[derive(Debug)]
pub(super) struct ExecutionError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a statement execution failure.
    ///
    /// Drivers use this to convert library errors (rusqlite, etc.) into dorm
    /// errors.
    pub fn execution(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Execution(ExecutionError {
            inner: Box::new(err),
        }))
    }

    /// Context naming the statement that failed. Meant to be passed to
    /// [`Error::context`].
    pub fn statement(sql: &str) -> Error {
        Error::from(super::ErrorKind::Adhoc(AdhocError::new(format!(
            "failed to execute `{sql}`"
        ))))
    }

    /// Returns `true` if this error is a statement execution failure.
    pub fn is_execution(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Execution(_)))
    }
}
