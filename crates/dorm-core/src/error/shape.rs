use super::Error;

/// Error when a row or record does not have the shape of its record type.
#[derive(Debug)]
pub(super) struct ShapeError {
    message: Box<str>,
}

impl std::error::Error for ShapeError {}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "record shape mismatch: {}", self.message)
    }
}

impl Error {
    pub fn shape(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Shape(ShapeError {
            message: message.into().into(),
        }))
    }

    pub fn is_shape(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Shape(_)))
    }
}
