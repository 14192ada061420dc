use crate::stmt::ValueStream;

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,

    /// Row identifier assigned by the store, when the operation asked for it
    pub last_insert_id: Option<i64>,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a stream of rows
    Values(ValueStream),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
            last_insert_id: None,
        }
    }

    pub fn value_stream(values: impl Into<ValueStream>) -> Self {
        Self {
            rows: Rows::value_stream(values),
            last_insert_id: None,
        }
    }

    pub fn with_last_insert_id(mut self, id: i64) -> Self {
        self.last_insert_id = Some(id);
        self
    }
}

impl Rows {
    pub fn value_stream(values: impl Into<ValueStream>) -> Self {
        Self::Values(values.into())
    }

    /// Number of affected rows. A value stream counts its remaining rows.
    pub fn into_count(self) -> u64 {
        match self {
            Rows::Count(count) => count,
            Rows::Values(values) => values.len() as u64,
        }
    }

    /// Returned rows. A count yields an empty stream.
    pub fn into_values(self) -> ValueStream {
        match self {
            Rows::Values(values) => values,
            Rows::Count(_) => ValueStream::default(),
        }
    }
}
