use super::ValueRecord;
use crate::Result;

use std::collections::VecDeque;

/// Rows returned by a query, consumed front to back exactly once.
#[derive(Debug, Default)]
pub struct ValueStream {
    buffer: VecDeque<Result<ValueRecord>>,
}

impl ValueStream {
    pub fn from_vec(records: Vec<ValueRecord>) -> ValueStream {
        ValueStream {
            buffer: records.into_iter().map(Ok).collect(),
        }
    }

    /// Appends a row. Rows that failed to decode are queued as errors so the
    /// consumer sees them in order.
    pub fn push(&mut self, record: Result<ValueRecord>) {
        self.buffer.push_back(record);
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of rows not yet consumed.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }
}

impl Iterator for ValueStream {
    type Item = Result<ValueRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len(), Some(self.buffer.len()))
    }
}

impl From<Vec<ValueRecord>> for ValueStream {
    fn from(records: Vec<ValueRecord>) -> Self {
        ValueStream::from_vec(records)
    }
}
