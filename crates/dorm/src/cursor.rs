use crate::{Model, Result};

use dorm_core::stmt;

use std::marker::PhantomData;

/// Records returned by a query.
///
/// Rows are marshalled into records one at a time as the cursor is advanced.
/// A cursor is consumed exactly once; it cannot be restarted.
#[derive(Debug)]
pub struct Cursor<M> {
    values: stmt::ValueStream,
    _p: PhantomData<M>,
}

impl<M: Model> Cursor<M> {
    pub(crate) fn new(values: stmt::ValueStream) -> Self {
        Self {
            values,
            _p: PhantomData,
        }
    }

    /// Number of rows not yet marshalled.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl<M: Model> Iterator for Cursor<M> {
    type Item = Result<M>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.values.next()?.and_then(M::load))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}
