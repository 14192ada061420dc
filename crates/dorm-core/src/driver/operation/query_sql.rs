use super::Operation;

use crate::stmt::{Type, Value};

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// Serialized SQL text
    pub sql: String,

    /// Positional parameters, bound in order
    pub params: Vec<Value>,

    /// Types of the returned columns.
    ///
    /// When `None`, the statement is executed for its side effects; any rows
    /// it produces are discarded after the first step. When `Some`, every row
    /// is decoded and must have exactly this many columns.
    pub ret: Option<Vec<Type>>,

    /// When true, the response carries the row identifier assigned by the
    /// statement.
    pub last_insert_id: bool,
}

impl QuerySql {
    /// A statement executed for its side effects.
    pub fn execute(sql: impl Into<String>, params: Vec<Value>) -> QuerySql {
        QuerySql {
            sql: sql.into(),
            params,
            ret: None,
            last_insert_id: false,
        }
    }

    /// A statement returning rows with columns of the given types.
    pub fn query(sql: impl Into<String>, params: Vec<Value>, ret: Vec<Type>) -> QuerySql {
        QuerySql {
            sql: sql.into(),
            params,
            ret: Some(ret),
            last_insert_id: false,
        }
    }

    /// Requests the assigned row identifier in the response.
    pub fn returning_last_insert_id(mut self) -> QuerySql {
        self.last_insert_id = true;
        self
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
