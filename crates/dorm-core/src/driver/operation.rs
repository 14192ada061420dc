mod query_sql;
pub use query_sql::QuerySql;

#[derive(Debug)]
pub enum Operation {
    /// Execute a SQL statement
    QuerySql(QuerySql),
}
