mod builder;
mod connect;
mod registry;

pub use builder::Builder;
pub use connect::Connect;
use registry::Registry;

use crate::{Cursor, Model, Result};

use dorm_core::{
    driver::{operation::QuerySql, Capability, Connection, Response},
    schema::Table,
    stmt::{Type, Value},
    Error,
};
use dorm_sql::{Serializer, Statement};

use std::sync::Arc;

/// A database handle mapping record types to tables.
///
/// Every operation runs its statements one after another on a single
/// connection. Operations on a table other than [`Db::create_table`] and
/// [`Db::push_schema`] require the table to exist and fail with a missing
/// table error otherwise.
#[derive(Debug)]
pub struct Db {
    connection: Box<dyn Connection>,
    registry: Registry,
    serializer: Serializer,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to the store at `url` with no registered record types.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    /// Wraps an already open connection.
    pub fn new(connection: impl Connection) -> Db {
        Db::from_parts(Box::new(connection), Registry::default())
    }

    pub(crate) fn from_parts(connection: Box<dyn Connection>, registry: Registry) -> Db {
        let serializer = Serializer::for_dialect(connection.capability().dialect);

        Db {
            connection,
            registry,
            serializer,
        }
    }

    pub fn capability(&self) -> &'static Capability {
        self.connection.capability()
    }

    /// Returns the table descriptor for `M`, including the table name prefix.
    pub fn table<M: Model>(&mut self) -> Result<Arc<Table>> {
        self.registry.table::<M>()
    }

    /// Returns every record of `M`.
    pub async fn find<M: Model>(&mut self) -> Result<Vec<M>> {
        self.all::<M>().await?.collect()
    }

    /// Returns a cursor over every record of `M`.
    pub async fn all<M: Model>(&mut self) -> Result<Cursor<M>> {
        let table = self.existing_table::<M>().await?;
        self.query_records(&table, Statement::select(&table)).await
    }

    /// Loads the first record of `M` into `record`.
    ///
    /// Returns `false`, leaving `record` untouched, when the table is empty.
    pub async fn first<M: Model>(&mut self, record: &mut M) -> Result<bool> {
        let table = self.existing_table::<M>().await?;
        let mut cursor = self
            .query_records::<M>(&table, Statement::select_limit(&table, 1))
            .await?;

        match cursor.next() {
            Some(first) => {
                *record = first?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Inserts `record`, replacing any row it conflicts with.
    ///
    /// When `M` has a primary key, the value in `record` is ignored and
    /// overwritten with the row identifier assigned by the store.
    pub async fn create<M: Model>(&mut self, record: &mut M) -> Result<()> {
        let table = self.existing_table::<M>().await?;
        self.insert(&table, record).await
    }

    /// Returns the records of `M` that match `template` on any column.
    ///
    /// Every mapped field of `template` is compared, the primary key
    /// included, and a row is returned if at least one comparison holds.
    pub async fn filter<M: Model>(&mut self, template: &M) -> Result<Vec<M>> {
        let table = self.existing_table::<M>().await?;
        let stmt = Statement::filter(&table, &template.values());
        self.query_records(&table, stmt).await?.collect()
    }

    /// Returns at most `n` records of `M`.
    pub async fn top_n<M: Model>(&mut self, n: u64) -> Result<Vec<M>> {
        let table = self.existing_table::<M>().await?;
        self.query_records(&table, Statement::select_limit(&table, n))
            .await?
            .collect()
    }

    /// Runs `sql` as written and loads every returned row as an `M`.
    ///
    /// The SQL text is passed to the store unchanged; it must not contain
    /// untrusted input.
    pub async fn query<M: Model>(&mut self, sql: &str) -> Result<Vec<M>> {
        let table = self.registry.table::<M>()?;
        tracing::debug!(table = %table.name, sql = %sql, "query");

        let op = QuerySql::query(sql, vec![], column_types(&table));
        let response = self.connection.exec(op.into()).await?;

        Cursor::new(response.rows.into_values()).collect()
    }

    /// Runs `sql` as written for its side effects, returning the number of
    /// affected rows.
    ///
    /// The SQL text is passed to the store unchanged; it must not contain
    /// untrusted input.
    pub async fn execute(&mut self, sql: &str) -> Result<u64> {
        tracing::debug!(sql = %sql, "execute");

        let response = self
            .connection
            .exec(QuerySql::execute(sql, vec![]).into())
            .await?;
        Ok(response.rows.into_count())
    }

    /// Deletes the rows of `M` that match `record` on any column, returning
    /// the number of deleted rows.
    pub async fn delete<M: Model>(&mut self, record: &M) -> Result<u64> {
        let table = self.existing_table::<M>().await?;
        let response = self
            .exec(&table, Statement::delete(&table, &record.values()), None)
            .await?;
        Ok(response.rows.into_count())
    }

    /// Creates the table for `M` if it does not exist, then inserts `record`
    /// as [`Db::create`] does.
    pub async fn create_table<M: Model>(&mut self, record: &mut M) -> Result<()> {
        let table = self.registry.table::<M>()?;

        if !self.table_exists(&table).await? {
            self.exec(&table, Statement::create_table(&table), None)
                .await?;
        }

        self.insert(&table, record).await
    }

    /// Creates the table of every registered record type that does not exist
    /// yet.
    pub async fn push_schema(&mut self) -> Result<()> {
        let tables: Vec<_> = self.registry.tables().cloned().collect();

        for table in tables {
            if !self.table_exists(&table).await? {
                self.exec(&table, Statement::create_table(&table), None)
                    .await?;
            }
        }

        Ok(())
    }

    /// Grants `grantee` access to the table of `M`. Not supported.
    pub async fn grant<M: Model>(&mut self, grantee: &str) -> Result<()> {
        let _ = grantee;
        Err(Error::unsupported_feature("grant"))
    }

    /// Revokes access to the table of `M` from `grantee`. Not supported.
    pub async fn revoke<M: Model>(&mut self, grantee: &str) -> Result<()> {
        let _ = grantee;
        Err(Error::unsupported_feature("revoke"))
    }

    /// Closes the connection.
    pub async fn close(self) -> Result<()> {
        tracing::trace!("closing connection");
        drop(self.connection);
        Ok(())
    }

    async fn insert<M: Model>(&mut self, table: &Table, record: &mut M) -> Result<()> {
        if table.primary_key.is_some() && !self.capability().last_insert_id {
            return Err(Error::unsupported_feature(format!(
                "`{}` has a primary key but the store does not report row identifiers",
                table.name
            )));
        }

        let stmt = Statement::insert_or_replace(table, &record.values());
        let response = self.exec(table, stmt, None).await?;

        if table.primary_key.is_some() {
            let Some(id) = response.last_insert_id else {
                dorm_core::bail!(
                    "store did not report a row identifier for `{}`",
                    table.name
                );
            };

            record.set_primary_key(Value::I64(id))?;
        }

        Ok(())
    }

    /// Returns the descriptor for `M` after checking that its table exists.
    async fn existing_table<M: Model>(&mut self) -> Result<Arc<Table>> {
        let table = self.registry.table::<M>()?;

        if self.table_exists(&table).await? {
            Ok(table)
        } else {
            Err(Error::missing_table(&table.name[..]))
        }
    }

    /// Probes the table with `SELECT *`; any failure means it is absent.
    async fn table_exists(&mut self, table: &Table) -> Result<bool> {
        let mut params = vec![];
        let sql = self
            .serializer
            .serialize(&Statement::select(table), &mut params);
        tracing::trace!(table = %table.name, sql = %sql, "probe");

        let op = QuerySql::execute(sql, params);

        match self.connection.exec(op.into()).await {
            Ok(_) => Ok(true),
            Err(err) => {
                tracing::debug!(table = %table.name, error = %err, "table probe failed");
                Ok(false)
            }
        }
    }

    async fn query_records<M: Model>(
        &mut self,
        table: &Table,
        stmt: Statement,
    ) -> Result<Cursor<M>> {
        let response = self.exec(table, stmt, Some(column_types(table))).await?;
        Ok(Cursor::new(response.rows.into_values()))
    }

    async fn exec(
        &mut self,
        table: &Table,
        stmt: Statement,
        ret: Option<Vec<Type>>,
    ) -> Result<Response> {
        let mut params = vec![];
        let sql = self.serializer.serialize(&stmt, &mut params);
        tracing::debug!(table = %table.name, sql = %sql, params = params.len(), "exec");

        let mut op = QuerySql {
            sql,
            params,
            ret,
            last_insert_id: false,
        };

        if matches!(stmt, Statement::Insert(_)) {
            op = op.returning_last_insert_id();
        }

        self.connection.exec(op.into()).await
    }
}

fn column_types(table: &Table) -> Vec<Type> {
    table.columns.iter().map(|column| column.ty).collect()
}
