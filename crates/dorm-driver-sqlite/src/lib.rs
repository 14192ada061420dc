mod value;
pub(crate) use value::Value;

use dorm_core::{
    async_trait,
    driver::{
        operation::{Operation, QuerySql},
        Capability, Driver, Response,
    },
    stmt::{self, ValueRecord, ValueStream},
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL.
    ///
    /// `sqlite::memory:` opens an in-memory database; `sqlite:<path>` opens
    /// (or creates) the database file at `path`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        match url.path() {
            ":memory:" => Ok(Self::InMemory),
            "" => Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            ))),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn dorm_core::Connection>> {
        tracing::trace!(url = %self.url(), "opening sqlite connection");

        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::execution)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::execution)?;
        Ok(Self { connection })
    }

    /// Wraps an already open `rusqlite` connection.
    pub fn from_rusqlite(connection: RusqliteConnection) -> Self {
        Self { connection }
    }

    fn query_sql(&mut self, op: QuerySql) -> Result<Response> {
        let mut stmt = self
            .connection
            .prepare_cached(&op.sql)
            .map_err(Error::execution)?;

        let params = op.params.into_iter().map(Value::from).collect::<Vec<_>>();

        // Statements without result columns report the affected row count.
        if stmt.column_count() == 0 {
            let count = stmt
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::execution)?;

            let response = Response::count(count as u64);

            return Ok(if op.last_insert_id {
                response.with_last_insert_id(self.connection.last_insert_rowid())
            } else {
                response
            });
        }

        let width = stmt.column_count();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::execution)?;

        let Some(ret) = op.ret else {
            // Step once so the statement is actually evaluated.
            rows.next().map_err(Error::execution)?;
            return Ok(Response::count(0));
        };

        let mut values = ValueStream::default();

        while let Some(row) = rows.next().map_err(Error::execution)? {
            let record = decode_row(row, width, &ret)
                .map_err(|err| err.context(Error::statement(&op.sql)));
            values.push(record);
        }

        Ok(Response::value_stream(values))
    }
}

fn decode_row(row: &rusqlite::Row<'_>, width: usize, ret: &[stmt::Type]) -> Result<ValueRecord> {
    if width != ret.len() {
        return Err(Error::shape(format!(
            "row has {width} columns; expected {}",
            ret.len()
        )));
    }

    ret.iter()
        .enumerate()
        .map(|(index, ty)| Value::from_sql(row, index, *ty).map(Value::into_inner))
        .collect()
}

#[async_trait]
impl dorm_core::driver::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => {
                let sql = op.sql.clone();
                self.query_sql(op)
                    .map_err(|err| err.context(Error::statement(&sql)))
            }
        }
    }
}
