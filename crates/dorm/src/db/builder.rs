use super::{registry::Registry, Connect, Db};
use crate::{Model, Result};

use dorm_core::driver::{Connection, Driver};

type Register = fn(&mut Registry) -> Result<()>;

#[derive(Default)]
pub struct Builder {
    /// Record types to describe when the `Db` is built
    models: Vec<Register>,

    /// Prepended to every table name
    table_name_prefix: Option<String>,
}

impl Builder {
    /// Registers a record type. Its schema is checked when the `Db` is built
    /// and its table is created by [`Db::push_schema`].
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.models.push(|registry| registry.table::<T>().map(|_| ()));
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Connects to the store at `url`, e.g. `sqlite::memory:`.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let registry = self.build_registry()?;
        let connection = driver.connect().await?;
        Ok(Db::from_parts(connection, registry))
    }

    /// Builds a `Db` on an already open connection.
    pub fn with_connection(&mut self, connection: impl Connection) -> Result<Db> {
        let registry = self.build_registry()?;
        Ok(Db::from_parts(Box::new(connection), registry))
    }

    fn build_registry(&self) -> Result<Registry> {
        let mut registry = Registry::new(self.table_name_prefix.clone());

        for register in &self.models {
            register(&mut registry)?;
        }

        Ok(registry)
    }
}
