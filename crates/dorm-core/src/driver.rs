mod capability;
pub use capability::{Capability, Dialect};

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, Result};

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to a relational store.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Returns the URL this driver connects to.
    fn url(&self) -> Cow<'_, str>;

    /// Creates a new connection to the store.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A handle to a relational store that executes parameterized statements.
///
/// A connection runs one operation at a time. Any row cursor opened by an
/// operation is released before `exec` returns.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Describes the store's capability.
    fn capability(&self) -> &'static Capability;

    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> Result<Response>;
}
