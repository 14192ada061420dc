use crate::{Model, Result};

use dorm_core::schema::Table;

use std::{any::TypeId, collections::HashMap, sync::Arc};

/// Table descriptors, computed once per record type.
///
/// Entries are keyed by type identity, so two record types with the same
/// name in different modules get separate entries.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    /// Prepended to every table name
    prefix: Option<String>,

    tables: HashMap<TypeId, Arc<Table>>,

    /// Registration order
    order: Vec<TypeId>,
}

impl Registry {
    pub(crate) fn new(prefix: Option<String>) -> Registry {
        Registry {
            prefix,
            ..Registry::default()
        }
    }

    /// Returns the descriptor for `M`, computing it on first use.
    pub(crate) fn table<M: Model>(&mut self) -> Result<Arc<Table>> {
        let type_id = TypeId::of::<M>();

        if let Some(table) = self.tables.get(&type_id) {
            return Ok(table.clone());
        }

        let mut table = M::schema()?;

        if let Some(prefix) = &self.prefix {
            table.name = format!("{prefix}{}", table.name);
        }

        let table = Arc::new(table);
        self.tables.insert(type_id, table.clone());
        self.order.push(type_id);
        Ok(table)
    }

    /// Registered descriptors, in registration order.
    pub(crate) fn tables(&self) -> impl Iterator<Item = &Arc<Table>> {
        self.order.iter().filter_map(|type_id| self.tables.get(type_id))
    }
}
