/// SQL dialect spoken by a relational store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    Mysql,
}

#[derive(Debug)]
pub struct Capability {
    /// Dialect used to serialize statements for the store.
    pub dialect: Dialect,

    /// When true, the store reports the row identifier assigned by the last
    /// insert. Record types with a primary key can only be created on such
    /// stores.
    pub last_insert_id: bool,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        dialect: Dialect::Sqlite,
        last_insert_id: true,
    };

    /// MySQL capabilities.
    pub const MYSQL: Self = Self {
        dialect: Dialect::Mysql,
        last_insert_id: true,
    };
}
