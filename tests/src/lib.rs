use dorm::{db::Builder, Db};
use dorm_driver_sqlite::Connection;

pub use std_util::*;

use std::sync::Once;

/// Full names of the users seeded by [`USER_TABLE`], in insertion order.
pub const MOCK_USERS: &[&str] = &[
    "Alice Apple",
    "Bob Smith",
    "Kyra Acquah",
    "Frelicia Tucker",
    "Carol Crisp",
    "Devon Donald",
];

/// Creates the `user` table and seeds it with [`MOCK_USERS`].
pub const USER_TABLE: &str = "
    CREATE TABLE user (full_name TEXT);
    INSERT INTO user VALUES
        ('Alice Apple'), ('Bob Smith'), ('Kyra Acquah'),
        ('Frelicia Tucker'), ('Carol Crisp'), ('Devon Donald');
";

#[macro_export]
macro_rules! models {
    (
        $( $model:ident ),*
    ) => {{
        let mut builder = dorm::Db::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}

/// Opens an in-memory database, runs `sql` on it and wraps it in a `Db`.
pub fn setup_db(sql: &str) -> Db {
    setup_db_with(Db::builder(), sql)
}

/// Like [`setup_db`], registering the record types configured on `builder`.
pub fn setup_db_with(mut builder: Builder, sql: &str) -> Db {
    init_tracing();

    let connection = rusqlite::Connection::open_in_memory().unwrap();
    connection.execute_batch(sql).unwrap();

    builder
        .with_connection(Connection::from_rusqlite(connection))
        .unwrap()
}

/// Installs a subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
