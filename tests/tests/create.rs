use dorm::{Db, Model};
use dorm_core::{
    async_trait,
    driver::{Capability, Connection, Dialect, Operation, Response},
};
use std_util::prelude::*;
use tests::{setup_db, USER_TABLE};

#[derive(Debug, Default, PartialEq, Model)]
struct User {
    pub full_name: String,
}

#[derive(Debug, Default, PartialEq, Model)]
#[allow(non_snake_case)]
struct Account {
    #[dorm(primary_key)]
    pub ID: i64,
    pub FullName: String,
    pub EMail: String,
}

const ACCOUNT_TABLE: &str =
    "CREATE TABLE account (id INTEGER PRIMARY KEY, full_name TEXT, e_mail TEXT);";

#[tokio::test]
async fn create_without_primary_key() {
    let mut db = setup_db(USER_TABLE);

    let mut user = User {
        full_name: "Frelicia".to_string(),
    };
    assert_ok!(db.create(&mut user).await);

    let users = assert_ok!(db.find::<User>().await);
    assert_eq!(users.len(), 7);
    assert_eq!(users.last(), Some(&user));
}

#[tokio::test]
async fn create_writes_back_the_generated_key() {
    let mut db = setup_db(ACCOUNT_TABLE);

    let mut alice = Account {
        ID: 0,
        FullName: "Alice Apple".to_string(),
        EMail: "alice@example.com".to_string(),
    };
    assert_ok!(db.create(&mut alice).await);
    assert_eq!(alice.ID, 1);

    // The caller-supplied key is discarded.
    let mut bob = Account {
        ID: 42,
        FullName: "Bob Smith".to_string(),
        EMail: "bob@example.com".to_string(),
    };
    assert_ok!(db.create(&mut bob).await);
    assert_eq!(bob.ID, 2);

    let accounts = assert_ok!(db.find::<Account>().await);
    assert_eq!(accounts, [alice, bob]);
}

#[tokio::test]
async fn create_only_primary_key() {
    #[derive(Debug, Default, Model)]
    struct Counter {
        #[dorm(primary_key)]
        pub id: i64,
    }

    let mut db = setup_db("CREATE TABLE counter (id INTEGER PRIMARY KEY);");

    let mut counter = Counter::default();
    assert_ok!(db.create(&mut counter).await);
    assert_ok!(db.create(&mut counter).await);
    assert_eq!(counter.id, 2);
}

#[tokio::test]
async fn primary_key_must_hold_any_row_id() {
    #[derive(Debug, Default, Model)]
    struct Tiny {
        #[dorm(primary_key)]
        pub id: u8,
        pub name: String,
    }

    let mut db = setup_db(
        "CREATE TABLE tiny (id INTEGER PRIMARY KEY, name TEXT);
         INSERT INTO tiny VALUES (255, 'last');",
    );

    let mut tiny = Tiny {
        id: 0,
        name: "next".to_string(),
    };
    let err = assert_err!(db.create(&mut tiny).await);
    assert!(err.is_invalid_schema());

    // Nothing was written.
    let count = assert_ok!(db.execute("DELETE FROM tiny WHERE name = 'next'").await);
    assert_eq!(count, 0);
}

#[tokio::test]
async fn wide_integer_fields() {
    #[derive(Debug, Default, PartialEq, Model)]
    struct Counters {
        pub big: u64,
        pub size: usize,
        pub delta: isize,
    }

    let mut db = setup_db("CREATE TABLE counters (big INTEGER, size INTEGER, delta INTEGER);");

    let mut counters = Counters {
        big: i64::MAX as u64,
        size: 3,
        delta: -2,
    };
    assert_ok!(db.create(&mut counters).await);
    assert_eq!(assert_ok!(db.find::<Counters>().await), [counters]);

    // SQLite integers are signed 64-bit.
    let mut overflow = Counters {
        big: u64::MAX,
        ..Counters::default()
    };
    let err = assert_err!(db.create(&mut overflow).await);
    assert!(err.is_execution());
    assert_eq!(assert_ok!(db.find::<Counters>().await).len(), 1);
}

static NO_ROW_ID: Capability = Capability {
    dialect: Dialect::Sqlite,
    last_insert_id: false,
};

/// A store that does not report assigned row identifiers.
#[derive(Debug)]
struct NoRowId(dorm_driver_sqlite::Connection);

#[async_trait]
impl Connection for NoRowId {
    fn capability(&self) -> &'static Capability {
        &NO_ROW_ID
    }

    async fn exec(&mut self, op: Operation) -> dorm::Result<Response> {
        self.0.exec(op).await
    }
}

#[tokio::test]
async fn keyed_create_requires_row_ids() {
    let connection = dorm_driver_sqlite::Connection::in_memory().unwrap();
    let mut db = Db::new(NoRowId(connection));
    assert_ok!(db.execute(ACCOUNT_TABLE).await);
    assert_ok!(db.execute("CREATE TABLE user (full_name TEXT)").await);

    let mut account = Account {
        ID: 0,
        FullName: "Carol Crisp".to_string(),
        EMail: "carol@example.com".to_string(),
    };
    let err = assert_err!(db.create(&mut account).await);
    assert!(err.is_unsupported_feature());
    assert!(assert_ok!(db.find::<Account>().await).is_empty());

    // Record types without a key do not need the row identifier.
    let mut user = User {
        full_name: "Carol Crisp".to_string(),
    };
    assert_ok!(db.create(&mut user).await);
    assert_eq!(assert_ok!(db.find::<User>().await), [user]);
}
