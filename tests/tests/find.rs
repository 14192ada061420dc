use dorm::Model;
use std_util::prelude::*;
use tests::{setup_db, MOCK_USERS, USER_TABLE};

#[derive(Debug, Default, PartialEq, Model)]
struct User {
    pub full_name: String,
}

#[tokio::test]
async fn find_returns_every_row_in_order() {
    let mut db = setup_db(USER_TABLE);

    let users = assert_ok!(db.find::<User>().await);
    let names: Vec<_> = users.iter().map(|user| &user.full_name[..]).collect();

    assert_eq!(names, MOCK_USERS);
}

#[tokio::test]
async fn find_on_empty_table() {
    let mut db = setup_db("CREATE TABLE user (full_name TEXT);");

    let users = assert_ok!(db.find::<User>().await);
    assert!(users.is_empty());
}

#[tokio::test]
async fn all_marshals_lazily() {
    let mut db = setup_db(USER_TABLE);

    let mut cursor = assert_ok!(db.all::<User>().await);
    assert_eq!(cursor.remaining(), MOCK_USERS.len());

    let first = assert_ok!(cursor.next().unwrap());
    assert_eq!(first.full_name, "Alice Apple");
    assert_eq!(cursor.remaining(), MOCK_USERS.len() - 1);

    assert_eq!(cursor.count(), MOCK_USERS.len() - 1);
}

#[tokio::test]
async fn top_n_limits_rows() {
    let mut db = setup_db(USER_TABLE);

    let users = assert_ok!(db.top_n::<User>(2).await);
    assert_eq!(
        users,
        [
            User {
                full_name: "Alice Apple".to_string()
            },
            User {
                full_name: "Bob Smith".to_string()
            },
        ]
    );

    let users = assert_ok!(db.top_n::<User>(100).await);
    assert_eq!(users.len(), MOCK_USERS.len());

    let users = assert_ok!(db.top_n::<User>(0).await);
    assert!(users.is_empty());
}

#[tokio::test]
async fn stored_value_of_wrong_type() {
    #[derive(Debug, Default, Model)]
    struct Reading {
        pub label: String,
        pub value: f64,
    }

    let mut db = setup_db(
        "CREATE TABLE reading (label TEXT, value REAL);
         INSERT INTO reading VALUES ('ok', 1.5), ('bad', 'not a number');",
    );

    let err = assert_err!(db.find::<Reading>().await);
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        r#"failed to execute `SELECT * FROM "reading";`: cannot convert String to f64"#
    );
}
