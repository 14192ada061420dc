use dorm::Model;
use std_util::prelude::*;
use tests::{setup_db, USER_TABLE};

#[derive(Debug, Default, PartialEq, Model)]
struct User {
    pub full_name: String,
}

#[tokio::test]
async fn first_loads_the_first_row() {
    let mut db = setup_db(USER_TABLE);

    let mut user = User::default();
    assert!(assert_ok!(db.first(&mut user).await));
    assert_eq!(user.full_name, "Alice Apple");
}

#[tokio::test]
async fn first_on_empty_table_leaves_record_untouched() {
    let mut db = setup_db("CREATE TABLE user (full_name TEXT);");

    let mut user = User {
        full_name: "unchanged".to_string(),
    };
    assert!(!assert_ok!(db.first(&mut user).await));
    assert_eq!(user.full_name, "unchanged");
}
