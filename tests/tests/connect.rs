use dorm::{Db, Model};
use dorm_core::driver::Dialect;
use std_util::prelude::*;

#[derive(Debug, Default, PartialEq, Model)]
struct Item {
    #[dorm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[tokio::test]
async fn connect_in_memory() {
    tests::init_tracing();

    let mut db = assert_ok!(Db::connect("sqlite::memory:").await);
    assert_eq!(db.capability().dialect, Dialect::Sqlite);

    let mut item = Item {
        id: 0,
        name: "widget".to_string(),
    };
    assert_ok!(db.create_table(&mut item).await);
    assert_eq!(assert_ok!(db.find::<Item>().await), [item]);

    assert_ok!(db.close().await);
}

#[tokio::test]
async fn file_database_outlives_the_connection() {
    tests::init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("dorm.db").display());

    let mut db = assert_ok!(Db::connect(&url).await);
    let mut item = Item {
        id: 0,
        name: "persisted".to_string(),
    };
    assert_ok!(db.create_table(&mut item).await);
    assert_ok!(db.close().await);

    let mut db = assert_ok!(Db::connect(&url).await);
    assert_eq!(assert_ok!(db.find::<Item>().await), [item]);
}

#[tokio::test]
async fn builder_connects_with_registered_types() {
    tests::init_tracing();

    let mut db = assert_ok!(
        tests::models!(Item)
            .table_name_prefix("app_")
            .connect("sqlite::memory:")
            .await
    );
    assert_ok!(db.push_schema().await);
    assert!(assert_ok!(db.find::<Item>().await).is_empty());
}

#[tokio::test]
async fn invalid_connection_urls() {
    let err = assert_err!(Db::connect("not a url").await);
    assert!(err.is_invalid_connection_url());

    let err = assert_err!(Db::connect("postgresql://localhost/dorm").await);
    assert!(err.is_invalid_connection_url());
}

#[tokio::test]
async fn grant_and_revoke_are_unsupported() {
    let mut db = tests::setup_db("");

    let err = assert_err!(db.grant::<Item>("reader").await);
    assert!(err.is_unsupported_feature());

    let err = assert_err!(db.revoke::<Item>("reader").await);
    assert!(err.is_unsupported_feature());
}
