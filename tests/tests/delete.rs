use dorm::Model;
use std_util::prelude::*;
use tests::{setup_db, MOCK_USERS, USER_TABLE};

#[derive(Debug, Default, PartialEq, Model)]
struct User {
    pub full_name: String,
}

#[tokio::test]
async fn delete_is_idempotent() {
    let mut db = setup_db(USER_TABLE);

    let bob = User {
        full_name: "Bob Smith".to_string(),
    };

    assert_eq!(assert_ok!(db.delete(&bob).await), 1);
    assert_eq!(assert_ok!(db.delete(&bob).await), 0);

    let users = assert_ok!(db.find::<User>().await);
    assert_eq!(users.len(), MOCK_USERS.len() - 1);
    assert!(!users.contains(&bob));
}

#[tokio::test]
async fn delete_matches_any_column() {
    #[derive(Debug, Default, Model)]
    #[allow(non_snake_case)]
    struct User2 {
        pub FullName: String,
        pub EMail: String,
    }

    let mut db = setup_db(
        "CREATE TABLE user2 (full_name TEXT, e_mail TEXT);
         INSERT INTO user2 VALUES ('Test User1', ''), ('Frelicia', 'f@t'), ('Kyra', 'k@a');",
    );

    let template = User2 {
        FullName: "Test User1".to_string(),
        EMail: "f@t".to_string(),
    };
    assert_eq!(assert_ok!(db.delete(&template).await), 2);

    let remaining = assert_ok!(db.find::<User2>().await);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].FullName, "Kyra");
}

#[tokio::test]
async fn delete_created_record_by_key() {
    #[derive(Debug, Default, Model)]
    struct Account {
        #[dorm(primary_key)]
        pub id: i64,
        pub name: String,
    }

    let mut db = setup_db("CREATE TABLE account (id INTEGER PRIMARY KEY, name TEXT);");

    let mut a = Account {
        id: 0,
        name: "a".to_string(),
    };
    let mut b = Account {
        id: 0,
        name: "b".to_string(),
    };
    assert_ok!(db.create(&mut a).await);
    assert_ok!(db.create(&mut b).await);

    assert_eq!(assert_ok!(db.delete(&a).await), 1);

    let accounts = assert_ok!(db.find::<Account>().await);
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, b.id);
}
