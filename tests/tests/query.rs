use dorm::Model;
use std_util::prelude::*;
use tests::{setup_db, USER_TABLE};

#[derive(Debug, Default, PartialEq, Model)]
struct User {
    pub full_name: String,
}

#[tokio::test]
async fn query_runs_sql_verbatim() {
    let mut db = setup_db(USER_TABLE);

    let users = assert_ok!(
        db.query::<User>("SELECT full_name FROM user WHERE full_name LIKE '%Smith' OR full_name LIKE 'Carol%'")
            .await
    );
    let names: Vec<_> = users.iter().map(|user| &user.full_name[..]).collect();
    assert_eq!(names, ["Bob Smith", "Carol Crisp"]);
}

#[tokio::test]
async fn malformed_query_is_an_execution_error() {
    let mut db = setup_db(USER_TABLE);

    let err = assert_err!(db.query::<User>("SELEC * FROM user").await);
    assert!(err.is_execution());
    assert!(err.to_string().starts_with("failed to execute `SELEC * FROM user`"));
}

#[tokio::test]
async fn query_with_wrong_column_count_is_a_shape_error() {
    let mut db = setup_db(USER_TABLE);

    let err = assert_err!(
        db.query::<User>("SELECT full_name, full_name FROM user")
            .await
    );
    assert!(err.is_shape());
}

#[tokio::test]
async fn execute_reports_affected_rows() {
    let mut db = setup_db(USER_TABLE);

    let count = assert_ok!(
        db.execute("UPDATE user SET full_name = 'Anonymous' WHERE full_name LIKE 'A%' OR full_name LIKE 'B%'")
            .await
    );
    assert_eq!(count, 2);

    let users = assert_ok!(db.query::<User>("SELECT * FROM user WHERE full_name = 'Anonymous'").await);
    assert_eq!(users.len(), 2);
}
