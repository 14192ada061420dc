use dorm::{
    stmt::{Type, Value, ValueRecord},
    Model,
};
use dorm_core::schema::{Column, Table};
use std_util::prelude::*;
use tests::{models, setup_db, setup_db_with};

#[derive(Debug, Default, Model)]
struct UserComment {
    pub body: String,
}

#[derive(Debug, Default, PartialEq, Model)]
#[allow(non_snake_case)]
struct User2 {
    id: i64,
    pub FullName: String,
    pub EMail: String,
}

#[derive(Debug, Default, PartialEq, Model)]
#[dorm(table = "people")]
struct Person {
    #[dorm(primary_key)]
    pub id: i64,

    #[dorm(column = "display")]
    pub name: String,

    pub r#type: String,
}

#[test]
fn table_name_is_snake_case() {
    assert_eq!(assert_ok!(dorm::table_name::<UserComment>()), "user_comment");
    assert_eq!(assert_ok!(dorm::table_name::<User2>()), "user2");
}

#[test]
fn only_public_fields_are_columns() {
    assert_eq!(
        assert_ok!(dorm::column_names::<User2>()),
        ["full_name", "e_mail"]
    );

    let table = assert_ok!(User2::schema());
    assert_eq!(table.primary_key, None);
}

#[test]
fn attribute_overrides() {
    let table = assert_ok!(Person::schema());

    assert_eq!(table.name, "people");
    assert_eq!(table.column_names().collect::<Vec<_>>(), ["id", "display", "type"]);
    assert_eq!(table.primary_key, Some(0));
    assert_eq!(table.columns[0].ty, Type::I64);
}

#[test]
fn values_follow_column_order() {
    let user = User2 {
        id: 9,
        FullName: "Alice Apple".to_string(),
        EMail: "alice@example.com".to_string(),
    };

    assert_eq!(
        user.values(),
        ValueRecord::from_vec(vec![
            Value::from("Alice Apple"),
            Value::from("alice@example.com"),
        ])
    );
}

#[test]
fn load_checks_record_width() {
    let err = assert_err!(User2::load(ValueRecord::from_vec(vec![Value::from("x")])));
    assert!(err.is_shape());
}

#[test]
fn load_names_the_failing_field() {
    let err = assert_err!(Person::load(ValueRecord::from_vec(vec![
        Value::I64(1),
        Value::I64(2),
        Value::from("admin"),
    ])));

    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "failed to load `Person::name`: cannot convert I64 to String"
    );
}

#[tokio::test]
async fn overridden_names_reach_the_store() {
    let mut db = setup_db_with(models!(Person), "");
    assert_ok!(db.push_schema().await);

    let mut person = Person {
        id: 0,
        name: "Devon Donald".to_string(),
        r#type: "admin".to_string(),
    };
    assert_ok!(db.create(&mut person).await);

    let people = assert_ok!(
        db.query::<Person>("SELECT id, display, type FROM people")
            .await
    );
    assert_eq!(people, [person]);
}

struct TwoKeys;

impl Model for TwoKeys {
    fn schema() -> dorm::Result<Table> {
        Table::new(
            "TwoKeys",
            vec![
                Column::new("a", Type::I64).primary_key(),
                Column::new("b", Type::I64).primary_key(),
            ],
        )
    }

    fn load(_row: ValueRecord) -> dorm::Result<Self> {
        Ok(TwoKeys)
    }

    fn values(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![Value::I64(0), Value::I64(0)])
    }

    fn set_primary_key(&mut self, _value: Value) -> dorm::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn invalid_schema_is_reported_on_build() {
    let connection = dorm_driver_sqlite::Connection::in_memory().unwrap();

    let err = assert_err!(models!(TwoKeys).with_connection(connection));
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: `TwoKeys` has more than one primary key: `a` and `b`"
    );
}

#[tokio::test]
async fn invalid_schema_is_reported_on_use() {
    let mut db = setup_db("");

    let err = assert_err!(db.find::<TwoKeys>().await.map(|_| ()));
    assert!(err.is_invalid_schema());
}
