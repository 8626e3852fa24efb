use bulkins::{Capability, Db, FieldDef, Model, Record, Value};
use jiff::Timestamp;
use serde_json::json;
use std_util::prelude::*;
use tests::{init_tracing, LoggingDriver, TickingClock};

#[derive(Debug, Clone, Default, Record)]
#[table = "people"]
struct Person {
    name: String,
    updated_at: Timestamp,
}

fn person(name: &str) -> Person {
    Person {
        name: name.to_string(),
        ..Person::default()
    }
}

async fn setup(driver: &LoggingDriver) -> Db {
    init_tracing();
    Db::builder()
        .clock(TickingClock::starting_at(0))
        .build(driver.clone())
        .await
        .unwrap()
}

#[tokio::test]
async fn insert_executes_one_statement() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;
    let mut log = driver.exec_log();

    let count = assert_ok!(db.insert(&[person("a"), person("b"), person("c")]).await);
    assert_eq!(count, 3);

    let stmt = log.pop().unwrap();
    assert_eq!(
        stmt.text,
        r#"INSERT INTO "people" ("name", "updated_at") VALUES (?1, ?2), (?3, ?4), (?5, ?6);"#
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn empty_insert_is_a_no_op() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;

    let records: Vec<Person> = vec![];
    assert_eq!(assert_ok!(db.insert(&records).await), 0);
    assert!(driver.exec_log().is_empty());
}

#[tokio::test]
async fn execution_failure_is_returned() {
    let driver = LoggingDriver::sqlite().failing_at([0]);
    let db = setup(&driver).await;

    let err = assert_err!(db.insert(&[person("a")]).await);
    assert!(err.is_execution_failed());
}

#[tokio::test]
async fn prepare_does_not_execute() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;

    let stmt = assert_ok!(db.prepare(&[person("a")])).unwrap();
    assert_eq!(
        stmt.params,
        [Value::from("a"), Value::Timestamp(TickingClock::at(0))]
    );
    assert!(driver.exec_log().is_empty());
}

#[tokio::test]
async fn insert_option_layers() {
    let driver = LoggingDriver::sqlite();
    init_tracing();

    let db = Db::builder()
        .insert_option("ON CONFLICT DO NOTHING")
        .build(driver.clone())
        .await
        .unwrap();
    let log = driver.exec_log();

    assert_eq!(db.insert_option(), Some("ON CONFLICT DO NOTHING"));
    assert_ok!(db.insert(&[person("a")]).await);

    let plain = db.without_insert_option();
    assert_ok!(plain.insert(&[person("b")]).await);

    let replace = plain.with_insert_option("ON CONFLICT (name) DO UPDATE SET name = excluded.name");
    assert_ok!(replace.insert(&[person("c")]).await);

    // The original handle is unchanged
    assert_ok!(db.insert(&[person("d")]).await);

    let texts = log.texts();
    assert!(texts[0].ends_with(") ON CONFLICT DO NOTHING;"), "{}", texts[0]);
    assert!(texts[1].ends_with(");"), "{}", texts[1]);
    assert!(
        texts[2].ends_with(") ON CONFLICT (name) DO UPDATE SET name = excluded.name;"),
        "{}",
        texts[2]
    );
    assert!(texts[3].ends_with(") ON CONFLICT DO NOTHING;"), "{}", texts[3]);
}

#[tokio::test]
async fn capability_comes_from_the_driver() {
    let driver = LoggingDriver::new(&Capability::POSTGRESQL);
    let db = setup(&driver).await;

    assert_eq!(db.capability(), &Capability::POSTGRESQL);

    let stmt = assert_ok!(db.prepare(&[person("a")])).unwrap();
    assert_eq!(
        stmt.text,
        r#"INSERT INTO "people" ("name", "updated_at") VALUES ($1, $2);"#
    );
}

#[tokio::test]
async fn insert_json() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;
    let mut log = driver.exec_log();

    let model = Model::new("Tag", "tags")
        .field(FieldDef::new("label"))
        .field(FieldDef::new("weight"));

    let records = json!([
        { "label": "rust", "weight": 2 },
        { "label": "sql", "weight": 1.5 },
    ]);

    assert_eq!(assert_ok!(db.insert_json(&model, &records).await), 2);

    let stmt = log.pop().unwrap();
    assert_eq!(
        stmt.text,
        r#"INSERT INTO "tags" ("label", "weight") VALUES (?1, ?2), (?3, ?4);"#
    );
    assert_eq!(
        stmt.params,
        [
            Value::from("rust"),
            Value::I64(2),
            Value::from("sql"),
            Value::F64(1.5),
        ]
    );
}

#[tokio::test]
async fn insert_json_rejects_non_arrays() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;

    let model = Model::new("Tag", "tags").field(FieldDef::new("label"));

    let err = assert_err!(db.insert_json(&model, &json!({ "label": "rust" })).await);
    assert!(err.is_not_a_sequence());

    let errors = db
        .insert_json_chunked(&model, &json!({ "label": "rust" }), 10)
        .await;
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_not_a_sequence());

    assert!(driver.exec_log().is_empty());
}

#[tokio::test]
async fn insert_json_chunked_reports_bad_elements() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;

    let model = Model::new("Tag", "tags").field(FieldDef::new("label"));
    let records = json!([{ "label": "a" }, { "label": "b" }, 3, { "label": "d" }]);

    let errors = db.insert_json_chunked(&model, &records, 2).await;

    assert_eq!(errors.len(), 1);
    assert!(errors[0].root().is_invalid_input_kind());
    assert_eq!(driver.exec_log().len(), 1);
}

#[tokio::test]
async fn connect_rejects_bad_urls() {
    let err = assert_err!(Db::builder().connect("not a url").await);
    assert!(err.is_invalid_connection_url());

    let err = assert_err!(Db::builder().connect("postgresql://localhost/app").await);
    assert!(err.is_invalid_connection_url());
    assert_eq!(
        err.to_string(),
        "cannot connect to `postgresql://localhost/app`: unsupported database `postgresql`"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn handles_share_the_connection() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;

    let tasks: Vec<_> = (0..4)
        .map(|i| {
            let db = db.clone();
            tokio::spawn(async move {
                let records = vec![person(&format!("{i}-a")), person(&format!("{i}-b"))];
                db.insert(&records).await
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(assert_ok!(task.await.unwrap()), 2);
    }

    // Every statement stamps both rows with one timestamp of its own
    let log = driver.exec_log();
    assert_eq!(log.len(), 4);

    let mut log = log;
    let mut stamps = vec![];
    while let Some(stmt) = log.pop() {
        assert_eq!(stmt.params[1], stmt.params[3]);
        stamps.push(stmt.params[1].clone());
    }

    stamps.dedup();
    assert_eq!(stamps.len(), 4);
}
