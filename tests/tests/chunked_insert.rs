use bulkins::{Db, Record, Value};
use jiff::Timestamp;
use std_util::prelude::*;
use tests::{init_tracing, LoggingDriver, TickingClock};

#[derive(Debug, Clone, Default, Record)]
struct User {
    #[key]
    #[auto]
    id: i64,

    name: String,

    created_at: Timestamp,
}

fn users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User {
            name: format!("user-{i}"),
            ..User::default()
        })
        .collect()
}

async fn setup(driver: &LoggingDriver) -> Db {
    init_tracing();
    Db::builder()
        .clock(TickingClock::starting_at(1_000))
        .build(driver.clone())
        .await
        .unwrap()
}

/// Names bound by a statement, in order.
fn names(stmt: &bulkins::Statement) -> Vec<String> {
    stmt.params
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn every_record_lands_in_exactly_one_chunk() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;
    let mut log = driver.exec_log();

    let errors = db.insert_chunked(&users(7), 3).await;
    assert_empty!(errors);

    assert_eq!(log.len(), 3);

    let mut seen = vec![];
    let mut sizes = vec![];

    while let Some(stmt) = log.pop() {
        let chunk = names(&stmt);
        sizes.push(chunk.len());
        seen.extend(chunk);
    }

    assert_eq!(sizes, [3, 3, 1]);
    assert_eq!(seen, names_of(&users(7)));
}

#[tokio::test]
async fn exact_multiple_has_no_short_chunk() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;
    let log = driver.exec_log();

    assert_empty!(db.insert_chunked(&users(6), 3).await);

    assert_eq!(log.len(), 2);
    assert_eq!(
        log.texts()[0],
        r#"INSERT INTO "users" ("created_at", "name") VALUES (?1, ?2), (?3, ?4), (?5, ?6);"#
    );
}

#[tokio::test]
async fn chunk_size_larger_than_input_is_one_statement() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;

    assert_empty!(db.insert_chunked(&users(2), 100).await);
    assert_eq!(driver.exec_log().len(), 1);
}

#[tokio::test]
async fn failing_chunk_does_not_stop_the_rest() {
    let driver = LoggingDriver::sqlite().failing_at([1]);
    let db = setup(&driver).await;
    let log = driver.exec_log();

    let errors = db.insert_chunked(&users(6), 2).await;

    assert_eq!(errors.len(), 1);
    assert!(errors[0].root().is_execution_failed());
    assert_eq!(
        errors[0].to_string(),
        "chunk 2 of 3: execution failed: scripted failure of statement 1"
    );

    // Chunks 1 and 3 were still executed
    assert_eq!(log.len(), 3);
}

#[tokio::test]
async fn every_failure_is_reported_in_order() {
    let driver = LoggingDriver::sqlite().failing_at([0, 2]);
    let db = setup(&driver).await;

    let errors = db.insert_chunked(&users(5), 2).await;

    let messages: Vec<_> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        [
            "chunk 1 of 3: execution failed: scripted failure of statement 0",
            "chunk 3 of 3: execution failed: scripted failure of statement 2",
        ]
    );
}

#[tokio::test]
async fn mismatched_chunk_is_reported_and_skipped() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;

    let mut records = users(6);
    // Carries its key, so its row has an extra `id` column
    records[3].id = 10;

    let errors = db.insert_chunked(&records, 2).await;

    assert_eq!(errors.len(), 1);
    assert!(errors[0].root().is_schema_mismatch());
    assert_eq!(
        errors[0].to_string(),
        "chunk 2 of 3: schema mismatch at record 1: unexpected column `id`"
    );

    // The mismatched chunk never reached the connection
    assert_eq!(driver.exec_log().len(), 2);
}

#[tokio::test]
async fn zero_chunk_size_is_rejected() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;

    let errors = db.insert_chunked(&users(3), 0).await;

    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_invalid_chunk_size());
    assert!(driver.exec_log().is_empty());
}

#[tokio::test]
async fn empty_input_executes_nothing() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;

    assert_empty!(db.insert_chunked(&users(0), 3).await);
    assert!(driver.exec_log().is_empty());
}

#[tokio::test]
async fn each_chunk_has_its_own_timestamp() {
    let driver = LoggingDriver::sqlite();
    let db = setup(&driver).await;
    let mut log = driver.exec_log();

    assert_empty!(db.insert_chunked(&users(4), 2).await);

    for expected in [1_000, 1_001] {
        let stmt = log.pop().unwrap();
        let stamp = Value::Timestamp(TickingClock::at(expected));
        assert_eq!(stmt.params[0], stamp);
        assert_eq!(stmt.params[2], stamp);
    }
}

fn names_of(users: &[User]) -> Vec<String> {
    users.iter().map(|user| user.name.clone()).collect()
}
