use super::*;

/// Tests creating a new counter record.
///
/// Expected: Ok with the record persisted as text
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_counter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRecordRepository::new(db);
    let record = repo
        .upsert(UpsertCounterRecordParam {
            name: "last_reset_at".to_string(),
            value: "1700000000".to_string(),
        })
        .await?;

    assert_eq!(record.name, "last_reset_at");
    assert_eq!(record.value, "1700000000");

    let stored = entity::prelude::CounterRecord::find_by_id("last_reset_at".to_string())
        .one(db)
        .await?;

    assert!(stored.is_some());
    assert_eq!(stored.unwrap().value, "1700000000");

    Ok(())
}

/// Tests overwriting an existing counter record.
///
/// Verifies that writing the same name twice keeps a single row holding the
/// latest value.
///
/// Expected: Ok with one row and the new value
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_counter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRecordRepository::new(db);
    let first = repo
        .upsert(UpsertCounterRecordParam {
            name: "display_message_id".to_string(),
            value: "111111111".to_string(),
        })
        .await?;

    // Wait a moment to ensure timestamp difference
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let second = repo
        .upsert(UpsertCounterRecordParam {
            name: "display_message_id".to_string(),
            value: "222222222".to_string(),
        })
        .await?;

    assert_eq!(second.value, "222222222");
    assert!(second.updated_at > first.updated_at);

    let count = entity::prelude::CounterRecord::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
