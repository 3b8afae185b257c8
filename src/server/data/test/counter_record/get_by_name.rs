use super::*;

/// Tests reading a record that was never written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_counter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRecordRepository::new(db);
    let result = repo.get_by_name("last_reset_at").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests reading a stored record by name.
///
/// Verifies that only the requested record is returned when several exist.
///
/// Expected: Ok(Some) with the stored text value
#[tokio::test]
async fn returns_record_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_counter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRecordRepository::new(db);
    repo.upsert(UpsertCounterRecordParam {
        name: "last_reset_at".to_string(),
        value: "1700000000".to_string(),
    })
    .await?;
    repo.upsert(UpsertCounterRecordParam {
        name: "display_message_id".to_string(),
        value: "987654321".to_string(),
    })
    .await?;

    let record = repo.get_by_name("display_message_id").await?.unwrap();

    assert_eq!(record.name, "display_message_id");
    assert_eq!(record.value, "987654321");

    Ok(())
}
