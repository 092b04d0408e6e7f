use super::*;

/// Tests allocating codes from a fresh counter.
///
/// Expected: consecutive zero-padded codes starting at 1
#[tokio::test]
async fn allocates_sequential_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SerialNo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SerialRepository::new(db);

    assert_eq!(repo.next_code(SerialName::ErrorId).await?, "E0000000001");
    assert_eq!(repo.next_code(SerialName::ErrorId).await?, "E0000000002");
    assert_eq!(repo.next_value(SerialName::ErrorId).await?, 3);

    Ok(())
}

/// Tests that an allocation made in a rolled back transaction is released.
///
/// Expected: the next committed allocation reuses the value
#[tokio::test]
async fn rollback_releases_allocation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SerialNo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SerialRepository::new(db).next_value(SerialName::ErrorId).await?;

    let txn = db.begin().await?;
    let inside = SerialRepository::new(&txn)
        .next_value(SerialName::ErrorId)
        .await?;
    txn.rollback().await?;

    let after = SerialRepository::new(db)
        .next_value(SerialName::ErrorId)
        .await?;

    assert_eq!(inside, 2);
    assert_eq!(after, 2);

    Ok(())
}

/// Tests continuing a counter that already has a stored value.
///
/// Expected: the stored value is incremented
#[tokio::test]
async fn continues_existing_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SerialNo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    entity::serial_no::ActiveModel {
        serial_name: ActiveValue::Set("ERROR_ID".to_string()),
        current_value: ActiveValue::Set(41),
        updated_at: ActiveValue::Set(chrono::Utc::now()),
    }
    .insert(db)
    .await?;

    let code = SerialRepository::new(db)
        .next_code(SerialName::ErrorId)
        .await?;

    assert_eq!(code, "E0000000042");

    Ok(())
}

/// Tests that an allocation is a single traced upsert.
///
/// Expected: one `serial_no` statement recorded per allocation
#[tokio::test]
async fn records_one_statement_per_allocation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SerialNo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let trace = TraceContext::new(TraceConfig {
        sql_enabled: true,
        rest_enabled: false,
    });

    let repo = SerialRepository::new(db).traced(trace.clone());
    repo.next_value(SerialName::ErrorId).await?;
    repo.next_value(SerialName::ErrorId).await?;

    let traced = trace
        .attach(ApiResultEntity::success(()))
        .sql_tracer
        .unwrap_or_default();

    assert_eq!(traced.len(), 2);
    assert!(traced
        .iter()
        .all(|tracer| tracer.sql.contains("serial_no") && tracer.sql.contains("ON CONFLICT")));

    Ok(())
}
