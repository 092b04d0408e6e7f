use super::*;

/// Tests flagging an existing log as notified.
///
/// Expected: Ok(1) and notified_yn becomes "Y"
#[tokio::test]
async fn flags_existing_log() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmErrorLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let log = factory::create_error_log(db).await?;

    let repo = ErrorLogRepository::new(db);
    let rows = repo.mark_notified(&log.error_id).await?;

    assert_eq!(rows, 1);
    assert_eq!(
        repo.find_by_id(&log.error_id).await?.unwrap().notified_yn,
        "Y"
    );

    Ok(())
}

/// Tests flagging a log that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn missing_log_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmErrorLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ErrorLogRepository::new(db);

    assert_eq!(repo.mark_notified("E9999999999").await?, 0);

    Ok(())
}

/// Tests that flagging a log is recorded in the SQL trace.
///
/// Expected: one UPDATE on `adm_error_log`
#[tokio::test]
async fn records_traced_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmErrorLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let trace = TraceContext::new(TraceConfig {
        sql_enabled: true,
        rest_enabled: false,
    });

    let log = factory::create_error_log(db).await?;

    ErrorLogRepository::new(db)
        .traced(trace.clone())
        .mark_notified(&log.error_id)
        .await?;

    let traced = trace
        .attach(ApiResultEntity::success(()))
        .sql_tracer
        .unwrap_or_default();

    assert_eq!(traced.len(), 1);
    assert!(traced[0].sql.starts_with("UPDATE \"adm_error_log\""));

    Ok(())
}
