use super::*;

/// Tests storing a new error log.
///
/// Verifies every field round-trips and that the log starts un-notified.
///
/// Expected: Ok with the log readable by id
#[tokio::test]
async fn creates_unnotified_log() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmErrorLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ErrorLogRepository::new(db);
    let created = repo
        .create("E0000000001".to_string(), param("boom"))
        .await?;

    assert_eq!(created.error_id, "E0000000001");
    assert_eq!(created.notified_yn, "N");

    let found = repo.find_by_id("E0000000001").await?.unwrap();
    assert_eq!(found.error_message, "boom");
    assert_eq!(found.client_ip.as_deref(), Some("192.168.0.7"));
    assert_eq!(found.login_id.as_deref(), Some("U001"));

    Ok(())
}

/// Tests looking up an error id that is not stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmErrorLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_error_log(db).await?;

    let repo = ErrorLogRepository::new(db);

    assert!(repo.find_by_id("E9999999999").await?.is_none());

    Ok(())
}
