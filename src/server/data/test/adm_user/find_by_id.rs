use super::*;

/// Tests finding an existing user by code.
///
/// Verifies that the repository returns the stored user converted to the
/// domain model.
///
/// Expected: Ok(Some(AdmUser))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::adm_user::AdmUserFactory::new(db)
        .code("U001")
        .name("alice")
        .build()
        .await?;

    let repo = AdmUserRepository::new(db);
    let result = repo.find_by_id("U001").await?;

    assert_eq!(result, Some(adm_user("U001", "alice")));

    Ok(())
}

/// Tests looking up a code that is not stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_adm_user(db).await?;

    let repo = AdmUserRepository::new(db);
    let result = repo.find_by_id("U999").await?;

    assert!(result.is_none());
    assert!(!repo.exist_by_id("U999").await?);

    Ok(())
}

/// Tests that lookups are recorded when SQL tracing is enabled.
///
/// Expected: one trace entry whose data holds the found row
#[tokio::test]
async fn records_statement_when_tracing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::adm_user::AdmUserFactory::new(db)
        .code("U001")
        .build()
        .await?;

    let trace = TraceContext::new(TraceConfig {
        sql_enabled: true,
        rest_enabled: false,
    });
    let repo = AdmUserRepository::new(db).traced(trace.clone());
    repo.find_by_id("U001").await?;

    let entity = trace.attach(crate::model::api::ApiResultEntity::success(()));
    let tracers = entity.sql_tracer.unwrap();

    assert_eq!(tracers.len(), 1);
    assert!(tracers[0].sql.contains("adm_user"));
    assert_eq!(
        tracers[0].data.as_ref().unwrap()["user_code"],
        serde_json::json!("U001")
    );

    Ok(())
}
