use super::*;

/// Tests updating an existing user.
///
/// Expected: Ok(1) and the new name stored
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
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
    let rows = repo.update(adm_user("U001", "alicia")).await?;

    assert_eq!(rows, 1);
    assert_eq!(
        repo.find_by_id("U001").await?,
        Some(adm_user("U001", "alicia"))
    );

    Ok(())
}

/// Tests updating a code that is not stored.
///
/// Verifies the update is a no-op and does not create the row.
///
/// Expected: Ok(0)
#[tokio::test]
async fn missing_user_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdmUserRepository::new(db);
    let rows = repo.update(adm_user("U999", "ghost")).await?;

    assert_eq!(rows, 0);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
