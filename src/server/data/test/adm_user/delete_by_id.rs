use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(1) and the user is gone
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_adm_user(db).await?;
    let other = factory::create_adm_user(db).await?;

    let repo = AdmUserRepository::new(db);
    let rows = repo.delete_by_id(&user.user_code).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id(&user.user_code).await?.is_none());
    assert!(repo.exist_by_id(&other.user_code).await?);

    Ok(())
}

/// Tests deleting a code that is not stored.
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

    factory::create_adm_user(db).await?;

    let repo = AdmUserRepository::new(db);
    let rows = repo.delete_by_id("U999").await?;

    assert_eq!(rows, 0);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
