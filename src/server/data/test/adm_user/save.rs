use super::*;

/// Tests saving a user that does not exist yet.
///
/// Expected: Ok with the user inserted
#[tokio::test]
async fn creates_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdmUserRepository::new(db);
    let saved = repo.save(adm_user("U001", "alice")).await?;

    assert_eq!(saved, adm_user("U001", "alice"));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests saving the same code twice.
///
/// Verifies create-or-replace semantics: a single row remains and it holds the
/// latest name.
///
/// Expected: Ok with one row named "alicia"
#[tokio::test]
async fn replaces_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdmUserRepository::new(db);
    repo.save(adm_user("U001", "alice")).await?;
    let saved = repo.save(adm_user("U001", "alicia")).await?;

    assert_eq!(saved.name, "alicia");
    assert_eq!(entity::prelude::AdmUser::find().count(db).await?, 1);
    assert_eq!(
        repo.find_by_id("U001").await?,
        Some(adm_user("U001", "alicia"))
    );

    Ok(())
}

/// Tests that inserting a duplicate code is refused while save is not.
///
/// Expected: Err from insert, Ok from save
#[tokio::test]
async fn insert_rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdmUserRepository::new(db);
    repo.insert(adm_user("U001", "alice")).await?;

    assert!(repo.insert(adm_user("U001", "bob")).await.is_err());
    assert!(repo.save(adm_user("U001", "bob")).await.is_ok());

    Ok(())
}
