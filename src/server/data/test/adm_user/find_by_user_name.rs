use super::*;

/// Tests finding every user sharing a name.
///
/// Verifies that exactly the users whose name matches are returned, ordered by
/// code, and users with other names are excluded.
///
/// Expected: Ok with two users in code order
#[tokio::test]
async fn finds_all_users_with_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (code, name) in [("U003", "alice"), ("U001", "alice"), ("U002", "bob")] {
        factory::adm_user::AdmUserFactory::new(db)
            .code(code)
            .name(name)
            .build()
            .await?;
    }

    let repo = AdmUserRepository::new(db);
    let result = repo.find_by_user_name("alice").await?;

    assert_eq!(
        result,
        vec![adm_user("U001", "alice"), adm_user("U003", "alice")]
    );

    Ok(())
}

/// Tests a name nobody has.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_adm_user(db).await?;

    let repo = AdmUserRepository::new(db);
    let result = repo.find_by_user_name("nobody").await?;

    assert!(result.is_empty());

    Ok(())
}
