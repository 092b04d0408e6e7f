use super::*;

/// Tests paging through users.
///
/// Verifies pages are cut in code order and the total counts every user.
///
/// Expected: Ok with the second page holding the last user
#[tokio::test]
async fn pages_users_in_code_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for code in ["U003", "U001", "U002"] {
        factory::adm_user::AdmUserFactory::new(db)
            .code(code)
            .build()
            .await?;
    }

    let repo = AdmUserRepository::new(db);
    let (first, total) = repo.find_page(0, 2).await?;
    let (second, _) = repo.find_page(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|u| u.code.as_str()).collect::<Vec<_>>(),
        vec!["U001", "U002"]
    );
    assert_eq!(
        second.iter().map(|u| u.code.as_str()).collect::<Vec<_>>(),
        vec!["U003"]
    );
    assert_eq!(repo.find_all().await?.len(), 3);

    Ok(())
}
