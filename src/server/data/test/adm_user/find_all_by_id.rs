use super::*;

/// Expected: Ok with the known users in code order, unknown codes skipped
#[tokio::test]
async fn finds_known_codes_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdmUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for code in ["U002", "U001", "U003"] {
        factory::adm_user::AdmUserFactory::new(db)
            .code(code)
            .build()
            .await?;
    }

    let codes = vec!["U003".to_string(), "U404".to_string(), "U001".to_string()];
    let users = AdmUserRepository::new(db).find_all_by_id(&codes).await?;

    assert_eq!(
        users.iter().map(|u| u.code.as_str()).collect::<Vec<_>>(),
        vec!["U001", "U003"]
    );

    Ok(())
}
