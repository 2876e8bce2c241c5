use super::*;

/// Tests finding an existing role.
///
/// Expected: Ok(Role) with its member
#[tokio::test]
async fn finds_existing_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (role, user) = factory::helpers::create_user_in_role(db, "ROLE_USER").await?;

    let found = RoleService::new(db).find_by_name("ROLE_USER").await?;

    assert_eq!(found.id, role.id);
    assert!(found.has_user(user.id));

    Ok(())
}

/// Tests finding a role that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoleService::new(db).find_by_name("ROLE_GHOST").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
