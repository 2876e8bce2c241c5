use super::*;

/// Tests that a bare name is upper-cased and prefixed.
///
/// Expected: Ok(Role) named "ROLE_MANAGER"
#[tokio::test]
async fn normalizes_role_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role = RoleService::new(db).create_role("manager").await?;

    assert_eq!(role.name, "ROLE_MANAGER");

    Ok(())
}

/// Tests that an already prefixed name is not prefixed twice.
///
/// Expected: Ok(Role) named "ROLE_AUDITOR"
#[tokio::test]
async fn keeps_existing_prefix() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role = RoleService::new(db).create_role("ROLE_AUDITOR").await?;

    assert_eq!(role.name, "ROLE_AUDITOR");

    Ok(())
}

/// Tests creating a role whose normalized name already exists.
///
/// Expected: Err(AppError::AlreadyExists) and a single stored role
#[tokio::test]
async fn fails_for_existing_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RoleService::new(db);
    service.create_role("admin").await?;
    let result = service.create_role("Admin").await;

    assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    assert_eq!(service.get_roles().await?.len(), 1);

    Ok(())
}
