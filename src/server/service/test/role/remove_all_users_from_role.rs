use super::*;

/// Tests clearing all members of a role.
///
/// Expected: Ok(Role) with an empty user list, also when reloaded
#[tokio::test]
async fn clears_all_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (role, _user) = factory::helpers::create_user_in_role(db, "ROLE_STAFF").await?;
    let second_user = factory::user::create_user(db).await?;
    factory::user::add_user_to_role(db, second_user.id, role.id).await?;

    let service = RoleService::new(db);
    let cleared = service.remove_all_users_from_role(role.id).await?;

    assert!(cleared.users.is_empty());
    assert!(service.find_by_name("ROLE_STAFF").await?.users.is_empty());

    Ok(())
}

/// Tests clearing a role that has no members.
///
/// Expected: Ok(Role) with an empty user list
#[tokio::test]
async fn succeeds_for_empty_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::role::create_role(db, "ROLE_STAFF").await?;

    let cleared = RoleService::new(db).remove_all_users_from_role(role.id).await?;

    assert!(cleared.users.is_empty());

    Ok(())
}

/// Tests clearing a role that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_nonexistent_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoleService::new(db).remove_all_users_from_role(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
