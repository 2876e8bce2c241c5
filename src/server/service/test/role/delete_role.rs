use super::*;

/// Tests deleting a role that has members.
///
/// Expected: Ok(()) with the role gone and the user no longer holding it
#[tokio::test]
async fn deletes_role_with_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (role, user) = factory::helpers::create_user_in_role(db, "ROLE_STAFF").await?;

    let service = RoleService::new(db);
    service.delete_role(role.id).await?;

    assert!(service.get_roles().await?.is_empty());
    let user = crate::server::data::user::UserRepository::new(db)
        .find_by_id(user.id)
        .await?
        .unwrap();
    assert!(user.roles.is_empty());

    Ok(())
}

/// Tests deleting a role that does not exist.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_nonexistent_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoleService::new(db).delete_role(999).await;

    assert!(result.is_ok());

    Ok(())
}
