use super::*;

/// Tests deleting a role that still has members.
///
/// Expected: Ok(()) with the role gone and the user no longer holding it
#[tokio::test]
async fn deletes_role_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (role, user) = factory::helpers::create_user_in_role(db, "ROLE_STAFF").await?;

    let repo = RoleRepository::new(db);
    repo.delete_by_id(role.id).await?;

    assert!(repo.find_by_id(role.id).await?.is_none());
    assert!(!repo.is_member(user.id, role.id).await?);

    Ok(())
}

/// Tests deleting a role that does not exist.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_nonexistent_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoleRepository::new(db).delete_by_id(999).await;

    assert!(result.is_ok());

    Ok(())
}
