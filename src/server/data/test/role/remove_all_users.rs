use super::*;

/// Tests clearing every member of a role.
///
/// Verifies that memberships in other roles are untouched.
///
/// Expected: Ok(()) with the role empty and the other role unchanged
#[tokio::test]
async fn clears_members_of_role_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (role, user) = factory::helpers::create_user_in_role(db, "ROLE_STAFF").await?;
    let second_user = factory::user::create_user(db).await?;
    factory::user::add_user_to_role(db, second_user.id, role.id).await?;
    let other_role = factory::role::create_role(db, "ROLE_USER").await?;
    factory::user::add_user_to_role(db, user.id, other_role.id).await?;

    let repo = RoleRepository::new(db);
    repo.remove_all_users(role.id).await?;

    assert!(repo.find_by_id(role.id).await?.unwrap().users.is_empty());
    assert_eq!(repo.find_by_id(other_role.id).await?.unwrap().users.len(), 1);

    Ok(())
}
