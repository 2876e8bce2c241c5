use super::*;

/// Tests getting a registered user by email.
///
/// Expected: Ok(User) with matching email
#[tokio::test]
async fn finds_user_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user_with_email(db, "ada@example.com").await?;
    let encoder = FakePasswordEncoder;

    let user = UserService::new(db, &encoder)
        .get_user("ada@example.com")
        .await?;

    assert_eq!(user.id, created.id);

    Ok(())
}

/// Tests getting an unregistered email.
///
/// Expected: Err(AppError::NotFound("User not found"))
#[tokio::test]
async fn fails_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let encoder = FakePasswordEncoder;

    let result = UserService::new(db, &encoder)
        .get_user("nobody@example.com")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref message)) if message == "User not found"));

    Ok(())
}

/// Tests listing users.
///
/// Expected: Ok(Vec) ordered by email
#[tokio::test]
async fn lists_users_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "zoe@example.com").await?;
    factory::user::create_user_with_email(db, "ada@example.com").await?;
    let encoder = FakePasswordEncoder;

    let users = UserService::new(db, &encoder).get_users().await?;

    let emails: Vec<&str> = users.iter().map(|user| user.email.as_str()).collect();
    assert_eq!(emails, vec!["ada@example.com", "zoe@example.com"]);

    Ok(())
}
