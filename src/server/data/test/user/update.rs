use super::*;

/// Tests updating profile fields keeps the password and role.
///
/// Expected: Ok with new profile fields and the original hash and role
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: user.id,
            email: "new@example.com".to_string(),
            name: "New Name".to_string(),
            address: "2 Side St".to_string(),
            phone_number: "555-0199".to_string(),
        })
        .await?;

    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.address, "2 Side St");
    assert_eq!(updated.phone_number, "555-0199");
    assert_eq!(updated.password_hash, user.password);
    assert_eq!(updated.role, Role::Admin);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(UpdateUserParams {
            id: 999,
            email: "ghost@example.com".to_string(),
            name: "Ghost".to_string(),
            address: "-".to_string(),
            phone_number: "-".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
