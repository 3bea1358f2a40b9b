use super::*;

/// Tests storing a new password hash.
///
/// Expected: Ok with the hash replaced
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.id, "new-hash".to_string()).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}

/// Tests a missing user is reported.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update_password(999, "hash".to_string()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
