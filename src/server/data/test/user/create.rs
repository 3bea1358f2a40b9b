use super::*;

/// Tests creating a user stores the role as text.
///
/// Expected: Ok with role `USER` in the database
#[tokio::test]
async fn creates_user_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(record("ada@example.com")).await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.password_hash, "hash");

    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(db_user.role, "USER");

    Ok(())
}

/// Tests the schema rejects a duplicate email.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(record("ada@example.com")).await?;

    assert!(repo.create(record("ada@example.com")).await.is_err());

    Ok(())
}
