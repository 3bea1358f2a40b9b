use super::*;

/// Tests admin detection with only regular users.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests admin detection once an admin exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_with_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.admin_exists().await?);

    Ok(())
}
