use super::*;

/// Tests looking a user up by email.
///
/// Expected: Ok(Some) for a registered email, Ok(None) otherwise
#[tokio::test]
async fn finds_registered_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("grace@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("grace@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
