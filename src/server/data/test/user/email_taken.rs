use super::*;

/// Tests an email held by another user is taken, but not by its own holder.
///
/// Expected: true for others, false when the holder is excluded
#[tokio::test]
async fn excludes_the_holder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("grace@example.com")
        .build()
        .await?;
    let other = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("grace@example.com", None).await?);
    assert!(repo.email_taken("grace@example.com", Some(other.id)).await?);
    assert!(!repo.email_taken("grace@example.com", Some(user.id)).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}
