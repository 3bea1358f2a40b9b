use super::*;

/// Tests a revoked token is reported as revoked and others are not.
///
/// Expected: is_revoked true only for the stored token
#[tokio::test]
async fn marks_token_revoked() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RevokedTokenRepository::new(db);
    repo.revoke("token-a", Utc::now() + Duration::minutes(30))
        .await?;

    assert!(repo.is_revoked("token-a").await?);
    assert!(!repo.is_revoked("token-b").await?);

    Ok(())
}

/// Tests revoking the same token twice stores it once.
///
/// Expected: Ok with a single row
#[tokio::test]
async fn ignores_repeated_revocation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RevokedTokenRepository::new(db);
    let expires_at = Utc::now() + Duration::minutes(30);
    repo.revoke("token-a", expires_at).await?;
    repo.revoke("token-a", expires_at).await?;

    assert_eq!(entity::prelude::RevokedToken::find().count(db).await?, 1);

    Ok(())
}
