use super::*;

/// Tests only lapsed revocations are purged.
///
/// Expected: Ok(1) with the live revocation kept
#[tokio::test]
async fn removes_only_expired_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RevokedTokenRepository::new(db);
    let now = Utc::now();
    repo.revoke("expired", now - Duration::minutes(5)).await?;
    repo.revoke("live", now + Duration::minutes(5)).await?;

    let purged = repo.purge_expired(now).await?;

    assert_eq!(purged, 1);
    assert!(!repo.is_revoked("expired").await?);
    assert!(repo.is_revoked("live").await?);

    Ok(())
}
