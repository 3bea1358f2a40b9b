use super::*;

mod require_admin;

/// Tests an empty permission list only authenticates.
///
/// Expected: Ok(CurrentUser) for a regular user
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = factory::user::create_user(db).await?;
    let headers = bearer(&token_for(&jwt, user.clone()));

    let current = AuthGuard::new(db, &jwt, &headers).require(&[]).await?;

    assert_eq!(current.id, user.id);
    assert_eq!(current.email, user.email);
    assert_eq!(current.role, Role::User);

    Ok(())
}

/// Tests a request without a token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert_auth_error(result, |e| matches!(e, AuthError::MissingToken));

    Ok(())
}

/// Tests tokens signed with another secret, garbage, and expired tokens.
///
/// Expected: Err(AuthError::InvalidToken) for each
#[tokio::test]
async fn fails_for_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = factory::user::create_user(db).await?;
    let foreign = token_for(&JwtService::new("other-secret", 60), user.clone());
    let expired = token_for(&JwtService::new("test-secret", -5), user);

    for token in [foreign.as_str(), "not-a-jwt", expired.as_str()] {
        let headers = bearer(token);
        let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

        assert_auth_error(result, |e| matches!(e, AuthError::InvalidToken));
    }

    Ok(())
}

/// Tests a token presented after logout.
///
/// Expected: Err(AuthError::TokenRevoked)
#[tokio::test]
async fn fails_for_revoked_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = factory::user::create_user(db).await?;
    let token = token_for(&jwt, user);
    let claims = jwt.verify(&token)?;
    RevokedTokenRepository::new(db)
        .revoke(&token, claims.expires_at())
        .await?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert_auth_error(result, |e| matches!(e, AuthError::TokenRevoked));

    Ok(())
}

/// Tests a valid token for a user who has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = factory::user::create_user(db).await?;
    let user_id = user.id;
    let token = token_for(&jwt, user);
    crate::server::data::user::UserRepository::new(db)
        .delete(user_id)
        .await?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert_auth_error(result, |e| matches!(e, AuthError::UserNotInDatabase(_)));

    Ok(())
}
