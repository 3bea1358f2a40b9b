use super::*;

/// Tests an admin passes the admin check.
///
/// Expected: Ok(CurrentUser) with role ADMIN
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let admin = factory::user::create_admin(db).await?;
    let headers = bearer(&token_for(&jwt, admin.clone()));

    let current = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(current.id, admin.id);
    assert!(current.is_admin());

    Ok(())
}

/// Tests a regular user fails the admin check.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = factory::user::create_user(db).await?;
    let user_id = user.id;
    let headers = bearer(&token_for(&jwt, user));

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(denied_id, message))) => {
            assert_eq!(denied_id, user_id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
