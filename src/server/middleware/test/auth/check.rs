use super::*;
use crate::server::middleware::auth::CurrentUser;

fn caller(id: i32, role: Role) -> CurrentUser {
    CurrentUser {
        id,
        email: format!("user{}@example.com", id),
        role,
    }
}

/// Tests an already authenticated owner passes without another token lookup.
///
/// Expected: Ok(())
#[test]
fn grants_owner() {
    let current = caller(7, Role::User);

    assert!(AuthGuard::check(&current, &[Permission::OwnerOrAdmin(7)]).is_ok());
}

/// Tests an admin passes both permission kinds for someone else's resource.
///
/// Expected: Ok(())
#[test]
fn grants_admin_for_any_owner() {
    let current = caller(1, Role::Admin);

    let result = AuthGuard::check(&current, &[Permission::Admin, Permission::OwnerOrAdmin(7)]);

    assert!(result.is_ok());
}

/// Tests a regular user is denied another user's resource.
///
/// Expected: Err(AuthError::AccessDenied)
#[test]
fn denies_other_user() {
    let current = caller(8, Role::User);

    let result = AuthGuard::check(&current, &[Permission::OwnerOrAdmin(7)]);

    assert_auth_error(result, |e| matches!(e, AuthError::AccessDenied(8, _)));
}

/// Tests an empty permission list accepts any caller.
///
/// Expected: Ok(())
#[test]
fn accepts_empty_permissions() {
    let current = caller(8, Role::User);

    assert!(AuthGuard::check(&current, &[]).is_ok());
}
