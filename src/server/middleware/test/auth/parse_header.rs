use super::*;

/// Tests the prefix is stripped from a well-formed header.
///
/// Expected: Ok with the raw token
#[test]
fn strips_bearer_prefix() {
    let headers = bearer("abc.def.ghi");

    assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
}

/// Tests missing, empty and non-bearer headers.
///
/// Expected: Err(AuthError::MissingToken) for each
#[test]
fn rejects_missing_or_malformed_header() {
    let mut basic = HeaderMap::new();
    basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let mut empty = HeaderMap::new();
    empty.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));

    for headers in [HeaderMap::new(), basic, empty] {
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MissingToken)
        ));
    }
}
