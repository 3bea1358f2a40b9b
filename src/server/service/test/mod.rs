use crate::{
    model::user::UserRequest,
    server::{error::AppError, model::user::CreateUserParams},
};


/// Registration parameters with a valid password for `email`.
fn registration(email: &str, password: &str) -> CreateUserParams {
    CreateUserParams::from_dto(UserRequest {
        email: email.to_string(),
        name: "Ada Lovelace".to_string(),
        password: password.to_string(),
        address: "1 Main St".to_string(),
        phone_number: "555-0101".to_string(),
    })
    .unwrap()
}

fn assert_conflict<T: std::fmt::Debug>(result: Result<T, AppError>) {
    match result {
        Err(AppError::Conflict(_)) => {}
        other => panic!("Expected Conflict error, got: {:?}", other),
    }
}

fn assert_not_found<T: std::fmt::Debug>(result: Result<T, AppError>) {
    match result {
        Err(AppError::NotFound(_)) => {}
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

fn assert_bad_request<T: std::fmt::Debug>(result: Result<T, AppError>) {
    match result {
        Err(AppError::BadRequest(_)) => {}
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }
}
