use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{model::user::User, router, service::jwt::JwtService, state::AppState};


const SECRET: &str = "test-secret";

/// Full router over an in-memory database holding every table.
struct TestApp {
    test: TestContext,
    app: Router,
    jwt: JwtService,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let jwt = JwtService::new(SECRET, 60);
        let app = router::router(AppState::new(db, jwt.clone()));

        Self { test, app, jwt }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Creates a user row directly and returns a token for it.
    async fn user_with_token(&self, admin: bool) -> (entity::user::Model, String) {
        let user = factory::user::UserFactory::new(self.db())
            .admin(admin)
            .build()
            .await
            .unwrap();
        let token = self.jwt.issue(&User::from_entity(user.clone())).unwrap();

        (user, token)
    }

    /// Sends one request and returns the status and JSON body, `Value::Null` when empty.
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, token, Some(body)).await
    }

    async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, None).await
    }
}

fn category_body(position_id: i64, name: &str) -> Value {
    json!({ "positionId": position_id, "categoryName": name })
}

fn food_body(position_id: i64, name: &str, price: f64) -> Value {
    json!({ "positionId": position_id, "foodName": name, "foodPrice": price })
}
