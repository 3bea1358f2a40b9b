//! Route table and OpenAPI document.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        cart::{CartItemRequest, CartItemResponse, CartListResponse, CartRequest, CartResponse},
        category::{CategoryListResponse, CategoryRequest, CategoryResponse},
        food::{FoodListResponse, FoodRequest, FoodResponse, FoodUpdateRequest},
        user::{
            ChangePasswordRequest, LoginRequest, TokenResponse, UserListResponse, UserRequest,
            UserResponse, UserUpdateRequest,
        },
    },
    server::{
        controller::{cart, category, food, user},
        state::AppState,
    },
};

pub const DOCS_PATH: &str = "/api/docs";
pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";

/// Adds the bearer token scheme referenced by `security(("bearer" = []))` on protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                Http::builder()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token issued by POST /users/login."))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Restaurant API",
        description = "Menu, account and cart management for a restaurant ordering backend."
    ),
    paths(
        category::get_categories,
        category::get_category_by_id,
        category::create_category,
        category::update_category,
        category::delete_category,
        food::get_food_by_category,
        food::get_food_by_id,
        food::create_food,
        food::update_food,
        food::delete_food,
        user::register,
        user::login,
        user::logout,
        user::change_password,
        user::get_current_user,
        user::get_users,
        user::get_user_by_id,
        user::update_user,
        user::delete_user,
        cart::get_carts,
        cart::get_cart_by_id,
        cart::create_cart,
        cart::update_cart,
        cart::delete_cart,
    ),
    components(schemas(
        ErrorDto,
        CategoryRequest,
        CategoryResponse,
        CategoryListResponse,
        FoodRequest,
        FoodUpdateRequest,
        FoodResponse,
        FoodListResponse,
        UserRequest,
        UserUpdateRequest,
        UserResponse,
        UserListResponse,
        LoginRequest,
        TokenResponse,
        ChangePasswordRequest,
        CartItemRequest,
        CartRequest,
        CartItemResponse,
        CartResponse,
        CartListResponse,
    )),
    tags(
        (name = "category", description = "Menu categories"),
        (name = "food", description = "Food items within a category"),
        (name = "user", description = "Accounts and authentication"),
        (name = "cart", description = "Shopping carts")
    )
)]
pub struct ApiDoc;

/// Builds the application router with Swagger UI, CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/categories/{category_id}",
            get(category::get_category_by_id)
                .put(category::update_category)
                .delete(category::delete_category),
        )
        .route(
            "/categories/{category_id}/food",
            get(food::get_food_by_category).post(food::create_food),
        )
        .route(
            "/categories/{category_id}/food/{food_id}",
            get(food::get_food_by_id)
                .put(food::update_food)
                .delete(food::delete_food),
        )
        .route("/users", get(user::get_users))
        .route("/users/register", post(user::register))
        .route("/users/login", post(user::login))
        .route("/users/logout", post(user::logout))
        .route("/users/password", put(user::change_password))
        .route("/users/me", get(user::get_current_user))
        .route(
            "/users/{user_id}",
            get(user::get_user_by_id)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/carts", get(cart::get_carts).post(cart::create_cart))
        .route(
            "/carts/{cart_id}",
            get(cart::get_cart_by_id)
                .put(cart::update_cart)
                .delete(cart::delete_cart),
        )
        .with_state(state)
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
