mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, service::jwt::JwtService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    // Create the configured admin if no admin exists yet
    startup::check_for_admin(&db, &config).await?;

    let jwt = JwtService::new(&config.jwt_secret, config.jwt_expiration_minutes);
    let app = router::router(AppState::new(db, jwt));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
