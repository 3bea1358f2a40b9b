use crate::server::{
    config::Config,
    error::AppError,
    model::user::CreateUserParams,
    service::user::UserService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures an admin account exists.
///
/// When no user holds the `ADMIN` role and both `ADMIN_EMAIL` and `ADMIN_PASSWORD`
/// are configured, registers an admin with those credentials. Without credentials
/// a warning is logged and startup continues, leaving every admin-only endpoint
/// unreachable until an admin is created.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the optional admin credentials
///
/// # Returns
/// - `Ok(())` - Admin exists, was created, or a warning was logged
/// - `Err(AppError)` - Database error or the configured credentials were rejected
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let user_service = UserService::new(db);

    if user_service.admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!(
            "No admin user exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one at startup"
        );
        return Ok(());
    };

    let admin = user_service
        .register_admin(CreateUserParams {
            email: email.clone(),
            name: "Administrator".to_string(),
            password: password.clone(),
            address: "-".to_string(),
            phone_number: "-".to_string(),
        })
        .await?;

    tracing::info!("Created admin user {} ({})", admin.id, admin.email);

    Ok(())
}
