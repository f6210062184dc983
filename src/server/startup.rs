use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::AppError, service::user::UserService};

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
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the first admin account from `ADMIN_EMAIL` and `ADMIN_PASSWORD`.
///
/// Does nothing when an admin already exists. When no credentials are configured the
/// server still starts, but nobody can manage users until an admin is inserted.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the admin credentials
///
/// # Returns
/// - `Ok(())` - Admin created, already present, or not configured
/// - `Err(AppError)` - Database or password hashing failure
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!("ADMIN_EMAIL or ADMIN_PASSWORD not set, skipping admin bootstrap");
        return Ok(());
    };

    match UserService::new(db)
        .bootstrap_admin(email, password, config.bcrypt_cost)
        .await?
    {
        Some(admin) => tracing::info!(user_id = admin.id, email = %admin.email, "Created admin account"),
        None => tracing::info!("Admin account already exists"),
    }

    Ok(())
}
