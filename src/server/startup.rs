use crate::server::{
    config::Config,
    data::role::RoleRepository,
    error::AppError,
    model::role::{ADMIN_ROLE, DEFAULT_USER_ROLE},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before any service touches it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the roles that registration and administration depend on.
///
/// Inserts `ROLE_USER` and `ROLE_ADMIN` when they are missing and leaves existing rows
/// untouched, so it is safe to run on every startup. User registration fails with a
/// configuration error if `ROLE_USER` is absent.
///
/// # Arguments
/// - `db` - Database connection with migrations applied
///
/// # Returns
/// - `Ok(())` - Default roles are present
/// - `Err(AppError::DbErr)` - Database error while checking or inserting roles
pub async fn seed_default_roles(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    let role_repo = RoleRepository::new(db);

    for name in [DEFAULT_USER_ROLE, ADMIN_ROLE] {
        if !role_repo.exists_by_name(name).await? {
            role_repo.create(name.to_string()).await?;
            tracing::info!("Seeded default role {}", name);
        }
    }

    Ok(())
}
