use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the `question` and `answer` tables exist before
/// the first request is served. Works for both postgres and sqlite URLs.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set. Otherwise the configured `LOG_LEVEL` is used,
/// falling back to `info` when it cannot be parsed as a filter directive.
pub fn init_tracing(config: &Config) {
    let (filter, invalid_level) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => match EnvFilter::try_new(&config.log_level) {
            Ok(filter) => (filter, None),
            Err(_) => (EnvFilter::new("info"), Some(config.log_level.clone())),
        },
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(level) = invalid_level {
        tracing::warn!("Invalid LOG_LEVEL '{}', falling back to info", level);
    }
}

/// Resolves when the process receives Ctrl-C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
