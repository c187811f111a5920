use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};
use tracing::info;

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::booking_service::BookingService;
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_offering_repo::PostgresOfferingRepo,
    postgres_user_repo::PostgresUserRepo, sqlite_booking_repo::SqliteBookingRepo,
    sqlite_offering_repo::SqliteOfferingRepo, sqlite_user_repo::SqliteUserRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let auth_service = Arc::new(AuthService::new(config));

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let user_repo = Arc::new(PostgresUserRepo::new(pool.clone()));
        let offering_repo = Arc::new(PostgresOfferingRepo::new(pool.clone()));
        let booking_repo = Arc::new(PostgresBookingRepo::new(pool.clone()));
        let booking_service = Arc::new(BookingService::new(
            booking_repo.clone(),
            user_repo.clone(),
            offering_repo.clone(),
        ));

        AppState {
            config: config.clone(),
            user_repo,
            offering_repo,
            booking_repo,
            auth_service,
            booking_service,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let offering_repo = Arc::new(SqliteOfferingRepo::new(pool.clone()));
        let booking_repo = Arc::new(SqliteBookingRepo::new(pool.clone()));
        let booking_service = Arc::new(BookingService::new(
            booking_repo.clone(),
            user_repo.clone(),
            offering_repo.clone(),
        ));

        AppState {
            config: config.clone(),
            user_repo,
            offering_repo,
            booking_repo,
            auth_service,
            booking_service,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
