//! One-shot database seeding: `cargo run --bin seed`. Safe to run against
//! a populated store; existing rows (matched by email) are left alone.

use rollbook::{config::DbConfig, seed::seed_sample_students, state::AppState};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().expect("unable to load env vars");

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    let db_config = DbConfig::new().expect("unable to create db config");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&db_config.connection_url())
        .await
        .expect("unable to connect to database");
    let state = AppState::new(pool).await.expect("unable to create state");

    let inserted = seed_sample_students(&state)
        .await
        .expect("unable to seed sample students");

    info!(inserted, "Database seeded with sample students!");
    state.sensible_shutdown().await;
}
