mod config;
mod db;
mod menu;
mod repository;
mod users;

use crate::users::repo::PgUserRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "users_admin=debug,sqlx=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = db::AppState::init().await?;
    tracing::info!(
        max_connections = state.config.max_connections,
        "database pool ready"
    );

    // Run migrations if present
    if let Err(e) = sqlx::migrate!("./migrations").run(&state.db).await {
        tracing::warn!(error = %e, "migrations folder not found or migration failed; continuing");
    }

    let repository = PgUserRepository::new(state.db.clone());
    menu::run(&repository).await;

    state.db.close().await;
    Ok(())
}
