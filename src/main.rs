mod model;
mod server;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    router,
    service::{
        auth::{jwt::JwtService, refresh::RefreshTokenStore},
        notification::LogNotifier,
    },
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::bootstrap_admin(&db, &config).await?;

    let state = AppState::new(
        db,
        JwtService::new(&config.jwt_secret, config.jwt_expiration_minutes),
        RefreshTokenStore::new(Duration::from_secs(config.refresh_token_ttl_hours * 3600)),
        Arc::new(LogNotifier),
        config.bcrypt_cost,
    );

    let app = router::router(&config)?.with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutting down"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
