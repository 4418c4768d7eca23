use actix_web::{web, HttpServer};
use anyhow::Context;
use fe_api::{create_app, telemetry::init_tracing, AppState};
use fe_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&Default::default());
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e).context("failed to load configuration");
        }
    };

    init_tracing(&config.logging);
    tracing::info!(
        environment = %config.environment,
        "Starting FoodEasy auth API"
    );

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize services");
            return Err(e).context("failed to initialize services");
        }
    };

    let _sweeper = state
        .sweeper(config.otp.sweep_interval_seconds)
        .start_background_task();

    let state = web::Data::new(state);
    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
