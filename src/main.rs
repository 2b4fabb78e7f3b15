mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::router()
        .with_state(AppState::new(db, config.app_url.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(startup::setup_cors());

    let listener = TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
