//! HBnB server: loads settings from the environment (and `.env`), builds the shared facade once,
//! and serves the API.
//!
//! Run from repo root: `cargo run -p hbnb-server`

use hbnb::{app, AppState, Facade, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("hbnb=info,hbnb_server=info,tower_http=info")
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(Facade::new());
    let router = app(state, config.body_limit);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, body_limit = config.body_limit, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
