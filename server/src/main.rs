mod config;
mod error;
mod routes;

use error::ServeError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "finboard server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServeError> {
    let config = config::ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, "finboard listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
