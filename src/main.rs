mod auth;
mod cnfg;
mod error;
mod router;
mod routes;

use anyhow::Result;

use cnfg::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt::init();

    let app = router::app();

    let port = config.port;
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(env = ?config.env, "listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
