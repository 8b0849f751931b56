use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    signup::telemetry::setup_logging()?;

    let state = signup::initialize_state().await?;
    let address = state.config.address.clone();

    let listener = TcpListener::bind(&address).await?;
    tracing::info!(%address, version = %state.config.version, "server started");

    axum::serve(listener, signup::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }

    tracing::info!("shutdown signal received, stopping server");
}
