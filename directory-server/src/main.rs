use directory_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present, then initialize logging
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(None, config.log_dir.as_deref());

    tracing::info!("Directory server starting...");

    let state = ServerState::initialize(&config).await?;

    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
