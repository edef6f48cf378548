use crashsight_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    crashsight_api::telemetry::init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (vision client, spool directory, routes)
    let (_state, router) = crashsight_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    crashsight_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
