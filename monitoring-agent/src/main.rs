use agent_core::{config::Config, logging, Result};
use tracing::info;

mod heartbeat;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    let config = Config::from_env()?;
    info!("Starting monitoring agent with config: {:?}", config);

    let heartbeat = heartbeat::Heartbeat::new(config);
    info!(
        "Heartbeat running every {}s. Stop the process to exit.",
        heartbeat.interval().as_secs()
    );

    match heartbeat.run(std::io::stdout()).await? {}
}
