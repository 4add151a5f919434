mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting meeting room lookup");

    // Load configuration
    let config = startup::load_config()?;

    startup::start(config).await
}
