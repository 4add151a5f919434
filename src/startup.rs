use meeting_rooms::components::GoogleCalendarClient;
use meeting_rooms::config::Config;
use meeting_rooms::error::Error;
use std::io;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration.
/// Logs go to stderr so stdout only carries the report.
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Config(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Fetch the calendar list and print the report to stdout
pub async fn start(config: Config) -> miette::Result<()> {
    let client = GoogleCalendarClient::new(&config);

    let mut stdout = io::stdout().lock();
    if let Err(e) = meeting_rooms::run(&client, &mut stdout).await {
        error!("Failed to list meeting rooms: {:?}", e);
        return Err(e.into());
    }

    info!("Done");
    Ok(())
}
