use anyhow::{anyhow, Result};

use tourfilter::config::Settings;
use tourfilter::logging::init_logging;
use tourfilter::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings
        .validate()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    // Guard must outlive the app so buffered log lines are flushed
    let (log_path, _guard) = init_logging(&settings.log_filter)?;
    tracing::info!("Logging to {}", log_path.display());

    App::new(settings).run().await?;

    Ok(())
}
