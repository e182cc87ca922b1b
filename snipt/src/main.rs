use anyhow::{anyhow, Result};

use snipt::{App, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings
        .validate()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    // Logging is initialized in App::run() with buffer support
    App::new(settings).run().await?;

    Ok(())
}
