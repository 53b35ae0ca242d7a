//! Validate configuration command.

use anyhow::Result;
use indicator_config::AppConfig;
use std::path::Path;

pub async fn run(config_path: &Path, config: &AppConfig) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    if !config_path.exists() {
        println!("File not found, showing defaults");
    }

    match config.build_engine() {
        Ok(_) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Default period: {}", config.data.default_period);
            println!("Minimum bars: {}", config.data.min_bars);
            println!("Data directory: {}", config.data.data_dir.display());
            println!();
            println!("{}", config.to_toml()?);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
