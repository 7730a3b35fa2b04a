use crate::cli::ConfigAction;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Default)]
pub struct Config {
    pub server: ServerSection,
    pub logging: LoggingSection,
}

#[derive(Serialize, Deserialize)]
pub struct ServerSection {
    pub port: u16,
    pub bind: String,
    /// Directory holding index.html and the logo asset
    pub viewer_root: PathBuf,
    /// Directory written by preprocess.py; defaults to `<viewer_root>/processed`
    pub processed_root: Option<PathBuf>,
}

#[derive(Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: 8080,
            bind: "0.0.0.0".to_string(),
            viewer_root: PathBuf::from("."),
            processed_root: None,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

pub async fn handle_config_command(
    action: ConfigAction,
    config_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get => show_config(config_path),
        ConfigAction::Path => show_config_path(config_path),
    }
}

fn show_config(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path.clone())?;
    let config_file_path = get_config_path(config_path)?;

    println!("Configuration ({})", config_file_path.display());
    println!("{}", "-".repeat(50));

    println!("\n[server]");
    println!("port = {}", config.server.port);
    println!("bind = \"{}\"", config.server.bind);
    println!("viewer_root = \"{}\"", config.server.viewer_root.display());
    if let Some(processed_root) = &config.server.processed_root {
        println!("processed_root = \"{}\"", processed_root.display());
    }

    println!("\n[logging]");
    println!("level = \"{}\"", config.logging.level);

    Ok(())
}

fn show_config_path(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config_file_path = get_config_path(config_path)?;
    println!("{}", config_file_path.display());

    if config_file_path.exists() {
        println!("  Status: ✓ Exists");
    } else {
        println!("  Status: ✗ Not found (using defaults)");
    }

    Ok(())
}

fn get_config_path(config_path: Option<PathBuf>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = config_path {
        return Ok(path);
    }

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| "Could not determine home directory")?;

    Ok(PathBuf::from(home)
        .join(".viewer-server")
        .join("config.toml"))
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_file_path = get_config_path(config_path)?;

    if !config_file_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_file_path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
