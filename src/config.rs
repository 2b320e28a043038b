//! Tool configuration.
//!
//! This module centralizes resolution of the content root so it is not
//! hardcoded at the call site.

use serde::Deserialize;
use std::path::PathBuf;

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    content: Option<ContentConfig>,
}

#[derive(Debug, Deserialize)]
struct ContentConfig {
    root: Option<String>,
}

/// Load the content root with priority: config.toml > .env > default
pub fn load_content_root() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(content) = config.content {
                if let Some(root) = content.root {
                    tracing::info!("Using content root from config.toml: {}", root);
                    return PathBuf::from(root);
                }
            }
        }
    }

    // Priority 2: .env LESSONS_DIR
    if let Ok(root) = std::env::var("LESSONS_DIR") {
        tracing::info!("Using content root from LESSONS_DIR env: {}", root);
        return PathBuf::from(root);
    }

    // Default: the directory the tool is invoked from
    let default = PathBuf::from(".");
    tracing::info!("Using default content root: {}", default.display());
    default
}
