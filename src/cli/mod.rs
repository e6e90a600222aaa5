// CLI module for gemvision
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// gemvision - image analysis over HTTP, backed by Gemini
#[derive(Parser, Debug, Default)]
#[command(name = "gemvision", version, about, long_about = None)]
pub struct Args {
    /// Address to bind (default 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default 3000)
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Gemini API key
    #[arg(long = "api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to a TOML config file (default ~/.gemvision/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
