// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::cli::Args;
use crate::error::{AnalyzerError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments and the `PORT` / `GEMINI_API_KEY` variables (highest)
    /// 2. `GEMVISION_`-prefixed environment variables
    /// 3. Config file
    /// 4. Defaults (lowest)
    ///
    /// Fails when no API key is supplied by any source.
    pub fn load(args: &Args) -> Result<Self> {
        let (path, required) = match &args.config {
            Some(path) => (path.clone(), true),
            None => (Self::default_config_path(), false),
        };

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file; only an explicit --config must exist
            .add_source(File::from(path).required(required))
            // Override with environment variables (e.g. GEMVISION_GEMINI__MODEL)
            .add_source(
                Environment::with_prefix("GEMVISION")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("server.host", args.host.clone())?
            .set_override_option("server.port", args.port.map(i64::from))?
            .set_override_option("gemini.api_key", args.api_key.clone())?
            .build()
            .map_err(|e| AnalyzerError::Config(e.to_string()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AnalyzerError::Config(e.to_string()))?;

        app_config.validate()?;
        Ok(app_config)
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.gemini.api_key.is_empty() {
            return Err(AnalyzerError::Config(
                "GEMINI_API_KEY is not set. Export it in your shell or set gemini.api_key in the config file"
                    .to_string(),
            ));
        }

        if self.server.max_body_bytes == 0 {
            return Err(AnalyzerError::Config(
                "server.max_body_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gemvision")
            .join("config.toml")
    }
}
