//! Configuration loaded from file and environment.

use serde::Deserialize;
use std::path::Path;

/// Default operator passcode. A convenience gate for a single-operator
/// deployment; override it via config file or `FOLIO_ADMIN_PASSCODE`.
const DEFAULT_PASSCODE: &str = "admin123";

/// Runtime configuration for the content core and chat bridge.
#[derive(Debug, Clone, Deserialize)]
pub struct FolioConfig {
    /// Directory for the sled content store.
    pub storage_path: String,
    /// Operator passcode for the admin surface.
    pub admin_passcode: String,
    /// Chat completion model. `None` uses the bridge default.
    #[serde(default)]
    pub chat_model: Option<String>,
    /// Chat API base URL. `None` uses the bridge default.
    #[serde(default)]
    pub chat_api_url: Option<String>,
}

impl FolioConfig {
    /// Load config from file and environment. Precedence: env `FOLIO_CONFIG`
    /// path > `config/folio.toml` > defaults, with `FOLIO_*` environment
    /// variables overriding whatever the file set.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| "config/folio.toml".to_string());
        let builder = config::Config::builder()
            .set_default("storage_path", "./data/folio_content")?
            .set_default("admin_passcode", DEFAULT_PASSCODE)?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        builder
            .add_source(config::Environment::with_prefix("FOLIO"))
            .build()?
            .try_deserialize()
    }

    /// Chat credential resolution: `FOLIO_API_KEY`, falling back to
    /// `OPENROUTER_API_KEY`. A blank value counts as unset.
    pub fn chat_api_key(&self) -> Option<String> {
        std::env::var("FOLIO_API_KEY")
            .ok()
            .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
