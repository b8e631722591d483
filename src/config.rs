use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration for the browsing core.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Path of the favorites JSON file
    #[serde(default = "default_favorites_path")]
    pub favorites_path: String,
    /// Quiescence window for search input, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Maximum total time (minutes) for the "quick" filter
    #[serde(default = "default_quick_threshold_minutes")]
    pub quick_threshold_minutes: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            favorites_path: default_favorites_path(),
            debounce_ms: default_debounce_ms(),
            quick_threshold_minutes: default_quick_threshold_minutes(),
        }
    }
}

// Default value functions
fn default_favorites_path() -> String {
    "recipe-favorites.json".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_quick_threshold_minutes() -> u32 {
    30
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BROWSE__ prefix
    /// 2. recipe-browse.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BROWSE__DEBOUNCE_MS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("recipe-browse").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_BROWSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
