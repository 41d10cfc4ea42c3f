use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_project_name")]
    pub project_name: String,
    #[serde(default)]
    pub server: ServerSettings,
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub ml: MlSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: String,
    pub key: String,
    pub timeout_secs: Option<u64>,
}

impl SupabaseSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MlSettings {
    #[serde(default = "default_category_timeout_ms")]
    pub category_timeout_ms: u64,
    #[serde(default = "default_forecast_window")]
    pub forecast_window: usize,
}

impl MlSettings {
    pub fn category_deadline(&self) -> Duration {
        Duration::from_millis(self.category_timeout_ms)
    }
}

impl Default for MlSettings {
    fn default() -> Self {
        Self {
            category_timeout_ms: default_category_timeout_ms(),
            forecast_window: default_forecast_window(),
        }
    }
}

fn default_project_name() -> String { "Expense Tracker API".to_string() }
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }
fn default_category_timeout_ms() -> u64 { 2000 }
fn default_forecast_window() -> usize { 90 }

fn default_allowed_origins() -> Vec<String> {
    std::iter::once(3000)
        .chain(5173..=5180)
        .map(|port| format!("http://localhost:{}", port))
        .collect()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with EXPENSE__)
    /// 5. Plain SUPABASE_URL, SUPABASE_KEY, PROJECT_NAME, HOST and PORT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., EXPENSE__SUPABASE__URL -> supabase.url
            .add_source(env_source())
            .build()?;

        let settings = apply_plain_env_overrides(settings)?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject blank provider credentials so startup fails fast
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supabase.url.trim().is_empty() {
            return Err(ConfigError::Message("supabase.url (SUPABASE_URL) must be set".to_string()));
        }
        if self.supabase.key.trim().is_empty() {
            return Err(ConfigError::Message("supabase.key (SUPABASE_KEY) must be set".to_string()));
        }
        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("EXPENSE")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}

/// Apply the unprefixed variables the frontend tooling already sets
fn apply_plain_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    apply_overrides_from(settings, |var| std::env::var(var).ok())
}

fn apply_overrides_from<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let overrides = [
        ("SUPABASE_URL", "supabase.url"),
        ("SUPABASE_KEY", "supabase.key"),
        ("PROJECT_NAME", "project_name"),
        ("HOST", "server.host"),
        ("PORT", "server.port"),
    ];

    let mut builder = Config::builder().add_source(settings);
    for (var, key) in overrides {
        if let Some(value) = lookup(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
