//! Configuration loading for wordweaved.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.wordweave/config.toml` (user)
//! 3. `/etc/wordweave/config.toml` (system)
//!
//! With no file at all, built-in defaults apply.
//!
//! Secrets are loaded separately with mandatory permission checks:
//! 1. `~/.wordweave/secrets.toml` (user, must be 0600)
//! 2. `/etc/wordweave/secrets.toml` (system, must be 0600)
//!
//! and fall back to `ANTHROPIC_API_KEY`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::{CacheConfig, CachePolicy};
use crate::providers::RetryConfig;
use crate::providers::anthropic::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::service::FailurePolicy;
use crate::types::InvokeOptions;
use crate::{Result, WordweaveError, prompts};

/// Environment variable consulted when no secrets file provides a key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub retry: RetrySection,
    #[serde(default)]
    pub cache: CacheSection,
    #[serde(default)]
    pub policy: FailurePolicy,
}

/// Server network configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8080).
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            limits: LimitsConfig::default(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1:8080".to_string()
}

/// Resource limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Largest accepted request body in bytes (default: 64 KiB).
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

/// Hosted model settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model_id")]
    pub id: String,
    /// Per-attempt timeout in seconds (default: 30).
    #[serde(default = "default_model_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub generation: SamplingConfig,
    #[serde(default)]
    pub analysis: SamplingConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            id: default_model_id(),
            timeout_secs: default_model_timeout(),
            generation: SamplingConfig::default(),
            analysis: SamplingConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model_id() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_model_timeout() -> u64 {
    30
}

/// Overrides for one operation's sampling options. Unset fields keep the
/// operation's built-in value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SamplingConfig {
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub top_p: Option<f32>,
}

impl SamplingConfig {
    fn apply(&self, mut options: InvokeOptions) -> InvokeOptions {
        if let Some(n) = self.max_tokens {
            options.max_tokens = n;
        }
        if self.temperature.is_some() {
            options.temperature = self.temperature;
        }
        if self.top_p.is_some() {
            options.top_p = self.top_p;
        }
        options
    }
}

/// `[retry]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrySection {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    #[serde(default = "default_true")]
    pub jitter: bool,
}

impl Default for RetrySection {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            jitter: true,
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay_ms() -> u64 {
    1_000
}

fn default_max_delay_ms() -> u64 {
    16_000
}

fn default_true() -> bool {
    true
}

/// `[cache]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSection {
    /// Store call timeout in milliseconds (default: 2000).
    #[serde(default = "default_cache_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_poem_policy")]
    pub poem: CategorySection,
    #[serde(default = "default_theme_policy")]
    pub theme_analysis: CategorySection,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            timeout_ms: default_cache_timeout_ms(),
            poem: default_poem_policy(),
            theme_analysis: default_theme_policy(),
        }
    }
}

/// TTL and capacity for one cache category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySection {
    pub ttl_secs: u64,
    pub max_entries: u64,
}

impl From<CachePolicy> for CategorySection {
    fn from(policy: CachePolicy) -> Self {
        Self {
            ttl_secs: policy.ttl.as_secs(),
            max_entries: policy.max_entries,
        }
    }
}

fn default_cache_timeout_ms() -> u64 {
    CacheConfig::default().timeout.as_millis() as u64
}

fn default_poem_policy() -> CategorySection {
    CacheConfig::default().poem.into()
}

fn default_theme_policy() -> CategorySection {
    CacheConfig::default().theme_analysis.into()
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; must exist)
    /// 2. `~/.wordweave/config.toml`
    /// 3. `/etc/wordweave/config.toml`
    /// 4. Built-in defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            WordweaveError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            WordweaveError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(WordweaveError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".wordweave").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/wordweave/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }

    pub fn retry_config(&self) -> RetryConfig {
        let r = &self.retry;
        RetryConfig::new()
            .max_attempts(r.max_attempts)
            .initial_delay(Duration::from_millis(r.initial_delay_ms))
            .max_delay(Duration::from_millis(r.max_delay_ms))
            .jitter(r.jitter)
    }

    pub fn cache_config(&self) -> CacheConfig {
        let c = &self.cache;
        let policy = |s: &CategorySection| CachePolicy {
            ttl: Duration::from_secs(s.ttl_secs),
            max_entries: s.max_entries,
        };
        CacheConfig {
            poem: policy(&c.poem),
            theme_analysis: policy(&c.theme_analysis),
            timeout: Duration::from_millis(c.timeout_ms),
        }
    }

    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model.timeout_secs)
    }

    pub fn generation_options(&self) -> InvokeOptions {
        self.model.generation.apply(prompts::generation_options())
    }

    pub fn analysis_options(&self) -> InvokeOptions {
        self.model.analysis.apply(prompts::analysis_options())
    }
}

/// Secrets configuration (API keys).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Secrets {
    #[serde(default)]
    pub anthropic: Option<ApiKeySecret>,
}

/// A single API key secret.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeySecret {
    pub api_key: String,
}

impl Secrets {
    /// Load secrets from the standard locations with permission checks.
    ///
    /// Resolution order:
    /// 1. `~/.wordweave/secrets.toml` (if exists, must be 0600)
    /// 2. `/etc/wordweave/secrets.toml` (if exists, must be 0600)
    ///
    /// Returns empty secrets if no file exists (the key may come from the
    /// environment).
    pub fn load() -> Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let user_secrets = home.join(".wordweave").join("secrets.toml");
            if user_secrets.exists() {
                return Self::load_from_file(&user_secrets);
            }
        }

        let system_secrets = PathBuf::from("/etc/wordweave/secrets.toml");
        if system_secrets.exists() {
            return Self::load_from_file(&system_secrets);
        }

        Ok(Secrets::default())
    }

    /// Load a specific secrets file, checking its permissions first.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::check_permissions(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            WordweaveError::Configuration(format!("Failed to read secrets file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            WordweaveError::Configuration(format!("Failed to parse secrets file {path:?}: {e}"))
        })
    }

    /// Check that the secrets file has secure permissions (0600 or 0400).
    #[cfg(unix)]
    fn check_permissions(path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path).map_err(|e| {
            WordweaveError::Configuration(format!("Failed to stat secrets file {path:?}: {e}"))
        })?;

        let mode = metadata.permissions().mode();
        // group or other bits
        if mode & 0o077 != 0 {
            return Err(WordweaveError::Configuration(format!(
                "Secrets file {path:?} has insecure permissions {:o}. Must be 0600 or 0400.",
                mode & 0o777
            )));
        }

        Ok(())
    }

    #[cfg(not(unix))]
    fn check_permissions(_path: &Path) -> Result<()> {
        Ok(())
    }

    /// The Anthropic API key, falling back to [`API_KEY_ENV`].
    pub fn api_key(&self) -> Option<String> {
        self.anthropic
            .as_ref()
            .map(|s| s.api_key.clone())
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
    }
}
