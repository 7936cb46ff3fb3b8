//! Runtime configuration.
//!
//! Everything comes from defaults overridden by `SIGNBOARD_*` environment
//! variables. The API key may be absent: requests are still sent and the
//! resulting rejection is shown in the assistant panel.
//!
//! ```ignore
//! use signboard::config::SignboardConfig;
//!
//! let config = SignboardConfig::from_env()?;
//! let query = config.query.with_max_attempts(5);
//! ```

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default generative-text service.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
/// Default model name in the endpoint path.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// System instruction sent with every question.
pub const DEFAULT_PERSONA: &str = "You are a helpful, friendly assistant for a company that \
builds 3D web experiences. Answer questions about the company's features. The company's \
features include: 1. Interactive 3D model design. 2. WebGL and three.js development. \
3. E-commerce 3D product viewers. 4. 3D data visualization. 5. Virtual tours and \
architectural walkthroughs. Keep your answers concise, informative, and in a single paragraph.";

pub const ENV_API_KEY: &str = "SIGNBOARD_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "GEMINI_API_KEY";
pub const ENV_API_URL: &str = "SIGNBOARD_API_URL";
pub const ENV_MODEL: &str = "SIGNBOARD_MODEL";
pub const ENV_MAX_ATTEMPTS: &str = "SIGNBOARD_MAX_ATTEMPTS";
pub const ENV_BASE_DELAY_MS: &str = "SIGNBOARD_BASE_DELAY_MS";
pub const ENV_MAX_DELAY_MS: &str = "SIGNBOARD_MAX_DELAY_MS";
pub const ENV_TIMEOUT_SECS: &str = "SIGNBOARD_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "SIGNBOARD_LOG_FILE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Settings for the assistant query client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Base URL of the generative-text API
    pub api_url: String,
    /// API key appended as the `key` query parameter (may be empty)
    pub api_key: String,
    /// Model name in the endpoint path
    pub model: String,
    /// System instruction describing the assistant persona
    pub persona: String,
    /// Total attempts per question, including the first (>= 1)
    pub max_attempts: u32,
    /// Delay before the first retry; doubled for each further retry
    pub base_delay: Duration,
    /// Upper bound on any single backoff delay
    pub max_delay: Option<Duration>,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            persona: DEFAULT_PERSONA.to_string(),
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            max_delay: Some(Duration::from_secs(30)),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl QueryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    /// Set total attempts. Zero is raised to one.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, cap: Option<Duration>) -> Self {
        self.max_delay = cap;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Full `generateContent` URL including the URL-encoded key.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_url.trim_end_matches('/'),
            self.model,
            urlencoding::encode(&self.api_key)
        )
    }
}

/// Top-level configuration owned by `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignboardConfig {
    pub query: QueryConfig,
    /// Explicit log file; `None` uses the platform data directory
    pub log_file: Option<PathBuf>,
}

impl Default for SignboardConfig {
    fn default() -> Self {
        Self {
            query: QueryConfig::default(),
            log_file: None,
        }
    }
}

impl SignboardConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset, except for the API key which is
    /// allowed to be empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut query = QueryConfig::default();

        if let Some(key) = lookup(ENV_API_KEY).or_else(|| lookup(ENV_API_KEY_FALLBACK)) {
            query.api_key = key.trim().to_string();
        }
        if let Some(url) = get(ENV_API_URL) {
            query.api_url = url.trim().to_string();
        }
        if let Some(model) = get(ENV_MODEL) {
            query.model = model.trim().to_string();
        }
        if let Some(raw) = get(ENV_MAX_ATTEMPTS) {
            let attempts = parse_u64(ENV_MAX_ATTEMPTS, &raw)?;
            if attempts == 0 || attempts > u32::MAX as u64 {
                return Err(ConfigError::InvalidValue {
                    var: ENV_MAX_ATTEMPTS,
                    value: raw,
                    reason: "must be at least 1",
                });
            }
            query.max_attempts = attempts as u32;
        }
        if let Some(raw) = get(ENV_BASE_DELAY_MS) {
            query.base_delay = Duration::from_millis(parse_u64(ENV_BASE_DELAY_MS, &raw)?);
        }
        if let Some(raw) = get(ENV_MAX_DELAY_MS) {
            // 0 disables the cap
            let ms = parse_u64(ENV_MAX_DELAY_MS, &raw)?;
            query.max_delay = (ms > 0).then(|| Duration::from_millis(ms));
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = parse_u64(ENV_TIMEOUT_SECS, &raw)?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    var: ENV_TIMEOUT_SECS,
                    value: raw,
                    reason: "must be at least 1",
                });
            }
            query.request_timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            query,
            log_file: get(ENV_LOG_FILE).map(PathBuf::from),
        })
    }

    /// Log file to write to: the explicit path, else
    /// `<data_local_dir>/signboard/signboard.log`, else the temp dir.
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("signboard")
            .join("signboard.log")
    }
}

fn parse_u64(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: "expected a non-negative integer",
        })
}
