use std::time::Duration;

use anyhow::{Context, Result};

use crate::errors::AppError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 120;
const DEFAULT_SEARCH_RESULT_LIMIT: usize = 5;

/// Application configuration loaded from environment variables.
/// Resolved once at startup; clients receive the derived settings below.
#[derive(Debug, Clone)]
pub struct Config {
    pub completion: CompletionSettings,
    pub search: SearchSettings,
    pub search_result_limit: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Everything the completion client needs. The API key is always present:
/// an unresolvable credential fails configuration, not the request.
#[derive(Clone)]
pub struct CompletionSettings {
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
}

// Keep the key out of logs.
impl std::fmt::Debug for CompletionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionSettings")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Search credentials. Either one missing disables search entirely.
#[derive(Clone, Default)]
pub struct SearchSettings {
    pub api_key: Option<String>,
    pub engine_id: Option<String>,
}

impl SearchSettings {
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.engine_id.is_some()
    }
}

impl std::fmt::Debug for SearchSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("engine_id", &self.engine_id)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. `from_env` passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env = EnvReader { lookup };

        let api_key = resolve_completion_key(
            env.optional("GEMINI_API_KEY"),
            env.optional("GOOGLE_API_KEY"),
        )?;

        let timeout_secs =
            env.parse("COMPLETION_TIMEOUT_SECS", DEFAULT_COMPLETION_TIMEOUT_SECS)?;

        Ok(Config {
            completion: CompletionSettings {
                model: env
                    .optional("GEMINI_MODEL")
                    .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_key,
                timeout: Duration::from_secs(timeout_secs),
            },
            search: SearchSettings {
                api_key: env.optional("GOOGLE_CSE_KEY"),
                engine_id: env.optional("GOOGLE_CX"),
            },
            search_result_limit: env
                .parse("SEARCH_RESULT_LIMIT", DEFAULT_SEARCH_RESULT_LIMIT)?,
            port: env.parse("PORT", 5000u16)?,
            rust_log: env
                .optional("RUST_LOG")
                .unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Two-tier credential lookup: the explicit Gemini key wins, otherwise the
/// ambient Google key the SDKs fall back to.
pub fn resolve_completion_key(
    explicit: Option<String>,
    ambient: Option<String>,
) -> Result<String, AppError> {
    explicit.or(ambient).ok_or_else(|| {
        AppError::Configuration(
            "no completion credential: set GEMINI_API_KEY or GOOGLE_API_KEY".to_string(),
        )
    })
}

struct EnvReader<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> EnvReader<F> {
    /// Unset and blank values are treated the same.
    fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.optional(key) {
            Some(raw) => raw
                .parse::<T>()
                .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
            None => Ok(default),
        }
    }
}
