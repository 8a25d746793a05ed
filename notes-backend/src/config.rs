use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const BIND_ADDR: &str = "NOTES_BIND_ADDR";
    pub const PORT: &str = "PORT";
    /// Root directory holding one `<id>.md` file per note
    pub const NOTES_DIR: &str = "NOTES_DIR";
    /// Base URL of the LanguageTool server (e.g. "http://localhost:8081")
    pub const LANGUAGETOOL_URL: &str = "LANGUAGETOOL_URL";
    /// Locale passed to the grammar engine on every check
    pub const GRAMMAR_LANGUAGE: &str = "GRAMMAR_LANGUAGE";
    /// Upper bound in seconds for one grammar check or one render
    pub const ENGINE_TIMEOUT_SECS: &str = "ENGINE_TIMEOUT_SECS";
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
}

/// Default values
pub mod defaults {
    pub const BIND_ADDR: &str = "127.0.0.1";
    pub const PORT: u16 = 5000;
    pub const NOTES_DIR: &str = "notes";
    pub const LANGUAGETOOL_URL: &str = "http://localhost:8081";
    pub const GRAMMAR_LANGUAGE: &str = "en-US";
    pub const ENGINE_TIMEOUT_SECS: u64 = 15;
    pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub notes_dir: PathBuf,
    pub languagetool_url: String,
    pub grammar_language: String,
    pub engine_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. Unset variables take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |name: &'static str, default: &str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(v) if v.trim().is_empty() => Err(ConfigError::Empty { name }),
                Some(v) => Ok(v.trim().to_string()),
                None => Ok(default.to_string()),
            }
        };

        Ok(Self {
            bind_addr: string_or(env_vars::BIND_ADDR, defaults::BIND_ADDR)?,
            port: parse_number(&lookup, env_vars::PORT, defaults::PORT)?,
            notes_dir: PathBuf::from(string_or(env_vars::NOTES_DIR, defaults::NOTES_DIR)?),
            languagetool_url: string_or(env_vars::LANGUAGETOOL_URL, defaults::LANGUAGETOOL_URL)?
                .trim_end_matches('/')
                .to_string(),
            grammar_language: string_or(env_vars::GRAMMAR_LANGUAGE, defaults::GRAMMAR_LANGUAGE)?,
            engine_timeout: Duration::from_secs(parse_positive(
                &lookup,
                env_vars::ENGINE_TIMEOUT_SECS,
                defaults::ENGINE_TIMEOUT_SECS,
            )?),
            max_body_bytes: parse_number(&lookup, env_vars::MAX_BODY_BYTES, defaults::MAX_BODY_BYTES)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: defaults::BIND_ADDR.to_string(),
            port: defaults::PORT,
            notes_dir: PathBuf::from(defaults::NOTES_DIR),
            languagetool_url: defaults::LANGUAGETOOL_URL.to_string(),
            grammar_language: defaults::GRAMMAR_LANGUAGE.to_string(),
            engine_timeout: Duration::from_secs(defaults::ENGINE_TIMEOUT_SECS),
            max_body_bytes: defaults::MAX_BODY_BYTES,
        }
    }
}

fn parse_number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
        None => Ok(default),
    }
}

/// Like `parse_number`, but 0 is rejected
fn parse_positive<F>(lookup: &F, name: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_number(lookup, name, default)? {
        0 => Err(ConfigError::Zero { name }),
        n => Ok(n),
    }
}
