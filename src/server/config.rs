use crate::server::error::{config::ConfigError, Error};

const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    /// Base URL of the upstream REST backend, without a trailing slash.
    pub backend_url: String,
    pub valkey_url: String,
    /// Days of inactivity after which a session expires.
    pub session_expiry_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let backend_url = required("BACKEND_URL")?.trim_end_matches('/').to_string();
        let valkey_url = required("VALKEY_URL")?;

        let session_expiry_days = match lookup("SESSION_EXPIRY_DAYS") {
            None => DEFAULT_SESSION_EXPIRY_DAYS,
            Some(value) => match value.trim().parse::<i64>() {
                Ok(days) if days > 0 => days,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SESSION_EXPIRY_DAYS".to_string(),
                        reason: format!("expected a positive number of days, got {:?}", value),
                    }
                    .into())
                }
            },
        };

        Ok(Self {
            backend_url,
            valkey_url,
            session_expiry_days,
        })
    }
}
