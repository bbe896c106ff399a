use std::net::SocketAddr;
use std::path::PathBuf;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Shared secret accepted as a bearer token or `X-API-Key`.
    pub secret_key: Option<String>,
    pub sizing_path: Option<PathBuf>,
    pub default_outlet_id: String,
    pub default_outlet_count: usize,
    /// Fixed batch seed. `None` draws a fresh seed per request.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// The shared secret the server should enforce.
    ///
    /// In development an unset secret falls back to
    /// [`DEVELOPMENT_SECRET_KEY`](crate::DEVELOPMENT_SECRET_KEY). Other
    /// environments must configure `OUTLET_MOCK_SECRET_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] outside development when no secret is set.
    pub fn resolve_secret_key(&self) -> Result<String, ConfigError> {
        match (&self.secret_key, &self.env) {
            (Some(secret), _) => Ok(secret.clone()),
            (None, Environment::Development) => Ok(crate::DEVELOPMENT_SECRET_KEY.to_string()),
            (None, _) => Err(ConfigError::MissingEnvVar(
                "OUTLET_MOCK_SECRET_KEY".to_string(),
            )),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[redacted]"))
            .field("sizing_path", &self.sizing_path)
            .field("default_outlet_id", &self.default_outlet_id)
            .field("default_outlet_count", &self.default_outlet_count)
            .field("seed", &self.seed)
            .finish()
    }
}
