use std::env;

/// Deployment environment, selects the tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Pretty logs, debug level by default.
    Development,
    /// JSON logs, info level by default.
    Production,
}

impl Environment {
    /// Read `APP_ENV`; anything other than `production` means development.
    pub fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// Whether this is a development environment.
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Runtime configuration, read from environment variables with local-dev
/// defaults. `dotenvy` is loaded by the binary before this runs.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL of the Ollama server.
    pub ollama_url: String,
    /// Model identifier passed to `/api/generate`.
    pub ollama_model: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Deployment environment.
    pub env: Environment,
}

impl ApiConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            ollama_url: env::var("OLLAMA_API_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "gemma2:2b".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            env: Environment::from_env(),
        }
    }
}
