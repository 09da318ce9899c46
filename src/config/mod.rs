use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// HS256 signing secret for session tokens. Empty means unconfigured;
    /// the server refuses to start without one outside development.
    pub jwt_secret: String,
    /// Fixed cross-origin allow-list; credentialed requests are accepted
    /// only from these origins.
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        // Per-environment defaults first, then specific env vars on top
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Some(v) = env::var("GRAMIN_API_PORT").ok().or_else(|| env::var("PORT").ok()) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECT_TIMEOUT_SECS") {
            self.database.connect_timeout_secs = v.parse().unwrap_or(self.database.connect_timeout_secs);
        }

        // Security overrides
        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("CORS_ORIGINS") {
            self.security.cors_origins = parse_cors_origins(&v);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 5000 },
            database: DatabaseConfig {
                max_connections: 5,
                connect_timeout_secs: 30,
            },
            security: SecurityConfig {
                jwt_secret: "gramin-dev-secret-change-me".to_string(),
                cors_origins: Self::default_cors_origins(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 5000 },
            database: DatabaseConfig {
                max_connections: 20,
                connect_timeout_secs: 5,
            },
            security: SecurityConfig {
                // Must come from JWT_SECRET; startup refuses an empty secret
                jwt_secret: String::new(),
                cors_origins: Self::default_cors_origins(),
            },
        }
    }

    /// The allow-list the frontend ships against: local dev servers plus the
    /// published GitHub Pages origin.
    fn default_cors_origins() -> Vec<String> {
        vec![
            "http://localhost:3000".to_string(),
            "http://localhost:3001".to_string(),
            "https://patilprashant88.github.io".to_string(),
        ]
    }
}

/// Split a comma-separated CORS_ORIGINS value into an allow-list.
fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// Global read-only config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.max_connections, 5);
        assert!(!config.security.jwt_secret.is_empty());
        assert!(config
            .security
            .cors_origins
            .iter()
            .any(|o| o == "http://localhost:3000"));
    }

    #[test]
    fn production_requires_explicit_secret() {
        let config = AppConfig::production();
        assert_eq!(config.server.port, 5000);
        assert!(config.security.jwt_secret.is_empty());
        assert_eq!(config.security.cors_origins.len(), 3);
    }

    // No set_var here: unit tests run in parallel and mutating process env
    // can leak into another test's Lazy CONFIG initialization
    #[test]
    fn cors_origins_override_splits_on_commas() {
        assert_eq!(
            parse_cors_origins("https://a.example, https://b.example"),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn cors_origins_override_drops_empty_entries() {
        assert_eq!(
            parse_cors_origins("https://a.example,,"),
            vec!["https://a.example".to_string()]
        );
    }
}
