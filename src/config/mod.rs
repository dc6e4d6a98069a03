use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub tenancy: TenancyConfig,
    pub client: ClientConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenancyConfig {
    /// Base domains tenants are served under as subdomains. Empty means
    /// hosts are classified by label count alone.
    pub platform_domains: Vec<String>,
    /// Organization directory file; the built-in directory is used when unset
    pub directory_path: Option<PathBuf>,
    /// Prefer `X-Forwarded-Host` over `Host` (behind a trusted proxy only)
    pub trust_forwarded_host: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub storage_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub enable_request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("PROPERTYHUB_BIND_ADDRESS") {
            self.server.bind_address = v;
        }
        if let Some(port) = env::var("PROPERTYHUB_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // Tenancy overrides
        if let Ok(v) = env::var("TENANCY_PLATFORM_DOMAINS") {
            self.tenancy.platform_domains = split_list(&v);
        }
        if let Ok(v) = env::var("TENANCY_DIRECTORY_PATH") {
            self.tenancy.directory_path = (!v.trim().is_empty()).then(|| PathBuf::from(v.trim()));
        }
        if let Ok(v) = env::var("TENANCY_TRUST_FORWARDED_HOST") {
            self.tenancy.trust_forwarded_host = v.parse().unwrap_or(self.tenancy.trust_forwarded_host);
        }

        // Client overrides
        if let Ok(v) = env::var("PROPERTYHUB_CLIENT_DIR") {
            self.client.storage_dir = PathBuf::from(v);
        }

        // API overrides
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = split_list(&v);
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                bind_address: "0.0.0.0".to_string(),
                port: 3000,
            },
            tenancy: TenancyConfig {
                platform_domains: Vec::new(),
                directory_path: None,
                trust_forwarded_host: false,
            },
            client: ClientConfig {
                storage_dir: default_client_dir(),
            },
            api: ApiConfig {
                enable_request_logging: true,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["http://localhost:3000".to_string(), "http://localhost:5173".to_string()],
            },
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                bind_address: "0.0.0.0".to_string(),
                port: 3000,
            },
            tenancy: TenancyConfig {
                platform_domains: vec!["staging.propertyhub.app".to_string()],
                directory_path: None,
                trust_forwarded_host: true,
            },
            client: ClientConfig {
                storage_dir: default_client_dir(),
            },
            api: ApiConfig {
                enable_request_logging: true,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.propertyhub.app".to_string()],
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                bind_address: "0.0.0.0".to_string(),
                port: 3000,
            },
            tenancy: TenancyConfig {
                platform_domains: vec!["propertyhub.app".to_string()],
                directory_path: None,
                trust_forwarded_host: true,
            },
            client: ClientConfig {
                storage_dir: default_client_dir(),
            },
            api: ApiConfig {
                enable_request_logging: false,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://propertyhub.app".to_string()],
            },
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn default_client_dir() -> PathBuf {
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".config").join("propertyhub").join("client"),
        Err(_) => env::temp_dir().join("propertyhub").join("client"),
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[macro_export]
macro_rules! is_development {
    () => {
        matches!($crate::config::CONFIG.environment, $crate::config::Environment::Development)
    };
}
