// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database URL, CORS origins and deployment mode from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! Environment-based configuration

use crate::constants::{database, env_vars, network};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where the catalog is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory SQLite (tests, throwaway runs)
    Memory,
}

impl DatabaseUrl {
    /// Parse a `DATABASE_URL` value
    ///
    /// `sqlite::memory:` selects an in-memory database; anything else is a
    /// SQLite file path, with or without the `sqlite:` prefix.
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Render as a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => database::MEMORY_DATABASE_URL.to_owned(),
        }
    }

    /// Whether this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(database::DEFAULT_DATABASE_URL)
    }
}

/// CORS policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Database location
    pub database_url: DatabaseUrl,
    /// CORS policy
    pub cors: CorsConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: network::DEFAULT_HTTP_PORT,
            host: network::DEFAULT_HOST.to_owned(),
            database_url: DatabaseUrl::default(),
            cors: CorsConfig {
                allowed_origins: network::DEFAULT_CORS_ORIGINS.to_owned(),
            },
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but is not a valid port number
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = env_var_or(env_vars::HTTP_PORT, &network::DEFAULT_HTTP_PORT.to_string())
            .parse()
            .with_context(|| format!("Invalid {} value", env_vars::HTTP_PORT))?;

        Ok(Self {
            http_port,
            host: env_var_or(env_vars::HOST, network::DEFAULT_HOST),
            database_url: DatabaseUrl::parse_url(&env_var_or(
                env_vars::DATABASE_URL,
                database::DEFAULT_DATABASE_URL,
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_vars::CORS_ALLOWED_ORIGINS,
                    network::DEFAULT_CORS_ORIGINS,
                ),
            },
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
        })
    }

    /// `host:port` listen address
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line human description for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Gestor de Receitas: listening on {} (environment: {}, database: {}, CORS: {})",
            self.bind_address(),
            self.environment,
            self.database_url.to_connection_string(),
            self.cors.allowed_origins,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
