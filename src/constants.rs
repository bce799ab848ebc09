// ABOUTME: System-wide constants and environment defaults for the recipe catalog service
// ABOUTME: Service identity, default ports and URLs, and business-rule messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! # Constants Module
//!
//! Hardcoded defaults and the environment variable names that override them.

/// Service identity used in logs and health payloads
pub mod service_names {
    /// Service name reported in structured logs
    pub const GESTOR_RECEITAS: &str = "gestor-receitas";

    /// Crate version from Cargo.toml
    pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Default network settings
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;

    /// Default bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";

    /// Default CORS origin policy
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
}

/// Default storage settings
pub mod database {
    /// Default SQLite database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/receitas.db";

    /// In-memory SQLite URL
    pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

    /// Pool size for file-backed databases
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
}

/// Environment variable names
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Messages surfaced to API clients
pub mod messages {
    /// Recipe creation with an empty ingredient catalog
    pub const NO_INGREDIENTS_REGISTERED: &str = "Nenhum ingrediente cadastrado.";

    /// Blank `nome` on any entity
    pub const BLANK_NAME: &str = "O campo nome não pode estar em branco";
}
