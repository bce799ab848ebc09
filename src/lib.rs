// ABOUTME: Main library entry point for the Gestor de Receitas recipe catalog API
// ABOUTME: CRUD over categories, ingredients and recipes with SQLite storage and an axum HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

#![deny(unsafe_code)]

//! # Gestor de Receitas
//!
//! HTTP/JSON API for a recipe catalog: categories, ingredients, and recipes
//! that reference one category and many ingredients with a per-recipe
//! quantity and unit.
//!
//! ## Layers
//!
//! - **routes**: axum handlers, one group per entity
//! - **services**: precondition checks and recipe assembly
//! - **database**: repository traits and their SQLite implementations
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gestor_receitas::{config::ServerConfig, database::Database, resources::ServerResources, server};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! let database = Database::new(&config.database_url.to_connection_string()).await?;
//! server::run(Arc::new(ServerResources::new(database)), &config).await?;
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// Service identity, defaults and client-facing messages
pub mod constants;

/// SQLite pool, schema and repositories
pub mod database;

/// Error taxonomy re-exported from `receitas-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Domain records and recipe wire shapes
pub mod models;

/// Shared state for route handlers
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Business logic
pub mod services;
