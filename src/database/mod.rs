// ABOUTME: SQLite connection management and schema bootstrap
// ABOUTME: Owns the pool, runs idempotent migrations and answers readiness pings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! # Database
//!
//! [`Database`] wraps a `SqlitePool` configured with foreign keys enforced.
//! Repositories in [`repositories`] share that pool.

/// Repository traits and their SQLite implementations
pub mod repositories;
/// RAII transaction guard
pub mod transactions;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::config::DatabaseUrl;
use crate::constants::database::DEFAULT_MAX_CONNECTIONS;
use crate::errors::DatabaseError;

pub use transactions::{SqliteTransactionGuard, TransactionGuard};

/// Schema statements, applied in order
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "categoria",
        r"
        CREATE TABLE IF NOT EXISTS categoria (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL
        )
        ",
    ),
    (
        "ingrediente",
        r"
        CREATE TABLE IF NOT EXISTS ingrediente (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL
        )
        ",
    ),
    (
        "receita",
        r"
        CREATE TABLE IF NOT EXISTS receita (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            descricao TEXT,
            tempo_de_preparo INTEGER NOT NULL DEFAULT 0,
            categoria_id INTEGER REFERENCES categoria(id)
        )
        ",
    ),
    (
        "receita_ingrediente",
        r"
        CREATE TABLE IF NOT EXISTS receita_ingrediente (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            receita_id INTEGER NOT NULL REFERENCES receita(id) ON DELETE CASCADE,
            ingrediente_id INTEGER NOT NULL REFERENCES ingrediente(id),
            quantidade TEXT,
            unidade_medida TEXT
        )
        ",
    ),
    (
        "idx_receita_ingrediente_receita",
        "CREATE INDEX IF NOT EXISTS idx_receita_ingrediente_receita ON receita_ingrediente(receita_id)",
    ),
    (
        "idx_receita_ingrediente_ingrediente",
        "CREATE INDEX IF NOT EXISTS idx_receita_ingrediente_ingrediente ON receita_ingrediente(ingrediente_id)",
    ),
];

/// Connection pool handle
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect and run migrations
    ///
    /// In-memory databases get a single long-lived connection so every
    /// query sees the same data. File databases are created if missing,
    /// along with their parent directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened or the schema cannot be created
    pub async fn new(database_url: &str) -> Result<Self, DatabaseError> {
        let url = DatabaseUrl::parse_url(database_url);

        if let DatabaseUrl::SQLite { path } = &url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DatabaseError::ConnectionError {
                        context: format!("cannot create {}: {e}", parent.display()),
                    })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&url.to_connection_string())
            .map_err(|e| DatabaseError::ConnectionError {
                context: e.to_string(),
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(DEFAULT_MAX_CONNECTIONS)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::ConnectionError {
                context: e.to_string(),
            })?;

        let database = Self { pool };
        database.migrate().await?;
        info!(database = %url.to_connection_string(), "Database initialized");
        Ok(database)
    }

    /// Create tables and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if any schema statement fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        for (name, statement) in MIGRATIONS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DatabaseError::migration(format!("{name}: {e}")))?;
            debug!(migration = name, "Applied schema statement");
        }
        Ok(())
    }

    /// `SELECT 1` round-trip used by the readiness check
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Shared pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
