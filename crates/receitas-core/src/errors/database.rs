// ABOUTME: Storage-layer error type returned by repositories and transaction guards
// ABOUTME: Classifies sqlx failures so referential conflicts surface distinctly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

use thiserror::Error;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Pool could not be created or a connection could not be acquired
    #[error("Database connection failed: {context}")]
    ConnectionError {
        /// Underlying failure
        context: String,
    },

    /// Schema bootstrap failed
    #[error("Database migration failed: {context}")]
    MigrationError {
        /// Underlying failure
        context: String,
    },

    /// Statement failed to execute or a row could not be decoded
    #[error("Database query failed: {context}")]
    QueryError {
        /// Underlying failure
        context: String,
    },

    /// Foreign key or uniqueness constraint rejected the statement
    #[error("Database constraint violated: {context}")]
    ConstraintViolation {
        /// Underlying failure
        context: String,
    },

    /// Begin, commit or rollback failed
    #[error("Database transaction failed: {context}")]
    TransactionError {
        /// Underlying failure
        context: String,
    },
}

impl DatabaseError {
    /// Build a transaction error from any displayable failure
    pub fn transaction(error: impl std::fmt::Display) -> Self {
        Self::TransactionError {
            context: error.to_string(),
        }
    }

    /// Build a migration error from any displayable failure
    pub fn migration(error: impl std::fmt::Display) -> Self {
        Self::MigrationError {
            context: error.to_string(),
        }
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db_error)
                if db_error.is_foreign_key_violation() || db_error.is_unique_violation() =>
            {
                Self::ConstraintViolation {
                    context: db_error.message().to_owned(),
                }
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ConnectionError {
                    context: error.to_string(),
                }
            }
            _ => Self::QueryError {
                context: error.to_string(),
            },
        }
    }
}
