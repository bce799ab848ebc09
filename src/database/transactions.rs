// ABOUTME: RAII transaction guard for multi-statement writes
// ABOUTME: Rolls back automatically when dropped without an explicit commit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! Transaction guard
//!
//! ```text
//! let mut guard = SqliteTransactionGuard::new(pool.begin().await?);
//! sqlx::query("DELETE FROM receita_ingrediente WHERE receita_id = $1")
//!     .bind(id)
//!     .execute(guard.executor()?)
//!     .await?;
//! guard.commit().await?;
//! ```
//!
//! Returning early with `?` drops the guard and sqlx rolls the transaction back.

use sqlx::{Database, Transaction};
use tracing::{debug, warn};

use crate::errors::DatabaseError;

/// RAII guard for database transactions ensuring automatic rollback on drop
pub struct TransactionGuard<'c, DB: Database> {
    transaction: Option<Transaction<'c, DB>>,
}

impl<'c, DB: Database> TransactionGuard<'c, DB> {
    /// Wrap a transaction obtained from `pool.begin()`
    #[must_use]
    pub fn new(transaction: Transaction<'c, DB>) -> Self {
        debug!("TransactionGuard created - transaction will auto-rollback if not committed");
        Self {
            transaction: Some(transaction),
        }
    }

    /// Commit the transaction and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was already consumed or the commit fails
    pub async fn commit(mut self) -> Result<(), DatabaseError> {
        let tx = self.transaction.take().ok_or_else(|| {
            DatabaseError::transaction("Transaction already consumed - cannot commit")
        })?;
        tx.commit()
            .await
            .map_err(|e| DatabaseError::transaction(format!("commit failed: {e}")))?;
        debug!("TransactionGuard committed successfully");
        Ok(())
    }

    /// Connection to run statements on inside the transaction
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was already committed
    pub fn executor(&mut self) -> Result<&mut <DB as Database>::Connection, DatabaseError> {
        self.transaction.as_deref_mut().ok_or_else(|| {
            DatabaseError::transaction("Transaction already consumed - guard used after commit")
        })
    }
}

impl<DB: Database> Drop for TransactionGuard<'_, DB> {
    fn drop(&mut self) {
        if self.transaction.is_some() {
            warn!("TransactionGuard dropped without commit - transaction will be rolled back");
        }
    }
}

/// `SQLite` transaction guard
pub type SqliteTransactionGuard<'c> = TransactionGuard<'c, sqlx::Sqlite>;
