// ABOUTME: SQLite implementation of CategoryRepository
// ABOUTME: Maps the categoria table to Category records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

use super::CategoryRepository;
use crate::errors::DatabaseError;
use crate::models::Category;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// SQLite implementation of `CategoryRepository`
pub struct CategoryRepositoryImpl {
    pool: SqlitePool,
}

impl CategoryRepositoryImpl {
    /// Create a new repository on the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_category(row: &SqliteRow) -> Result<Category, DatabaseError> {
    Ok(Category {
        id: Some(row.try_get("id")?),
        nome: row.try_get("nome")?,
    })
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Category>, DatabaseError> {
        let rows = sqlx::query("SELECT id, nome FROM categoria ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_category).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DatabaseError> {
        let row = sqlx::query("SELECT id, nome FROM categoria WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_category).transpose()
    }

    async fn save(&self, category: &Category) -> Result<Category, DatabaseError> {
        let id = if let Some(id) = category.id {
            sqlx::query(
                r"
                INSERT INTO categoria (id, nome) VALUES ($1, $2)
                ON CONFLICT(id) DO UPDATE SET nome = excluded.nome
                ",
            )
            .bind(id)
            .bind(&category.nome)
            .execute(&self.pool)
            .await?;
            id
        } else {
            sqlx::query("INSERT INTO categoria (nome) VALUES ($1)")
                .bind(&category.nome)
                .execute(&self.pool)
                .await?
                .last_insert_rowid()
        };

        Ok(Category {
            id: Some(id),
            nome: category.nome.clone(),
        })
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categoria WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM categoria WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
