// ABOUTME: Core types for the Gestor de Receitas recipe catalog API
// ABOUTME: Foundation crate with the error taxonomy and the catalog domain records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

#![deny(unsafe_code)]

//! # Receitas Core
//!
//! Foundation crate shared by the HTTP service and its tests. It changes
//! rarely, which keeps incremental builds of the service crate cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the storage-level `DatabaseError`
//! - **models**: `Category`, `Ingredient`, `Recipe` and `RecipeIngredient`

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Catalog domain records
pub mod models;
