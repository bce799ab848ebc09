// ABOUTME: Error types for the service crate
// ABOUTME: Re-exports the unified error taxonomy from receitas-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! Re-exports of [`receitas_core::errors`] so service code can write
//! `crate::errors::AppError`.

pub use receitas_core::errors::{
    AppError, AppResult, DatabaseError, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
