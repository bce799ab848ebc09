// ABOUTME: Axum integration for AppError
// ABOUTME: Renders the JSON error body and logs by severity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;

use super::{AppError, ErrorResponse};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                code = ?self.code,
                error = %self.message,
                source = ?self.source,
                "Request failed with server error"
            );
        } else {
            tracing::warn!(code = ?self.code, error = %self.message, "Request rejected");
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
