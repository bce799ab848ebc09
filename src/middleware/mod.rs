// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation, per-request spans and the CORS layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

/// CORS configuration
pub mod cors;
/// Request id and tracing span layers
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{make_request_span, with_request_tracing, REQUEST_ID_HEADER};
