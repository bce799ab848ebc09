// ABOUTME: Configuration module root
// ABOUTME: Re-exports the environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

/// Environment variable parsing and server configuration
pub mod environment;

pub use environment::{CorsConfig, DatabaseUrl, Environment, ServerConfig};
