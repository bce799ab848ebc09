// ABOUTME: HTTP server assembly and lifecycle
// ABOUTME: Merges the route groups, applies middleware and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::middleware::{setup_cors, with_request_tracing};
use crate::resources::ServerResources;
use crate::routes::{CategoryRoutes, HealthRoutes, IngredientRoutes, RecipeRoutes};

/// Every route group with tracing and CORS applied
pub fn build_router(resources: &Arc<ServerResources>, config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(CategoryRoutes::routes(Arc::clone(resources)))
        .merge(IngredientRoutes::routes(Arc::clone(resources)))
        .merge(RecipeRoutes::routes(Arc::clone(resources)))
        .layer(setup_cors(config));

    with_request_tracing(router)
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>, config: &ServerConfig) -> Result<()> {
    let app = build_router(&resources, config);
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(address = %address, "HTTP server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
