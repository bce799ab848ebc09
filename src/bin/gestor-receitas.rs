// ABOUTME: Server binary for the Gestor de Receitas API
// ABOUTME: Loads configuration, initializes logging and storage, then serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! # Gestor de Receitas Server Binary

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use gestor_receitas::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "gestor-receitas")]
#[command(about = "Gestor de Receitas - CRUD API for recipes, ingredients and categories")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (`sqlite:<path>` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database_url = DatabaseUrl::parse_url(database_url);
    }

    info!("{}", config.summary());

    let database = Database::new(&config.database_url.to_connection_string()).await?;
    let resources = Arc::new(ServerResources::new(database.clone()));

    display_available_endpoints(&config);

    let result = server::run(resources, &config).await;
    database.close().await;
    if let Err(e) = &result {
        error!("Server error: {e:#}");
    }
    result
}

fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());
    info!("=== Available API Endpoints ===");
    for group in ["categorias", "ingredientes", "receitas"] {
        info!("   {base}/{group}  (GET, POST) and {base}/{group}/{{id}}  (GET, PUT, DELETE)");
    }
    info!("   PATCH {base}/receitas/{{id}}");
    info!("   Health: {base}/health  Readiness: {base}/ready");
}
