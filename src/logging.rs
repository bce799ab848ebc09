// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Installs the tracing subscriber with env filtering and json/pretty/compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

//! Structured logging configuration
//!
//! | variable | effect |
//! |---|---|
//! | `RUST_LOG` | filter directives, `info` when unset |
//! | `LOG_FORMAT` | `json`, `compact`, anything else is pretty |
//! | `LOG_INCLUDE_LOCATION`, `LOG_INCLUDE_THREAD`, `LOG_INCLUDE_SPANS` | extra detail when set |
//! | `ENVIRONMENT` | `production` turns every detail on |

use std::env;
use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::Environment;
use crate::constants::{env_vars, service_names};

/// Dependencies that are chatty at `info`
const QUIET_TARGETS: [&str; 5] = [
    "hyper=warn",
    "hyper::proto=warn",
    "sqlx=warn",
    "sqlx::query=warn",
    "tower_http=info",
];

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines for log shippers
    Json,
    /// Multi-line human format
    #[default]
    Pretty,
    /// Single-line human format
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, pretty for anything unknown
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Optional per-event detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct LogDetail {
    /// Source file and line
    pub location: bool,
    /// Thread id and name
    pub thread: bool,
    /// Span open/close events
    pub spans: bool,
}

impl LogDetail {
    /// Everything on
    #[must_use]
    pub const fn full() -> Self {
        Self {
            location: true,
            thread: true,
            spans: true,
        }
    }

    fn from_env() -> Self {
        let set = |name: &str| env::var(name).is_ok();
        Self {
            location: set("LOG_INCLUDE_LOCATION"),
            thread: set("LOG_INCLUDE_THREAD"),
            spans: set("LOG_INCLUDE_SPANS"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Filter directives (`info`, `gestor_receitas=debug`, ...)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Extra detail
    pub detail: LogDetail,
    /// Deployment environment reported at startup
    pub environment: Environment,
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = Environment::from_str_or_default(
            &env::var(env_vars::ENVIRONMENT).unwrap_or_default(),
        );
        let detail = if environment.is_production() {
            LogDetail::full()
        } else {
            LogDetail::from_env()
        };

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: LogFormat::parse(&env::var("LOG_FORMAT").unwrap_or_default()),
            detail,
            environment,
        }
    }

    /// Configured level plus the quiet dependency targets
    fn env_filter(&self) -> EnvFilter {
        let level = if self.level.is_empty() {
            "info"
        } else {
            self.level.as_str()
        };
        QUIET_TARGETS
            .iter()
            .filter_map(|target| target.parse::<Directive>().ok())
            .fold(EnvFilter::new(level), EnvFilter::add_directive)
    }

    fn fmt_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let span_events = if self.detail.spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_writer(io::stdout)
            .with_file(self.detail.location)
            .with_line_number(self.detail.location)
            .with_thread_ids(self.detail.thread)
            .with_thread_names(self.detail.thread)
            .with_span_events(span_events);

        match self.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Pretty => layer.boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.fmt_layer())
            .with(self.env_filter())
            .try_init()?;

        info!(
            service = service_names::GESTOR_RECEITAS,
            version = service_names::SERVICE_VERSION,
            environment = %self.environment,
            level = %self.level,
            format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
