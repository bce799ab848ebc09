// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates x-request-id values and wraps every request in a span carrying it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gestor de Receitas contributors

use std::time::Duration;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::Router;
use http::{Request, Response};
use tower::ServiceBuilder;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span for one HTTP request: method, matched route and request id
pub fn make_request_span(request: &Request<Body>) -> Span {
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %path,
        request_id = %request_id,
    )
}

/// Wrap `router` with request id generation, tracing and id propagation
///
/// An incoming `x-request-id` is kept; otherwise a UUID is generated. The
/// same value is echoed on the response.
pub fn with_request_tracing(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_request_span)
                    .on_request(|_request: &Request<Body>, _span: &Span| {})
                    .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    })
                    .on_failure(
                        |error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                            tracing::error!(
                                error = %error,
                                latency_ms = %latency.as_millis(),
                                "request failed"
                            );
                        },
                    ),
            )
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}
