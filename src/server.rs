//! HTTP side of the exporter: one scrape of ClickHouse per /metrics request.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use prometheus::{Encoder, TextEncoder};

use crate::clickhouse::Exporter;

pub async fn run(listen: SocketAddr, exporter: Exporter) -> anyhow::Result<()> {
    let app = Router::new()
        .route("/", get(index))
        .route("/metrics", get(metrics))
        .with_state(Arc::new(exporter));

    let listener = tokio::net::TcpListener::bind(listen).await?;
    log::info!("Serving metrics on http://{listen}/metrics");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(
        "<html>\
         <head><title>ClickHouse Exporter</title></head>\
         <body><h1>ClickHouse Exporter</h1><p><a href=\"/metrics\">Metrics</a></p></body>\
         </html>",
    )
}

/// A failed scrape answers 500 for this request only; other targets and
/// later scrapes are unaffected.
async fn metrics(State(exporter): State<Arc<Exporter>>) -> Response {
    let registry = match exporter.scrape().await {
        Ok(registry) => registry,
        Err(e) => {
            log::error!("scrape failed: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("scrape failed: {e}\n"))
                .into_response();
        }
    };

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&registry.gather(), &mut buffer) {
        log::error!("encoding metrics failed: {e}");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    (
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        buffer,
    )
        .into_response()
}
