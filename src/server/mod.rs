//! HTTP server exposing the holiday endpoints
//!
//! Builds the axum router, wires the shared aggregator into request handlers
//! and runs the listener until Ctrl+C.

pub mod api;
mod error;
mod middleware;
mod span;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{middleware::from_fn, routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::aggregator::{HolidayAggregator, HolidayCache};
use crate::data::{HolidayClient, HolidayClientError};

pub use error::json_error_response;

#[derive(Debug, Clone)]
pub struct ServerOpts {
    pub addr: SocketAddr,
    pub holidays_api_url: String,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
    pub countries: Vec<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub holidays: Arc<HolidayAggregator>,
}

pub fn server(holidays: Arc<HolidayAggregator>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(span::span))
        .layer(from_fn(middleware::mw_handle_leaked_5xx))
        .layer(CatchPanicLayer::new());

    Router::new()
        .route(api::health::PATH, get(api::health::handler))
        .route(
            api::holidays::worldwide::PATH,
            get(api::holidays::worldwide::handler),
        )
        .route(
            api::holidays::country::PATH,
            get(api::holidays::country::handler),
        )
        .with_state(AppState { holidays })
        .layer(middleware)
}

pub async fn serve(opts: ServerOpts) -> Result<(), ServerError> {
    tracing::info!("{:?}", opts);

    let client = HolidayClient::new(&opts.holidays_api_url, opts.request_timeout)?;
    let cache = Arc::new(HolidayCache::new());
    let aggregator = HolidayAggregator::new(client, cache)
        .with_countries(opts.countries)
        .with_ttl(opts.cache_ttl);

    let app = server(Arc::new(aggregator)).into_make_service();

    let listener = TcpListener::bind(opts.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: opts.addr,
            source,
        })?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("build holiday client :: {0}")]
    Client(#[from] HolidayClientError),

    #[error("bind :: {addr} :: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
