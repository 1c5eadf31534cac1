//! In-memory todo service over HTTP.
//!
//! # Overview
//! Three layers, leaves first:
//! - [`store`]: owns the `Vec<Todo>`, assigns ids, does lookups.
//! - [`service`]: pass-through use cases over one shared store.
//! - [`handlers`]: axum routes; the only place absence becomes a 404.
//!
//! State lives for the lifetime of the router and is never persisted.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod service;
pub mod store;
pub mod telemetry;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use model::{DeleteConfirmation, ErrorBody, Todo, TodoDraft, TodoId};
pub use service::TodoService;
pub use store::TodoStore;

/// Router backed by a fresh, empty store.
pub fn app() -> Router {
    handlers::router(TodoService::default())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}
