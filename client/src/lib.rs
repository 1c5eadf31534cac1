//! Request builder and response parser for the todo service.
//!
//! # Overview
//! Nothing here touches the network. `TodoClient::build_*` produces an
//! `HttpRequest`, the caller performs the round-trip, and
//! `TodoClient::parse_*` turns the `HttpResponse` into a typed result.
//!
//! The DTOs in [`types`] are defined independently of the server crate;
//! the end-to-end tests catch schema drift between the two.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{DeleteConfirmation, Todo, TodoDraft};
