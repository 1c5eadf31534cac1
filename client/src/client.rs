//! Stateless request builder and response parser.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is a `build_*` /
//! `parse_*` pair with the round-trip executed by the caller in between.
//! Every success status is 200; a 404 carries the server's `detail` text.

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{DeleteConfirmation, ErrorBody, Todo, TodoDraft};

const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Synchronous, stateless client for the todo service.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    /// Create a client rooted at `base_url`. A trailing `/` is dropped.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /todos`.
    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todos".to_string(), None)
    }

    /// `GET /todos/{id}`. Any integer is sent as-is; ids the server never
    /// assigned come back as `NotFound`.
    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/todos/{id}"), None)
    }

    /// `POST /todos` with the draft as a JSON body.
    pub fn build_create_todo(&self, draft: &TodoDraft) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(draft).map_err(ClientError::Serialization)?;
        Ok(self.request(HttpMethod::Post, "/todos".to_string(), Some(body)))
    }

    /// `PUT /todos/{id}` with the draft as a JSON body. Replaces the title.
    pub fn build_update_todo(&self, id: i64, draft: &TodoDraft) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(draft).map_err(ClientError::Serialization)?;
        Ok(self.request(HttpMethod::Put, format!("/todos/{id}"), Some(body)))
    }

    /// `DELETE /todos/{id}`.
    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/todos/{id}"), None)
    }

    /// Parse the list response. An empty store yields an empty `Vec`.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ClientError> {
        parse_ok(response)
    }

    /// Parse a single-todo response; 404 becomes `ClientError::NotFound`.
    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        parse_ok(response)
    }

    /// Parse the created todo. The service answers create with 200, not 201.
    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        parse_ok(response)
    }

    /// Parse the updated todo; 404 becomes `ClientError::NotFound`.
    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        parse_ok(response)
    }

    /// Parse the delete confirmation; 404 becomes `ClientError::NotFound`.
    pub fn parse_delete_todo(
        &self,
        response: HttpResponse,
    ) -> Result<DeleteConfirmation, ClientError> {
        parse_ok(response)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let headers = match body {
            Some(_) => vec![(JSON_CONTENT_TYPE.0.to_string(), JSON_CONTENT_TYPE.1.to_string())],
            None => Vec::new(),
        };
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }
}

fn parse_ok<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ClientError> {
    check_status(response).and_then(|body| {
        serde_json::from_str(&body).map_err(ClientError::Deserialization)
    })
}

/// Return the body of a 200 response, or the matching error.
fn check_status(response: HttpResponse) -> Result<String, ClientError> {
    match response.status {
        200 => Ok(response.body),
        404 => {
            let detail = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|e| e.detail)
                .unwrap_or(response.body);
            Err(ClientError::NotFound { detail })
        }
        status => Err(ClientError::Http {
            status,
            body: response.body,
        }),
    }
}
