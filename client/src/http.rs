//! Plain-data HTTP request and response.
//!
//! The client builds `HttpRequest` values and parses `HttpResponse` values;
//! executing the request is left to the caller. Owned fields only, so values
//! can be handed to any transport without lifetime concerns.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
