//! Plain-data description of an outbound HTTP request.
//!
//! # Design
//! `Request` is the immutable product of a `RequestBuilder`: once built,
//! nothing about it can change. Fields are private and reachable only
//! through accessors, and the sole constructor is crate-internal, so every
//! `Request` in existence has passed the builder's completeness checks.
//! All fields use owned types (`String`, `HashMap`) so values can be
//! handed to a transport without lifetime concerns.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method of a request description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl Method {
    /// Wire name of the method, as it appears on a request line.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable, fully-validated HTTP request description.
///
/// Produced by [`RequestBuilder::build`](crate::RequestBuilder::build) and
/// consumed by whatever executes the actual round-trip. The URL and method
/// are always present; headers and body may be empty. Header names are
/// unique, with the builder keeping the last value set for a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    method: Method,
    url: String,
    #[serde(default)]
    headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        url: String,
        headers: HashMap<String, String>,
        body: Option<String>,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request body, if one was set. `Some("")` means an explicitly
    /// empty body and is distinct from `None`.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Value of a single header, if set.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
