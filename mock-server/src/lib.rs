//! HTTP echo server used as the transport endpoint in tests.
//!
//! # Design
//! The server holds no state and declares no routes: a single fallback
//! handler accepts every method on every path, records what it observed,
//! and returns the observation as JSON. Tests compare that observation
//! against the request description that was executed, which makes the
//! wire behavior of a built request directly assertable.

use std::collections::HashMap;

use axum::{
    http::{HeaderMap, Method, Uri},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What the server observed about one incoming request.
///
/// Header names arrive lowercased by the HTTP stack, and repeated headers
/// collapse to the last value seen. An empty received body is reported as
/// `None`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

pub fn app() -> Router {
    Router::new().fallback(echo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Echo> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    Json(Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
        body: (!body.is_empty()).then_some(body),
    })
}
