//! Fluent accumulator for building validated [`Request`] values.
//!
//! # Design
//! Setters validate eagerly: every argument is explicitly optional, an
//! absent one fails the call with [`BuildError::MissingArgument`], and a
//! failed call leaves every field untouched. `build` performs the
//! completeness check (URL before method) and hands the new `Request` its
//! own copy of the header map, so a builder reused after `build` can never
//! mutate a request it already produced.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::BuildError;
use crate::request::{Method, Request};

/// Fluent builder for [`Request`].
///
/// Setters may be called in any order, any number of times; later calls
/// overwrite earlier ones, and headers merge by name. Each setter returns
/// the builder again on success, so chains compose with `?`:
///
/// ```
/// use request_core::{Method, RequestBuilder};
///
/// # fn main() -> Result<(), request_core::BuildError> {
/// let mut builder = RequestBuilder::new();
/// let request = builder
///     .url(Some("https://example.com/widgets"))?
///     .method(Some(Method::Post))?
///     .body(Some(r#"{"name":"bolt"}"#))?
///     .header(Some("x-request-source"), Some("docs"))?
///     .build()?;
/// assert_eq!(request.url(), "https://example.com/widgets");
/// # Ok(())
/// # }
/// ```
///
/// The builder is a plain mutable object with no internal synchronization.
/// Mutating one from multiple threads requires external locking by the
/// caller.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    url: Option<String>,
    method: Option<Method>,
    body: Option<String>,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request URL, overwriting any previous value.
    ///
    /// Presence is the only thing checked: the string is never parsed, so
    /// a syntactically bogus URL is accepted here and surfaces only when a
    /// transport tries to use it.
    pub fn url(&mut self, url: Option<&str>) -> Result<&mut Self, BuildError> {
        let url = url.ok_or(BuildError::MissingArgument("url"))?;
        self.url = Some(url.to_string());
        Ok(self)
    }

    /// Set the HTTP method, overwriting any previous value.
    pub fn method(&mut self, method: Option<Method>) -> Result<&mut Self, BuildError> {
        let method = method.ok_or(BuildError::MissingArgument("method"))?;
        self.method = Some(method);
        Ok(self)
    }

    /// Set the request body, overwriting any previous value.
    ///
    /// An empty string is a valid body, distinct from never setting one.
    /// Builders for payload-less requests (e.g. GET) simply skip this.
    pub fn body(&mut self, body: Option<&str>) -> Result<&mut Self, BuildError> {
        let body = body.ok_or(BuildError::MissingArgument("body"))?;
        self.body = Some(body.to_string());
        Ok(self)
    }

    /// Serialize `value` to JSON, set it as the request body and set the
    /// `content-type: application/json` header, overwriting both.
    pub fn json_body<T: Serialize>(&mut self, value: &T) -> Result<&mut Self, BuildError> {
        let body = serde_json::to_string(value)
            .map_err(|e| BuildError::SerializationError(e.to_string()))?;
        self.body = Some(body);
        self.headers
            .insert("content-type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// Add a header, overwriting any previous value for the same name.
    ///
    /// The name is checked before the value, so a call with both absent
    /// reports the name.
    pub fn header(
        &mut self,
        name: Option<&str>,
        value: Option<&str>,
    ) -> Result<&mut Self, BuildError> {
        let name = name.ok_or(BuildError::MissingArgument("header name"))?;
        let value = value.ok_or(BuildError::MissingArgument("header value"))?;
        self.headers.insert(name.to_string(), value.to_string());
        Ok(self)
    }

    /// Produce a [`Request`] from the accumulated fields.
    ///
    /// The URL is checked before the method, so a builder with neither set
    /// reports [`BuildError::MissingUrl`]. Success leaves the builder
    /// unchanged and reusable, and the returned request owns its own copy
    /// of the header map.
    pub fn build(&self) -> Result<Request, BuildError> {
        let url = self.url.as_ref().ok_or(BuildError::MissingUrl)?;
        let method = self.method.ok_or(BuildError::MissingMethod)?;
        Ok(Request::new(
            method,
            url.clone(),
            self.headers.clone(),
            self.body.clone(),
        ))
    }
}
