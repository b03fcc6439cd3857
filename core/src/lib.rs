//! Fluent construction of immutable HTTP request descriptions.
//!
//! # Overview
//! [`RequestBuilder`] accumulates the pieces of an outbound HTTP request
//! (URL, method, headers, body), validating each setter call eagerly, and
//! `build` produces an immutable [`Request`] once the required fields are
//! present. Nothing here touches the network: a `Request` is plain data
//! for whatever transport executes the actual round-trip.
//!
//! # Design
//! - Absence is explicit: setter arguments and builder fields are
//!   `Option`s, never sentinels, so "unset" is a distinct, checkable
//!   state.
//! - Validation is eager in setters, completeness is checked in `build`
//!   (URL before method), and every error surfaces to the caller.
//! - `build` hands each `Request` its own copy of the header map, so a
//!   reused builder cannot mutate requests it already produced.
//! - Single-threaded by design: the builder carries no internal
//!   synchronization.

pub mod builder;
pub mod error;
pub mod request;

pub use builder::RequestBuilder;
pub use error::BuildError;
pub use request::{Method, Request};
