//! Error type for request construction.
//!
//! # Design
//! The two `build` preconditions get dedicated variants because callers
//! distinguish "no URL yet" from "no method yet", and the check order
//! (URL first) is part of the contract. Absent setter arguments share one
//! variant carrying the name of the argument at fault.

use std::fmt;

/// Errors returned by `RequestBuilder` setters and `build`.
#[derive(Debug)]
pub enum BuildError {
    /// A setter was called with an absent value for the named argument.
    MissingArgument(&'static str),

    /// `build` was called before a URL was set.
    MissingUrl,

    /// `build` was called with a URL set but no method.
    MissingMethod,

    /// A JSON body payload could not be serialized.
    SerializationError(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingArgument(name) => {
                write!(f, "{name} cannot be absent")
            }
            BuildError::MissingUrl => write!(f, "url is required"),
            BuildError::MissingMethod => write!(f, "method is required"),
            BuildError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for BuildError {}
