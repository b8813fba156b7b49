//! Error types for the todo API client and store.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient`, `TodoService` implementations and
/// `TodoStore` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response (connect, timeout, TLS...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The operation needs an id but the todo was never persisted.
    #[error("todo has no id")]
    Unpersisted,
}

/// Errors raised while reading `ClientConfig` from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
}
