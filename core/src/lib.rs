//! Client core for the todo service.
//!
//! # Overview
//! `TodoStore` keeps a cached copy of the remote todo list and reconciles it
//! with the backend after every mutation by reloading the whole list. It
//! talks to the backend through the `TodoService` trait; `HttpTodoService`
//! implements that trait over JSON/HTTP.
//!
//! # Design
//! - `TodoClient` is stateless: `build_*` produces a plain-data request and
//!   `parse_*` consumes a plain-data response, so the wire format is testable
//!   without I/O.
//! - A `Transport` performs the actual round-trip (`ReqwestTransport` in
//!   production, scripted fakes in tests).
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod store;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{HttpTodoService, ReqwestTransport, TodoService, Transport};
pub use store::{EditSession, Snapshot, TodoStore};
pub use types::{NewTodo, Todo, TodoId};
