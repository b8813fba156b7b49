//! The data-access seam consumed by `TodoStore`.
//!
//! # Design
//! `TodoService` is the four-operation contract the store depends on. Each
//! call yields exactly one result; there is no retry, batching or caching at
//! this layer. `HttpTodoService` implements it by pairing the stateless
//! `TodoClient` with a `Transport` that performs the round-trip.

use async_trait::async_trait;
use tracing::debug;

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo, TodoId};

#[async_trait]
pub trait TodoService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Todo>, ApiError>;
    async fn create(&self, todo: NewTodo) -> Result<Todo, ApiError>;
    async fn update(&self, todo: Todo) -> Result<Todo, ApiError>;
    async fn delete(&self, id: TodoId) -> Result<(), ApiError>;
}

/// Executes a plain-data request and returns the raw response.
///
/// Non-2xx statuses are data, not errors; only failures to obtain a
/// response at all map to `ApiError::Transport`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `Transport` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// `TodoService` speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTodoService<T = ReqwestTransport> {
    client: TodoClient,
    transport: T,
}

impl HttpTodoService<ReqwestTransport> {
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(
            TodoClient::new(&config.base_url),
            ReqwestTransport::new(config)?,
        ))
    }
}

impl<T: Transport> HttpTodoService<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

#[async_trait]
impl<T: Transport> TodoService for HttpTodoService<T> {
    async fn get_all(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.send(self.client.build_list_todos()).await?;
        self.client.parse_list_todos(response)
    }

    async fn create(&self, todo: NewTodo) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_create_todo(&todo)?).await?;
        self.client.parse_create_todo(response)
    }

    async fn update(&self, todo: Todo) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_update_todo(&todo)?).await?;
        self.client.parse_update_todo(response)
    }

    async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_todo(id)).await?;
        self.client.parse_delete_todo(response)
    }
}
