//! reqwest-backed implementation of the [`TaskApi`] port.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::domain::{TaskId, TaskRecord, TaskStatus};
use crate::error::{ClientError, Result};
use crate::ports::TaskApi;

use super::wire::{ApiEnvelope, TaskData, TasksData};

/// Bearer-token REST client for the task endpoints.
pub struct RestApi {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl RestApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Network(format!("client build failed: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Empty token means "not signed in": fail without issuing the request.
    fn check_token(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(ClientError::Auth(
                "missing bearer token; request not attempted".to_string(),
            ));
        }
        Ok(())
    }

    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        self.check_token()?;

        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(format!("response read failed: {e}")))?;

        // Error bodies are not guaranteed to be the envelope shape.
        let envelope = serde_json::from_str::<ApiEnvelope<T>>(&body).ok();
        interpret(status, envelope)
    }
}

/// Map an HTTP status + optional envelope to a result.
///
/// Separate from the transport so the taxonomy is testable without a
/// server: 401 -> auth, 403 -> permission, other non-2xx (or a 2xx with
/// `success: false`) -> server error.
fn interpret<T>(status: u16, envelope: Option<ApiEnvelope<T>>) -> Result<T> {
    let message = envelope
        .as_ref()
        .and_then(|e| e.message.clone())
        .unwrap_or_else(|| format!("request failed with status {status}"));

    match status {
        401 => Err(ClientError::Auth(message)),
        403 => Err(ClientError::Permission(message)),
        s if !(200..300).contains(&s) => Err(ClientError::Server { status, message }),
        _ => {
            let envelope = envelope.ok_or_else(|| {
                ClientError::Decode("response body was not the expected envelope".to_string())
            })?;
            if !envelope.success {
                return Err(ClientError::Server { status, message });
            }
            envelope
                .data
                .ok_or_else(|| ClientError::Decode("envelope missing data".to_string()))
        }
    }
}

#[async_trait]
impl TaskApi for RestApi {
    async fn list_tasks(&self) -> Result<Vec<TaskRecord>> {
        tracing::trace!("listing tasks");
        let data: TasksData = self.execute(self.http.get(self.url("/api/tasks"))).await?;
        tracing::trace!(count = data.tasks.len(), "task list received");
        Ok(data.tasks)
    }

    async fn start_task(&self, id: &TaskId) -> Result<TaskRecord> {
        tracing::trace!(task = %id, "starting task");
        let data: TaskData = self
            .execute(
                self.http
                    .post(self.url(&format!("/api/tasks/{}/start", id.as_str()))),
            )
            .await?;
        Ok(data.task)
    }

    async fn complete_task(&self, id: &TaskId) -> Result<TaskRecord> {
        tracing::trace!(task = %id, "completing task");
        let data: TaskData = self
            .execute(
                self.http
                    .post(self.url(&format!("/api/tasks/{}/complete", id.as_str()))),
            )
            .await?;
        Ok(data.task)
    }

    async fn stop_task(&self, id: &TaskId) -> Result<TaskRecord> {
        tracing::trace!(task = %id, "stopping task timer");
        let data: TaskData = self
            .execute(
                self.http
                    .post(self.url(&format!("/api/tasks/{}/stop", id.as_str()))),
            )
            .await?;
        Ok(data.task)
    }

    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> Result<TaskRecord> {
        tracing::trace!(task = %id, status = %status, "updating task status");
        let data: TaskData = self
            .execute(
                self.http
                    .put(self.url(&format!("/api/tasks/{}", id.as_str())))
                    .json(&serde_json::json!({ "status": status })),
            )
            .await?;
        Ok(data.task)
    }
}
