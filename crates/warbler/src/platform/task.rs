use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

use super::base::{PlatformError, PlatformResult};
use super::client::Platform;

/// Interval between polls while waiting on a remote task
const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Waiting,
    Running,
    Succeeded,
    Failed,
}

impl TaskState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Succeeded | TaskState::Failed)
    }
}

/// A remote-held content artifact referenced by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<String>,
}

impl Block {
    /// Decode the inline payload. Blocks whose bytes stayed on the platform
    /// decode to an empty buffer.
    pub fn raw(&self) -> PlatformResult<Vec<u8>> {
        match &self.data {
            Some(data) => base64::engine::general_purpose::STANDARD
                .decode(data)
                .map_err(|e| PlatformError::Response(format!("invalid block payload: {}", e))),
            None => Ok(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskOutput {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    task_id: String,
    state: TaskState,
    #[serde(default)]
    status_message: Option<String>,
    #[serde(default)]
    output: Option<TaskOutput>,
}

/// Handle to an in-flight remote computation. Created on submission, waited
/// on exactly once, and discarded after its result is read.
pub struct Task {
    platform: Platform,
    record: TaskRecord,
}

impl Task {
    pub(crate) fn from_response(platform: Platform, body: Value) -> PlatformResult<Self> {
        let record: TaskRecord = serde_json::from_value(body.clone())
            .map_err(|_| PlatformError::Response(format!("unexpected task payload: {}", body)))?;
        Ok(Self { platform, record })
    }

    pub fn task_id(&self) -> &str {
        &self.record.task_id
    }

    pub fn state(&self) -> TaskState {
        self.record.state
    }

    /// Wait until the task reaches a terminal state and return its output.
    ///
    /// Polls the platform at a fixed interval. There is no overall timeout
    /// here; the transport client's per-request limit is the only bound.
    pub async fn wait(mut self) -> PlatformResult<TaskOutput> {
        loop {
            match self.record.state {
                TaskState::Succeeded => return Ok(self.record.output.unwrap_or_default()),
                TaskState::Failed => {
                    return Err(PlatformError::TaskFailed {
                        task_id: self.record.task_id,
                        message: self
                            .record
                            .status_message
                            .unwrap_or_else(|| "task failed".to_string()),
                    })
                }
                TaskState::Waiting | TaskState::Running => {
                    tokio::time::sleep(POLL_INTERVAL).await;
                    let body = self
                        .platform
                        .post("task/status", json!({ "taskId": self.record.task_id }))
                        .await?;
                    self.record = serde_json::from_value(body.clone()).map_err(|_| {
                        PlatformError::Response(format!("unexpected task payload: {}", body))
                    })?;
                }
            }
        }
    }
}
