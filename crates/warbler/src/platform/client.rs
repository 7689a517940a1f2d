use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use super::base::{PlatformError, PlatformResult};
use super::configs::PlatformConfig;
use super::plugin::PluginInstance;

/// A workspace on the platform, isolating plugin instances and their data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub handle: String,
}

/// Client for the hosted platform. Cheap to clone; clones share the
/// underlying HTTP connection pool.
#[derive(Clone, Debug)]
pub struct Platform {
    client: Client,
    config: PlatformConfig,
}

impl Platform {
    pub fn new(config: PlatformConfig) -> PlatformResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600)) // 10 minutes timeout
            .build()?;

        Ok(Self { client, config })
    }

    /// The workspace id requests are currently scoped to, if any
    pub fn workspace_id(&self) -> Option<&str> {
        self.config.workspace_id.as_deref()
    }

    /// A clone of this client with requests scoped to the given workspace
    pub fn with_workspace(&self, workspace: &Workspace) -> Self {
        let mut config = self.config.clone();
        config.workspace_id = Some(workspace.id.clone());
        Self {
            client: self.client.clone(),
            config,
        }
    }

    /// Instantiate a named remote capability with the given configuration
    pub async fn use_plugin(&self, plugin_handle: &str, config: Value) -> PlatformResult<PluginInstance> {
        let body = self
            .post(
                "plugin/instance/create",
                json!({
                    "pluginHandle": plugin_handle,
                    "config": config,
                }),
            )
            .await?;

        let instance_id = body
            .get("instanceId")
            .and_then(|v| v.as_str())
            .ok_or_else(|| PlatformError::Response(format!("missing instanceId in {}", body)))?;

        Ok(PluginInstance::new(self.clone(), instance_id))
    }

    /// Create a workspace with the given handle
    pub async fn create_workspace(&self, handle: &str) -> PlatformResult<Workspace> {
        let body = self.post("workspace/create", json!({ "handle": handle })).await?;
        serde_json::from_value(body.clone())
            .map_err(|_| PlatformError::Response(format!("unexpected workspace payload: {}", body)))
    }

    /// Create a workspace with a generated handle and return a client scoped to it
    pub async fn temporary_workspace(&self) -> PlatformResult<(Platform, Workspace)> {
        let handle = format!("tmp-{}", Uuid::new_v4());
        let workspace = self.create_workspace(&handle).await?;
        Ok((self.with_workspace(&workspace), workspace))
    }

    /// Delete a workspace and everything stored in it
    pub async fn delete_workspace(&self, id: &str) -> PlatformResult<()> {
        self.post("workspace/delete", json!({ "id": id })).await?;
        Ok(())
    }

    pub(crate) async fn post(&self, path: &str, payload: Value) -> PlatformResult<Value> {
        let url = format!("{}/{}", self.config.api_base.trim_end_matches('/'), path);
        debug!("POST {}", url);

        let mut request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&payload);
        if let Some(workspace_id) = &self.config.workspace_id {
            request = request.header("X-Workspace-Id", workspace_id);
        }

        let response = request.send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(PlatformError::Auth(response.text().await.unwrap_or_default()))
            }
            status => Err(PlatformError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }),
        }
    }
}
