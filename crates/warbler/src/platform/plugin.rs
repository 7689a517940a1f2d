use serde_json::json;

use super::base::PlatformResult;
use super::client::Platform;
use super::task::Task;

/// An instance of a remote plugin, bound to the workspace it was created in.
#[derive(Debug)]
pub struct PluginInstance {
    platform: Platform,
    instance_id: String,
}

impl PluginInstance {
    pub(crate) fn new<S: Into<String>>(platform: Platform, instance_id: S) -> Self {
        Self {
            platform,
            instance_id: instance_id.into(),
        }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Submit text to the plugin, returning a handle to the remote task.
    ///
    /// With `append_output_to_file` set, the platform appends the produced
    /// blocks to a managed file instead of returning raw payloads inline.
    pub async fn generate(&self, text: &str, append_output_to_file: bool) -> PlatformResult<Task> {
        let body = self
            .platform
            .post(
                "plugin/instance/generate",
                json!({
                    "instanceId": self.instance_id,
                    "text": text,
                    "appendOutputToFile": append_output_to_file,
                }),
            )
            .await?;

        Task::from_response(self.platform.clone(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::super::configs::PlatformConfig;
    use super::super::task::TaskState;
    use super::*;

    #[tokio::test]
    async fn test_generate_submits_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/plugin/instance/generate")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "instanceId": "inst-1",
                "text": "hello",
                "appendOutputToFile": true,
            })))
            .with_status(200)
            .with_body(r#"{"taskId": "t-1", "state": "waiting"}"#)
            .create_async()
            .await;

        let platform = Platform::new(PlatformConfig::new(server.url(), "test-key")).unwrap();
        let instance = PluginInstance::new(platform, "inst-1");
        let task = instance.generate("hello", true).await.unwrap();

        assert_eq!(task.task_id(), "t-1");
        assert_eq!(task.state(), TaskState::Waiting);
        mock.assert_async().await;
    }
}
