use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::models::message::Message;
use crate::platform::client::Platform;
use crate::speech::SpeechTool;

/// The entry point the interactive runner drives. Implementations own the
/// conversation logic; the runner only forwards messages and displays results.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Handle one incoming message and return the resulting messages
    async fn create_response(&self, incoming_message: Message) -> Result<Vec<Message>>;
}

/// A minimal demonstration agent: every prompt is answered with a spoken
/// rendition of it, generated through the speech tool.
pub struct VoiceAgent {
    speech: SpeechTool,
}

impl VoiceAgent {
    pub fn new(platform: Platform) -> Self {
        Self {
            speech: SpeechTool::new(platform),
        }
    }
}

#[async_trait]
impl Agent for VoiceAgent {
    async fn create_response(&self, incoming_message: Message) -> Result<Vec<Message>> {
        let block_id = self
            .speech
            .invoke(&Value::String(incoming_message.text.clone()))
            .await?;

        Ok(vec![
            Message::new(
                incoming_message.conversation_id.as_str(),
                "Spoke your prompt out loud.",
            ),
            Message::new(incoming_message.conversation_id.as_str(), block_id.as_str())
                .with_mime_type("audio/mpeg")
                .with_url(block_id.as_str()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::configs::PlatformConfig;
    use serde_json::json;

    fn voice_agent_for(server: &mockito::ServerGuard) -> VoiceAgent {
        let platform = Platform::new(PlatformConfig::new(server.url(), "test-key")).unwrap();
        VoiceAgent::new(platform)
    }

    #[tokio::test]
    async fn test_create_response_returns_text_and_audio() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/plugin/instance/create")
            .with_status(200)
            .with_body(r#"{"instanceId": "inst-1"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/plugin/instance/generate")
            .with_status(200)
            .with_body(
                r#"{"taskId": "t-1", "state": "succeeded", "output": {"blocks": [{"id": "b1"}]}}"#,
            )
            .create_async()
            .await;

        let agent = voice_agent_for(&server);
        let messages = agent
            .create_response(Message::new("123", "hello"))
            .await
            .unwrap();

        assert_eq!(messages.len(), 2);
        assert!(!messages[0].is_media());
        assert!(messages[1].is_media());
        assert_eq!(messages[1].url.as_deref(), Some("b1"));
        assert_eq!(messages[1].conversation_id, "123");
    }

    #[tokio::test]
    async fn test_create_response_propagates_tool_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/plugin/instance/create")
            .with_status(200)
            .with_body(r#"{"instanceId": "inst-1"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/plugin/instance/generate")
            .with_status(200)
            .with_body(r#"{"taskId": "t-1", "state": "succeeded", "output": {"blocks": []}}"#)
            .create_async()
            .await;

        let agent = voice_agent_for(&server);
        let error = agent
            .create_response(Message::new("123", "hello"))
            .await
            .unwrap_err();

        assert!(error.to_string().contains("generate_spoken_audio"));
    }
}
