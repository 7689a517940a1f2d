use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A unit of conversational content exchanged with the agent
pub struct Message {
    pub conversation_id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub created: i64,
}

impl Message {
    /// Create a new text message with the current timestamp
    pub fn new<C, T>(conversation_id: C, text: T) -> Self
    where
        C: Into<String>,
        T: Into<String>,
    {
        Message {
            conversation_id: conversation_id.into(),
            text: text.into(),
            mime_type: None,
            url: None,
            created: Utc::now().timestamp(),
        }
    }

    /// Set the MIME type of the payload
    pub fn with_mime_type<S: Into<String>>(mut self, mime_type: S) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Set the URL or opaque content identifier for binary media
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Whether the MIME type marks this message as binary media
    pub fn is_media(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image") || mime.starts_with("audio"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let message = Message::new("123", "hello")
            .with_mime_type("audio/mpeg")
            .with_url("block-1");

        assert_eq!(message.conversation_id, "123");
        assert_eq!(message.text, "hello");
        assert_eq!(message.mime_type.as_deref(), Some("audio/mpeg"));
        assert_eq!(message.url.as_deref(), Some("block-1"));
    }

    #[test]
    fn test_is_media() {
        assert!(!Message::new("123", "plain text").is_media());
        assert!(Message::new("123", "")
            .with_mime_type("image/png")
            .is_media());
        assert!(Message::new("123", "")
            .with_mime_type("audio/mpeg")
            .is_media());
        assert!(!Message::new("123", "")
            .with_mime_type("text/plain")
            .is_media());
    }

    #[test]
    fn test_serialization() {
        let message = Message::new("123", "hi").with_mime_type("audio/mpeg");
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["conversationId"], "123");
        assert_eq!(value["mimeType"], "audio/mpeg");
        // unset options are omitted from the wire form
        assert!(value.get("url").is_none());
    }
}
