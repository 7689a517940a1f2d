use serde_json::{json, Value};
use tracing::info;

use crate::errors::{ToolError, ToolResult};
use crate::models::tool::Tool;
use crate::platform::client::Platform;

pub const NAME: &str = "generate_spoken_audio";

pub const DESCRIPTION: &str =
    "Used to generate spoken audio from text prompts. Only use if the user has asked directly for \
    an audio version of output. When using this tool, the input should be a plain text string \
    containing the content to be spoken.";

pub const PLUGIN_HANDLE: &str = "elevenlabs";

/// Tool that turns a text prompt into spoken audio through the platform's
/// speech-synthesis plugin. Holds only its static descriptor and a client
/// handle; each invocation creates and waits on one remote task.
pub struct SpeechTool {
    tool: Tool,
    platform: Platform,
}

impl SpeechTool {
    pub fn new(platform: Platform) -> Self {
        Self {
            tool: Tool::new(NAME, DESCRIPTION, true),
            platform,
        }
    }

    /// The tool's static metadata
    pub fn descriptor(&self) -> &Tool {
        &self.tool
    }

    /// Generate spoken audio for the prompt and return the id of the first
    /// produced block.
    ///
    /// String prompts are submitted verbatim; any other value is submitted
    /// as its canonical JSON text form.
    pub async fn invoke(&self, prompt: &Value) -> ToolResult<String> {
        let text = match prompt.as_str() {
            Some(text) => text.to_string(),
            None => serde_json::to_string(prompt)
                .map_err(|e| ToolError::InvalidParameters(e.to_string()))?,
        };
        info!("[{}] {}", self.tool.name, text);

        let voice_generator = self.platform.use_plugin(PLUGIN_HANDLE, json!({})).await?;
        let task = voice_generator.generate(&text, true).await?;
        let output = task.wait().await?;

        info!("[{}] got back {} blocks", self.tool.name, output.blocks.len());
        match output.blocks.first() {
            Some(block) => {
                info!("[{}] audio size: {}", self.tool.name, block.raw()?.len());
                Ok(block.id.clone())
            }
            None => Err(ToolError::ExecutionError(format!(
                "[{}] unable to generate audio",
                self.tool.name
            ))),
        }
    }
}
