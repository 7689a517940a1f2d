use serde::{Deserialize, Serialize};

/// Static metadata for a tool that can be offered to an agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    /// The name of the tool
    pub name: String,
    /// A description of what the tool does, read by the agent's tool selection
    pub description: String,
    /// Whether the tool accepts exactly one input argument
    pub single_input: bool,
}

impl Tool {
    /// Create a new tool with the given name and description
    pub fn new<N, D>(name: N, description: D, single_input: bool) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Tool {
            name: name.into(),
            description: description.into(),
            single_input,
        }
    }
}
