use std::borrow::Cow;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AgentThought {
    pub thought: String,
}

/// A generated chat message that may carry numbered choices.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MessageItem {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agent_thoughts: Vec<AgentThought>,
}

impl MessageItem {
    /// Text shown for the message: the concatenated agent thoughts when there
    /// are any, otherwise the plain content.
    pub fn display_content(&self) -> Cow<'_, str> {
        if self.agent_thoughts.is_empty() {
            return Cow::Borrowed(&self.content);
        }
        Cow::Owned(
            self.agent_thoughts
                .iter()
                .map(|thought| thought.thought.as_str())
                .collect(),
        )
    }
}
