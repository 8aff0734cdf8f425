use serde::Deserialize;
use serde::Serialize;

use crate::form::InputState;
use crate::form::InputValue;

/// Input key whose value is carried over as the prior free text.
pub const PRIOR_TEXT_KEY: &str = "text";

/// Version of the handoff payload format.
///
/// `V1` is the bare `autoFillText` query parameter. Receivers treat a payload
/// without an explicit version as `V1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadVersion {
    #[default]
    V1,
}

/// Text handed from the chat context to the destination form. Created once
/// when an option is picked and consumed once on arrival.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HandoffPayload {
    #[serde(default)]
    pub version: PayloadVersion,
    pub text: String,
}

impl HandoffPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            version: PayloadVersion::V1,
            text: text.into(),
        }
    }
}

/// Inputs of the chat the option was picked from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HandoffSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_conversation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_conversation_inputs: Option<InputState>,
    #[serde(default)]
    pub new_conversation_inputs: InputState,
}

impl HandoffSource {
    /// Inputs of the active conversation: the current one when a conversation
    /// id is set, otherwise the inputs staged for a new conversation.
    pub fn active_inputs(&self) -> Option<&InputState> {
        if self.current_conversation_id.is_some() {
            self.current_conversation_inputs.as_ref()
        } else {
            Some(&self.new_conversation_inputs)
        }
    }

    /// Free text already entered in the active conversation, or `""`.
    pub fn prior_text(&self) -> &str {
        self.active_inputs()
            .and_then(|inputs| inputs.get(PRIOR_TEXT_KEY))
            .and_then(InputValue::as_text)
            .unwrap_or_default()
    }
}
