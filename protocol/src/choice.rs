use serde::Deserialize;
use serde::Serialize;

/// A numbered choice found in generated text.
///
/// `index` is the digit run exactly as it appeared (`"01"` stays `"01"`), so
/// labels are neither renumbered nor required to be contiguous.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChoiceOption {
    #[serde(rename = "number")]
    pub index: String,
    pub text: String,
}

impl ChoiceOption {
    pub fn new(index: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            text: text.into(),
        }
    }
}

impl std::fmt::Display for ChoiceOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.index, self.text)
    }
}
