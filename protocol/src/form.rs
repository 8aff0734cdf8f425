//! Form schema and live input values as supplied by the destination form.
//!
//! The schema is owned by whoever renders the form; nothing in this workspace
//! mutates a [`FieldDescriptor`] after it has been deserialized.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;

/// Closed set of input kinds a form field can declare.
///
/// Wire names follow the form schema (`string`, `paragraph`, ...), not the
/// Rust variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Display)]
pub enum FieldKind {
    #[serde(rename = "string")]
    #[strum(serialize = "short-text")]
    ShortText,
    #[serde(rename = "paragraph")]
    #[strum(serialize = "long-text")]
    LongText,
    #[serde(rename = "select")]
    #[strum(serialize = "single-select")]
    SingleSelect,
    #[serde(rename = "number")]
    #[strum(serialize = "number")]
    Number,
    #[serde(rename = "file")]
    #[strum(serialize = "file")]
    File,
    #[serde(rename = "file-list")]
    #[strum(serialize = "file-list")]
    FileList,
}

impl FieldKind {
    /// Whether the field accepts free-form text.
    pub fn is_text(self) -> bool {
        matches!(self, FieldKind::ShortText | FieldKind::LongText)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Choices for [`FieldKind::SingleSelect`] fields; empty for every other kind.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    pub fn new(key: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind,
            required: false,
            max_length: None,
            options: Vec::new(),
        }
    }
}

/// A file that has already been uploaded by the form's file picker.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UploadedFile {
    pub transfer_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_file_id: Option<String>,
}

/// Current value of one form field. Text, number and select inputs are all
/// carried as text, the same way the form stores them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum InputValue {
    Text(String),
    File(UploadedFile),
    FileList(Vec<UploadedFile>),
}

impl InputValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InputValue::Text(text) => Some(text),
            InputValue::File(_) | InputValue::FileList(_) => None,
        }
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        InputValue::Text(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Text(value.to_string())
    }
}

/// Field key to value, in the order keys were first written.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct InputState {
    values: IndexMap<String, InputValue>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&InputValue> {
        self.values.get(key)
    }

    /// Sets `key`, keeping its position when it already exists and appending it
    /// otherwise.
    pub fn set(&mut self, key: impl Into<String>, value: InputValue) {
        self.values.insert(key.into(), value);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for InputState
where
    K: Into<String>,
    V: Into<InputValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_kind_uses_schema_wire_names() -> anyhow::Result<()> {
        let descriptor: FieldDescriptor = serde_json::from_str(
            r#"{"key":"notes","name":"Notes","type":"paragraph","required":true}"#,
        )?;
        assert_eq!(descriptor.kind, FieldKind::LongText);
        assert!(descriptor.required);
        assert_eq!(descriptor.options, Vec::<String>::new());

        let kinds: Vec<FieldKind> =
            serde_json::from_str(r#"["string","select","number","file","file-list"]"#)?;
        assert_eq!(
            kinds,
            vec![
                FieldKind::ShortText,
                FieldKind::SingleSelect,
                FieldKind::Number,
                FieldKind::File,
                FieldKind::FileList,
            ]
        );
        Ok(())
    }

    #[test]
    fn unknown_field_kind_is_rejected() {
        let parsed = serde_json::from_str::<FieldKind>(r#""checkbox""#);
        assert!(parsed.is_err());
    }

    #[test]
    fn field_kind_display_uses_kind_names() {
        assert_eq!(FieldKind::LongText.to_string(), "long-text");
        assert_eq!(FieldKind::FileList.to_string(), "file-list");
    }

    #[test]
    fn set_keeps_position_of_existing_key() {
        let mut state: InputState = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        state.set("b", InputValue::from("changed"));
        state.set("d", InputValue::from("4"));

        assert_eq!(state.keys().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
        assert_eq!(state.get("b"), Some(&InputValue::from("changed")));
    }

    #[test]
    fn input_state_round_trips_mixed_values() -> anyhow::Result<()> {
        let raw = r#"{"text":"hello","doc":{"transfer_method":"local_file","upload_file_id":"f1"},"docs":[]}"#;
        let state: InputState = serde_json::from_str(raw)?;

        assert_eq!(state.get("text").and_then(InputValue::as_text), Some("hello"));
        assert!(matches!(state.get("doc"), Some(InputValue::File(_))));
        assert_eq!(state.get("docs"), Some(&InputValue::FileList(Vec::new())));
        assert_eq!(serde_json::to_string(&state)?, raw);
        Ok(())
    }
}
