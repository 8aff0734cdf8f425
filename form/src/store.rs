use std::sync::Arc;

use pickfill_protocol::FieldDescriptor;
use pickfill_protocol::InputState;
use pickfill_protocol::InputValue;
use tokio::sync::watch;

use crate::merge::merge_input;

/// The live input map of a rendered form.
///
/// Implementations hold the only copy of the map. `apply` must merge into the
/// most recently published map, never into a copy taken earlier, so edits to
/// other fields made in the meantime survive.
pub trait InputStore {
    /// The most recently published map.
    fn current(&self) -> InputState;

    /// Sets one field and publishes the whole updated map, which is returned.
    fn apply(&self, key: &str, value: InputValue) -> InputState;

    /// Publishes `state` as-is.
    fn replace(&self, state: InputState);

    /// Resets every declared field to empty text. Keys not declared by
    /// `fields` are dropped.
    fn clear(&self, fields: &[FieldDescriptor]) -> InputState {
        let cleared: InputState = fields
            .iter()
            .map(|field| (field.key.as_str(), InputValue::Text(String::new())))
            .collect();
        self.replace(cleared.clone());
        cleared
    }
}

/// [`InputStore`] backed by a `tokio::sync::watch` channel. Renderers
/// `subscribe` to observe every published map.
#[derive(Debug, Clone)]
pub struct WatchInputStore {
    sender: Arc<watch::Sender<InputState>>,
}

impl WatchInputStore {
    pub fn new(initial: InputState) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<InputState> {
        self.sender.subscribe()
    }
}

impl Default for WatchInputStore {
    fn default() -> Self {
        Self::new(InputState::new())
    }
}

impl InputStore for WatchInputStore {
    fn current(&self) -> InputState {
        self.sender.borrow().clone()
    }

    fn apply(&self, key: &str, value: InputValue) -> InputState {
        let mut published = InputState::new();
        self.sender.send_modify(|state| {
            *state = merge_input(state, Some(key), value);
            published = state.clone();
        });
        tracing::debug!(key, fields = published.len(), "published input update");
        published
    }

    fn replace(&self, state: InputState) {
        self.sender.send_replace(state);
    }
}
