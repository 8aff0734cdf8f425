use pickfill_form::InputStore;
use pickfill_form::resolve_target_field;
use pickfill_protocol::FieldDescriptor;
use pickfill_protocol::InputState;
use pickfill_protocol::InputValue;
use pickfill_protocol::Notice;
use pickfill_transport::TransportError;
use pickfill_transport::parse_handoff_address;

use crate::Notifier;

pub const DECODE_FAILED_MESSAGE: &str = "failed to read auto-fill text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoFillOutcome {
    /// The address carried no handoff payload.
    NoPayload,
    /// `key` received the payload; `state` is the map that was published.
    Filled { key: String, state: InputState },
    /// The schema has no fields, so the payload was dropped.
    NoResolvableField,
    /// The address or payload could not be decoded; the store is untouched.
    DecodeFailed(TransportError),
}

/// Writes the payload carried by `address` into the best-suited field of the
/// form described by `fields`.
///
/// Runs once when the destination form is entered. Only the resolved field is
/// written; every other input in `store` keeps its latest value.
pub fn apply_autofill<S, T>(
    address: &str,
    fields: &[FieldDescriptor],
    store: &S,
    notifier: &T,
) -> AutoFillOutcome
where
    S: InputStore + ?Sized,
    T: Notifier + ?Sized,
{
    let payload = match parse_handoff_address(address) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            tracing::debug!("no auto-fill payload in address");
            return AutoFillOutcome::NoPayload;
        }
        Err(err) => {
            tracing::error!("failed to decode auto-fill payload: {err}");
            notifier.notify(Notice::error(DECODE_FAILED_MESSAGE));
            return AutoFillOutcome::DecodeFailed(err);
        }
    };

    let Some(field) = resolve_target_field(fields) else {
        tracing::warn!("form declares no fields; dropping auto-fill payload");
        return AutoFillOutcome::NoResolvableField;
    };

    let state = store.apply(&field.key, InputValue::Text(payload.text));
    tracing::info!(key = %field.key, "auto-filled form field");
    AutoFillOutcome::Filled {
        key: field.key.clone(),
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingNotifier;
    use pickfill_form::WatchInputStore;
    use pickfill_protocol::FieldKind;
    use pretty_assertions::assert_eq;

    const ADDRESS: &str = "https://chat.example.com/workflow/abc?autoFillText=draft%0ABeta";

    fn schema() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("qty", "Quantity", FieldKind::Number),
            FieldDescriptor::new("notes", "Notes", FieldKind::LongText),
            FieldDescriptor::new("title", "Title", FieldKind::ShortText),
        ]
    }

    /// Simulates the user typing into another field between decode and merge.
    struct EditingStore {
        inner: WatchInputStore,
    }

    impl InputStore for EditingStore {
        fn current(&self) -> InputState {
            self.inner.current()
        }

        fn apply(&self, key: &str, value: InputValue) -> InputState {
            self.inner.apply("title", InputValue::Text("typed meanwhile".to_string()));
            self.inner.apply(key, value)
        }

        fn replace(&self, state: InputState) {
            self.inner.replace(state);
        }
    }

    #[test]
    fn fills_long_text_field_and_keeps_others() {
        let store = WatchInputStore::new(
            [("qty", "3"), ("notes", "old"), ("title", "T")]
                .into_iter()
                .collect(),
        );
        let notifier = RecordingNotifier::default();

        let outcome = apply_autofill(ADDRESS, &schema(), &store, &notifier);

        let expected: InputState = [("qty", "3"), ("notes", "draft\nBeta"), ("title", "T")]
            .into_iter()
            .collect();
        assert_eq!(
            outcome,
            AutoFillOutcome::Filled {
                key: "notes".to_string(),
                state: expected.clone(),
            }
        );
        assert_eq!(store.current(), expected);
        assert_eq!(notifier.notices(), Vec::<Notice>::new());
    }

    #[test]
    fn edits_made_after_decode_survive() {
        let store = EditingStore {
            inner: WatchInputStore::new([("title", "")].into_iter().collect()),
        };
        let notifier = RecordingNotifier::default();

        apply_autofill(ADDRESS, &schema(), &store, &notifier);

        let expected: InputState = [("title", "typed meanwhile"), ("notes", "draft\nBeta")]
            .into_iter()
            .collect();
        assert_eq!(store.current(), expected);
    }

    #[test]
    fn subscribers_observe_the_filled_map() {
        let store = WatchInputStore::default();
        let mut receiver = store.subscribe();
        let notifier = RecordingNotifier::default();

        apply_autofill(ADDRESS, &schema(), &store, &notifier);

        assert!(receiver.has_changed().unwrap_or(false));
        let seen = receiver.borrow_and_update().clone();
        assert_eq!(
            seen.get("notes").and_then(InputValue::as_text),
            Some("draft\nBeta")
        );
    }

    #[test]
    fn address_without_payload_is_a_no_op() {
        let initial: InputState = [("notes", "keep")].into_iter().collect();
        let store = WatchInputStore::new(initial.clone());
        let notifier = RecordingNotifier::default();

        let outcome = apply_autofill(
            "https://chat.example.com/workflow/abc?lang=en",
            &schema(),
            &store,
            &notifier,
        );

        assert_eq!(outcome, AutoFillOutcome::NoPayload);
        assert_eq!(store.current(), initial);
        assert_eq!(notifier.notices(), Vec::<Notice>::new());
    }

    #[test]
    fn malformed_payload_notifies_and_leaves_store_untouched() {
        let initial: InputState = [("notes", "keep")].into_iter().collect();
        let store = WatchInputStore::new(initial.clone());
        let notifier = RecordingNotifier::default();

        let outcome = apply_autofill(
            "https://chat.example.com/w?autoFillText=%E4%B8",
            &schema(),
            &store,
            &notifier,
        );

        assert_eq!(outcome, AutoFillOutcome::DecodeFailed(TransportError::InvalidUtf8));
        assert_eq!(store.current(), initial);
        assert_eq!(notifier.notices(), vec![Notice::error(DECODE_FAILED_MESSAGE)]);
    }

    #[test]
    fn empty_schema_drops_payload_silently() {
        let initial: InputState = [("notes", "keep")].into_iter().collect();
        let store = WatchInputStore::new(initial.clone());
        let notifier = RecordingNotifier::default();

        let outcome = apply_autofill(ADDRESS, &[], &store, &notifier);

        assert_eq!(outcome, AutoFillOutcome::NoResolvableField);
        assert_eq!(store.current(), initial);
        assert_eq!(notifier.notices(), Vec::<Notice>::new());
    }

    #[test]
    fn falls_back_to_first_field() {
        let store = WatchInputStore::default();
        let notifier = RecordingNotifier::default();
        let fields = vec![FieldDescriptor::new("qty", "Quantity", FieldKind::Number)];

        let outcome = apply_autofill(ADDRESS, &fields, &store, &notifier);

        assert_eq!(
            outcome,
            AutoFillOutcome::Filled {
                key: "qty".to_string(),
                state: [("qty", "draft\nBeta")].into_iter().collect(),
            }
        );
    }
}
