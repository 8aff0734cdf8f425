use pickfill_protocol::InputState;
use pickfill_protocol::InputValue;

/// Returns `snapshot` with `key` set to `value`, or an unchanged copy when no
/// field was resolved. Other keys keep their values and their order.
pub fn merge_input(snapshot: &InputState, key: Option<&str>, value: InputValue) -> InputState {
    let mut merged = snapshot.clone();
    if let Some(key) = key {
        merged.set(key, value);
    }
    merged
}
