use pickfill_protocol::HandoffPayload;

use crate::error::Result;
use crate::error::TransportError;

/// Joins the text already typed in the chat with the picked option.
///
/// The prior text is trimmed and the option always lands on a new line, even
/// when there was no prior text.
pub fn compose_handoff_text(prior: &str, chosen: &str) -> String {
    format!("{}\n{chosen}", prior.trim())
}

/// Percent-encodes the payload text for use as one query parameter value.
/// Every byte outside `A-Z a-z 0-9 - _ . ~` is escaped.
pub fn encode_payload(payload: &HandoffPayload) -> String {
    urlencoding::encode(&payload.text).into_owned()
}

/// Decodes a raw `autoFillText` value.
///
/// `+` is read as a space, matching form-encoded query strings. Any `%` that
/// is not followed by two hex digits, or escapes that do not form UTF-8, are
/// rejected rather than passed through.
pub fn decode_payload(raw: &str) -> Result<HandoffPayload> {
    if let Some(position) = find_malformed_escape(raw) {
        return Err(TransportError::MalformedEscape { position });
    }
    let spaced = raw.replace('+', " ");
    let text = urlencoding::decode(&spaced).map_err(|_| TransportError::InvalidUtf8)?;
    Ok(HandoffPayload::new(text.into_owned()))
}

fn find_malformed_escape(raw: &str) -> Option<usize> {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().find_map(|(position, byte)| {
        if *byte != b'%' {
            return None;
        }
        let well_formed = bytes
            .get(position + 1..position + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        (!well_formed).then_some(position)
    })
}
