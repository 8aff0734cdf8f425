use pickfill_protocol::HandoffPayload;
use url::Url;

use crate::AUTO_FILL_PARAM;
use crate::error::Result;
use crate::error::TransportError;
use crate::payload::decode_payload;
use crate::payload::encode_payload;

/// Strips exactly one leading `/` so the template can be appended to an
/// origin without doubling the separator.
pub fn normalize_destination_path(template: &str) -> &str {
    template.strip_prefix('/').unwrap_or(template)
}

/// Reduces an absolute URL to its `scheme://host[:port]` origin.
pub fn normalize_origin(raw: &str) -> Result<String> {
    let url = Url::parse(raw).map_err(|_| TransportError::InvalidOrigin {
        origin: raw.to_string(),
    })?;
    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(TransportError::InvalidOrigin {
            origin: raw.to_string(),
        });
    }
    Ok(origin.ascii_serialization())
}

/// Address of the destination form with the payload attached:
/// `{origin}/{path}?autoFillText={encoded}`.
pub fn build_handoff_address(
    origin: &str,
    path_template: &str,
    payload: &HandoffPayload,
) -> Result<String> {
    if path_template.is_empty() {
        tracing::warn!("destination path is not configured; handing off to the origin root");
    }
    let address = format!(
        "{}?{AUTO_FILL_PARAM}={}",
        fallback_address(origin, path_template),
        encode_payload(payload)
    );
    Url::parse(&address).map_err(|source| TransportError::InvalidAddress {
        address: address.clone(),
        source,
    })?;
    Ok(address)
}

/// Address of the destination form without a payload, used when the handoff
/// address cannot be built.
pub fn fallback_address(origin: &str, path_template: &str) -> String {
    format!("{origin}/{}", normalize_destination_path(path_template))
}

/// Extracts the handoff payload from a full destination address.
///
/// Returns `Ok(None)` when the address carries no (or an empty)
/// [`AUTO_FILL_PARAM`].
pub fn parse_handoff_address(address: &str) -> Result<Option<HandoffPayload>> {
    let url = Url::parse(address).map_err(|source| TransportError::InvalidAddress {
        address: address.to_string(),
        source,
    })?;
    match url.query() {
        Some(query) => payload_from_query(query),
        None => Ok(None),
    }
}

/// Extracts the handoff payload from a raw query string (with or without the
/// leading `?`). The first occurrence of the parameter wins.
pub fn payload_from_query(query: &str) -> Result<Option<HandoffPayload>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let raw = query.split('&').find_map(|pair| match pair.split_once('=') {
        Some((key, value)) if key == AUTO_FILL_PARAM => Some(value),
        None if pair == AUTO_FILL_PARAM => Some(""),
        _ => None,
    });
    match raw {
        Some(value) if !value.is_empty() => decode_payload(value).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ORIGIN: &str = "https://chat.example.com";

    #[test]
    fn normalizes_exactly_one_leading_separator() {
        assert_eq!(normalize_destination_path("/workflow/abc"), "workflow/abc");
        assert_eq!(normalize_destination_path("//workflow"), "/workflow");
        assert_eq!(normalize_destination_path("workflow"), "workflow");
        assert_eq!(normalize_destination_path(""), "");
    }

    #[test]
    fn builds_address_with_encoded_payload() -> anyhow::Result<()> {
        let payload = HandoffPayload::new("draft\nOption & more");
        let address = build_handoff_address(ORIGIN, "/workflow/abc", &payload)?;
        assert_eq!(
            address,
            "https://chat.example.com/workflow/abc?autoFillText=draft%0AOption%20%26%20more"
        );
        Ok(())
    }

    #[test]
    fn empty_template_degrades_to_origin_root() -> anyhow::Result<()> {
        let address = build_handoff_address(ORIGIN, "", &HandoffPayload::new("x"))?;
        assert_eq!(address, "https://chat.example.com/?autoFillText=x");
        Ok(())
    }

    #[test]
    fn unparseable_address_is_an_error() {
        let err = build_handoff_address("", "workflow", &HandoffPayload::new("x"));
        assert!(matches!(err, Err(TransportError::InvalidAddress { .. })));
    }

    #[test]
    fn fallback_address_has_no_payload() {
        assert_eq!(
            fallback_address(ORIGIN, "/workflow/abc"),
            "https://chat.example.com/workflow/abc"
        );
    }

    #[test]
    fn address_round_trips_through_parse() -> anyhow::Result<()> {
        let text = "prior line\n选项二 = a&b";
        let address = build_handoff_address(ORIGIN, "workflow", &HandoffPayload::new(text))?;
        assert_eq!(
            parse_handoff_address(&address)?,
            Some(HandoffPayload::new(text))
        );
        Ok(())
    }

    #[test]
    fn other_parameters_are_ignored() -> anyhow::Result<()> {
        let address = "https://chat.example.com/w?lang=en&autoFillText=hi%21&autoFillText=second";
        assert_eq!(
            parse_handoff_address(address)?,
            Some(HandoffPayload::new("hi!"))
        );
        Ok(())
    }

    #[test]
    fn missing_or_empty_parameter_is_none() -> anyhow::Result<()> {
        assert_eq!(parse_handoff_address("https://chat.example.com/w")?, None);
        assert_eq!(
            parse_handoff_address("https://chat.example.com/w?lang=en")?,
            None
        );
        assert_eq!(payload_from_query("?autoFillText=")?, None);
        assert_eq!(payload_from_query("autoFillText")?, None);
        Ok(())
    }

    #[test]
    fn malformed_payload_is_reported() {
        assert_eq!(
            payload_from_query("autoFillText=%E4%B8"),
            Err(TransportError::InvalidUtf8)
        );
    }

    #[test]
    fn normalize_origin_drops_path_and_query() -> anyhow::Result<()> {
        assert_eq!(
            normalize_origin("https://chat.example.com:8443/chat/abc?x=1")?,
            "https://chat.example.com:8443"
        );
        assert!(matches!(
            normalize_origin("not a url"),
            Err(TransportError::InvalidOrigin { .. })
        ));
        Ok(())
    }
}
