//! Wire format of the chat-to-form handoff.
//!
//! A picked option travels to the destination form as a single query
//! parameter, [`AUTO_FILL_PARAM`], on a full-page address. The parameter name
//! is the only contract between the two sides; other parameters are ignored.

mod address;
mod error;
mod payload;

pub use address::build_handoff_address;
pub use address::fallback_address;
pub use address::normalize_destination_path;
pub use address::normalize_origin;
pub use address::parse_handoff_address;
pub use address::payload_from_query;
pub use error::Result;
pub use error::TransportError;
pub use payload::compose_handoff_text;
pub use payload::decode_payload;
pub use payload::encode_payload;

/// Query parameter carrying the percent-encoded handoff text.
pub const AUTO_FILL_PARAM: &str = "autoFillText";
