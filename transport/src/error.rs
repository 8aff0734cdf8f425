use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransportError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("invalid handoff address `{address}`: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid origin `{origin}`: expected an absolute http(s) URL")]
    InvalidOrigin { origin: String },
    #[error("malformed percent escape at byte {position}")]
    MalformedEscape { position: usize },
    #[error("handoff payload is not valid UTF-8 once decoded")]
    InvalidUtf8,
}
