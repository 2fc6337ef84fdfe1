// crates/feed-codec/src/error.rs
//! Error types for feed decoding and encoding

use thiserror::Error;

/// Result type for feed codec operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while decoding or encoding a feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// Input is not well-formed XML, is not UTF-8, or does not fit the format's schema
    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    /// None of the known root markers was found in the input
    #[error("Unrecognized feed format: no <feed, <rss or <rdf:RDF marker found")]
    UnrecognizedFormat,

    /// The feed carries no format, so there is no encoder to pick
    #[error("Feed has no format tag")]
    MissingFormat,

    /// A format tag string did not name a known format
    #[error("Unknown format tag: {0:?}")]
    UnknownFormatTag(String),

    /// A timestamp did not match the layout expected for its position
    #[error("Invalid timestamp {value:?}: expected {expected}")]
    InvalidTimestamp {
        value: String,
        expected: &'static str,
    },

    /// The schema structure could not be serialized
    #[error("Serialization failed: {0}")]
    Serialize(String),
}

impl From<quick_xml::DeError> for FeedError {
    fn from(err: quick_xml::DeError) -> Self {
        FeedError::InvalidXml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for FeedError {
    fn from(err: std::str::Utf8Error) -> Self {
        FeedError::InvalidXml(format!("input is not valid UTF-8: {}", err))
    }
}
