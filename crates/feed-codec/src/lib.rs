// crates/feed-codec/src/lib.rs
//! RSS 2.0, RDF (RSS 1.0) and Atom feeds in one unified model
//!
//! Documents are decoded into a [`Feed`] whose shape does not depend on the
//! source format, and any [`Feed`] can be encoded back into any of the three
//! formats:
//!
//! - Format detection looks at content only (`<feed`, then `<rss`, then
//!   `<rdf:RDF`) and ignores everything before the root marker
//! - Fields a source does not carry, or carries empty, read `"N/A"`
//! - Atom timestamps are held as `YYYY-MM-DD HH:MM:SS` and written back as
//!   RFC 3339 in UTC
//!
//! # Example
//!
//! ```rust
//! use unifeed_feed_codec::{marshal, parse, Format};
//!
//! let rss = br#"<rss><channel>
//!   <title>Example</title>
//!   <link>http://x</link>
//!   <item><title>A</title><link>http://x/a</link></item>
//! </channel></rss>"#;
//!
//! let feed = parse(rss).expect("Failed to parse feed");
//! assert_eq!(feed.format, Some(Format::Rss));
//! assert_eq!(feed.author, "N/A");
//!
//! let atom = marshal(&feed.convert_to(Format::Atom)).expect("Failed to encode feed");
//! assert!(String::from_utf8_lossy(&atom).contains("<feed "));
//! ```
//!
//! # Errors
//!
//! [`parse`] and [`marshal`] report failures as [`FeedError`]. Callers that
//! want the zero-value convention instead (an all-empty [`Feed`], or empty
//! bytes) use [`parse_or_default`] and [`marshal_lossy`].

mod codec;
mod date;
mod decoder;
mod encoder;
mod error;
mod feed;
mod options;
mod schema;
mod sniffer;

pub use codec::{AtomCodec, FeedCodec, RdfCodec, RssCodec};
pub use date::{
    canonical_to_zoned, canonical_to_zoned_lossy, zoned_to_canonical, zoned_to_canonical_lossy,
    CANONICAL_LAYOUT,
};
pub use decoder::{decode_atom, decode_rdf, decode_rss};
pub use encoder::{
    encode_atom, encode_atom_with, encode_rdf, encode_rdf_with, encode_rss, encode_rss_with,
};
pub use error::{FeedError, FeedResult};
pub use feed::{Feed, FeedItem, Format, NOT_AVAILABLE};
pub use options::{EncodeOptions, XML_DECLARATION};
pub use sniffer::{detect, sniff, Sniffed};

/// Detects the format of `bytes` and decodes it
pub fn parse(bytes: &[u8]) -> FeedResult<Feed> {
    let sniffed = sniff(bytes)?;
    sniffed.format.codec().decode(sniffed.document)
}

/// Like [`parse`], but any failure yields the zero-value [`Feed`]
pub fn parse_or_default(bytes: &[u8]) -> Feed {
    parse(bytes).unwrap_or_else(|err| {
        log::warn!("Failed to parse feed: {}, returning empty feed", err);
        Feed::default()
    })
}

/// Encodes a feed in the format it is tagged with
pub fn marshal(feed: &Feed) -> FeedResult<Vec<u8>> {
    marshal_with(feed, &EncodeOptions::default())
}

/// Encodes a feed in the format it is tagged with, using `options`
pub fn marshal_with(feed: &Feed, options: &EncodeOptions) -> FeedResult<Vec<u8>> {
    let format = feed.format.ok_or(FeedError::MissingFormat)?;
    format.codec().encode_with(feed, options)
}

/// Like [`marshal`], but a failure is logged and yields empty bytes
pub fn marshal_lossy(feed: &Feed) -> Vec<u8> {
    marshal(feed).unwrap_or_else(|err| {
        log::error!("Failed to encode {} feed: {}", feed.format_tag(), err);
        Vec::new()
    })
}
