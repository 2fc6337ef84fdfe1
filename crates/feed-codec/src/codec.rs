// crates/feed-codec/src/codec.rs
//! One codec per wire format behind a common trait

use crate::decoder::{decode_atom, decode_rdf, decode_rss};
use crate::encoder::{encode_atom_with, encode_rdf_with, encode_rss_with};
use crate::error::FeedResult;
use crate::feed::{Feed, Format};
use crate::options::EncodeOptions;

/// Decoding and encoding for a single wire format
pub trait FeedCodec: Send + Sync {
    /// Format this codec reads and writes
    fn format(&self) -> Format;

    /// Decodes a document of this codec's format
    fn decode(&self, bytes: &[u8]) -> FeedResult<Feed>;

    /// Encodes a feed in this codec's format, ignoring the feed's own tag
    fn encode_with(&self, feed: &Feed, options: &EncodeOptions) -> FeedResult<Vec<u8>>;

    /// Encodes a feed with default options
    fn encode(&self, feed: &Feed) -> FeedResult<Vec<u8>> {
        self.encode_with(feed, &EncodeOptions::default())
    }
}

/// RSS 2.0 codec
#[derive(Debug, Clone, Copy, Default)]
pub struct RssCodec;

/// RDF (RSS 1.0) codec
#[derive(Debug, Clone, Copy, Default)]
pub struct RdfCodec;

/// Atom codec
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomCodec;

impl FeedCodec for RssCodec {
    fn format(&self) -> Format {
        Format::Rss
    }

    fn decode(&self, bytes: &[u8]) -> FeedResult<Feed> {
        decode_rss(bytes)
    }

    fn encode_with(&self, feed: &Feed, options: &EncodeOptions) -> FeedResult<Vec<u8>> {
        encode_rss_with(feed, options)
    }
}

impl FeedCodec for RdfCodec {
    fn format(&self) -> Format {
        Format::Rdf
    }

    fn decode(&self, bytes: &[u8]) -> FeedResult<Feed> {
        decode_rdf(bytes)
    }

    fn encode_with(&self, feed: &Feed, options: &EncodeOptions) -> FeedResult<Vec<u8>> {
        encode_rdf_with(feed, options)
    }
}

impl FeedCodec for AtomCodec {
    fn format(&self) -> Format {
        Format::Atom
    }

    fn decode(&self, bytes: &[u8]) -> FeedResult<Feed> {
        decode_atom(bytes)
    }

    fn encode_with(&self, feed: &Feed, options: &EncodeOptions) -> FeedResult<Vec<u8>> {
        encode_atom_with(feed, options)
    }
}

impl Format {
    /// Codec handling this format
    pub fn codec(self) -> &'static dyn FeedCodec {
        match self {
            Format::Rss => &RssCodec,
            Format::Rdf => &RdfCodec,
            Format::Atom => &AtomCodec,
        }
    }
}
