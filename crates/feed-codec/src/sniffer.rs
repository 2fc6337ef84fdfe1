// crates/feed-codec/src/sniffer.rs
//! Content-based format detection

use crate::error::{FeedError, FeedResult};
use crate::feed::Format;

/// A document whose format has been recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sniffed<'a> {
    /// Detected format
    pub format: Format,
    /// Input starting at the root marker; anything before it is dropped
    pub document: &'a [u8],
    /// Number of leading bytes that were dropped
    pub offset: usize,
}

/// Root marker searched for each format
fn marker(format: Format) -> &'static [u8] {
    match format {
        Format::Atom => b"<feed",
        Format::Rss => b"<rss",
        Format::Rdf => b"<rdf:RDF",
    }
}

/// Detects the format of `bytes` and trims everything before its root marker.
///
/// Markers are tried in the order atom, rss, rdf; the first format with a
/// marker anywhere in the input wins, even if another marker appears earlier.
pub fn sniff(bytes: &[u8]) -> FeedResult<Sniffed<'_>> {
    for format in Format::ALL {
        if let Some(offset) = find_marker(bytes, marker(format)) {
            log::debug!("Detected {} feed at byte offset {}", format, offset);
            return Ok(Sniffed {
                format,
                document: &bytes[offset..],
                offset,
            });
        }
    }

    Err(FeedError::UnrecognizedFormat)
}

/// Detects the format of `bytes` without trimming
pub fn detect(bytes: &[u8]) -> Option<Format> {
    sniff(bytes).ok().map(|sniffed| sniffed.format)
}

/// Position of the first `marker` that ends a tag name, so `<feed` does not
/// match `<feedburner:info>`.
fn find_marker(haystack: &[u8], marker: &[u8]) -> Option<usize> {
    haystack
        .windows(marker.len())
        .enumerate()
        .filter(|(_, window)| *window == marker)
        .map(|(index, _)| index)
        .find(|index| {
            haystack
                .get(index + marker.len())
                .map_or(true, |next| ends_tag_name(*next))
        })
}

fn ends_tag_name(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'>' || byte == b'/'
}
