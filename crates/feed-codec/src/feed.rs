// crates/feed-codec/src/feed.rs
//! Unified feed model shared by every decoder and encoder

use crate::error::FeedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker stored in any field the source document did not carry (or carried empty)
pub const NOT_AVAILABLE: &str = "N/A";

/// Wire format a feed was decoded from, and will be encoded back into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// RSS 2.0
    Rss,
    /// RDF Site Summary (RSS 1.0)
    Rdf,
    /// Atom 1.0
    Atom,
}

impl Format {
    /// Every supported format, in sniffing priority order
    pub const ALL: [Format; 3] = [Format::Atom, Format::Rss, Format::Rdf];

    /// Short lowercase tag for this format
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Rss => "rss",
            Format::Rdf => "rdf",
            Format::Atom => "atom",
        }
    }

    /// Conventional root element name on the wire
    pub fn root_tag(self) -> &'static str {
        match self {
            Format::Rss => "rss",
            Format::Rdf => "rdf:RDF",
            Format::Atom => "feed",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rss" => Ok(Format::Rss),
            "rdf" => Ok(Format::Rdf),
            "atom" => Ok(Format::Atom),
            other => Err(FeedError::UnknownFormatTag(other.to_string())),
        }
    }
}

/// A feed in the format-agnostic shape
///
/// `Feed::default()` is the zero value: no format, empty strings and no
/// items. Decoding never yields it on success, so it doubles as the
/// "could not decode" result of [`crate::parse_or_default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    /// Format the feed came from; `None` only for the zero value
    pub format: Option<Format>,
    /// Link to the site or the feed itself
    pub hyperlink: String,
    /// Feed title
    pub title: String,
    /// Feed description (RSS/RDF only)
    pub description: String,
    /// Publication time, `YYYY-MM-DD HH:MM:SS` for Atom sources
    pub published: String,
    /// Last update time, `YYYY-MM-DD HH:MM:SS` for Atom sources
    pub updated: String,
    /// Feed author (Atom only)
    pub author: String,
    /// Items in document order
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// Creates an empty feed of the given format with every field marked not available
    pub fn new(format: Format) -> Self {
        Self {
            format: Some(format),
            hyperlink: NOT_AVAILABLE.to_string(),
            title: NOT_AVAILABLE.to_string(),
            description: NOT_AVAILABLE.to_string(),
            published: NOT_AVAILABLE.to_string(),
            updated: NOT_AVAILABLE.to_string(),
            author: NOT_AVAILABLE.to_string(),
            items: Vec::new(),
        }
    }

    /// Format tag as a string, `""` for the zero value
    pub fn format_tag(&self) -> &'static str {
        self.format.map_or("", Format::as_str)
    }

    /// Returns the number of items in the feed
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the feed has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an item to the end of the feed
    pub fn add_item(&mut self, item: FeedItem) {
        self.items.push(item);
    }

    /// Retags the feed so the next encode produces `format`
    pub fn convert_to(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }
}

/// A single entry of a feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Item link
    pub hyperlink: String,
    /// Item title
    pub title: String,
    /// Publication time
    pub published: String,
    /// Update time; always not available for RSS and RDF sources
    pub updated: String,
}

impl FeedItem {
    /// Creates an item with every field marked not available
    pub fn new() -> Self {
        Self {
            hyperlink: NOT_AVAILABLE.to_string(),
            title: NOT_AVAILABLE.to_string(),
            published: NOT_AVAILABLE.to_string(),
            updated: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Applies the field-presence policy to one projected value.
///
/// Empty becomes [`NOT_AVAILABLE`]; anything else is trimmed. Element text
/// arrives here already trimmed by the XML reader, so a whitespace-only
/// element such as `<updated>   </updated>` is empty and reads `N/A`.
pub(crate) fn present(value: String) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.trim().to_string()
    }
}

/// True when the value is the not-available marker
pub(crate) fn is_not_available(value: &str) -> bool {
    value == NOT_AVAILABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_creation() {
        let feed = Feed::new(Format::Rss);
        assert_eq!(feed.format, Some(Format::Rss));
        assert_eq!(feed.title, NOT_AVAILABLE);
        assert_eq!(feed.author, NOT_AVAILABLE);
        assert!(feed.is_empty());
    }

    #[test]
    fn test_zero_value_has_empty_tag() {
        let feed = Feed::default();
        assert_eq!(feed.format_tag(), "");
        assert_eq!(feed.title, "");
        assert_eq!(feed.item_count(), 0);
    }

    #[test]
    fn test_feed_add_item_keeps_order() {
        let mut feed = Feed::new(Format::Atom);
        let mut first = FeedItem::new();
        first.title = "first".to_string();
        let mut second = FeedItem::new();
        second.title = "second".to_string();
        feed.add_item(first);
        feed.add_item(second);

        assert_eq!(feed.item_count(), 2);
        assert_eq!(feed.items[0].title, "first");
        assert_eq!(feed.items[1].title, "second");
    }

    #[test]
    fn test_format_tags() {
        for format in Format::ALL {
            let parsed: Format = format.as_str().parse().expect("tag should parse");
            assert_eq!(parsed, format);
            assert_eq!(format.to_string(), format.as_str());
        }
        assert!("json".parse::<Format>().is_err());
        assert!("".parse::<Format>().is_err());
    }

    #[test]
    fn test_root_tags() {
        assert_eq!(Format::Rss.root_tag(), "rss");
        assert_eq!(Format::Rdf.root_tag(), "rdf:RDF");
        assert_eq!(Format::Atom.root_tag(), "feed");
    }

    #[test]
    fn test_convert_to_retags() {
        let feed = Feed::new(Format::Rss).convert_to(Format::Atom);
        assert_eq!(feed.format_tag(), "atom");
    }

    #[test]
    fn test_present_policy() {
        assert_eq!(present(String::new()), NOT_AVAILABLE);
        assert_eq!(present("  Hello  ".to_string()), "Hello");
        assert_eq!(present("Hello".to_string()), "Hello");
    }
}
