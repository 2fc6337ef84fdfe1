// crates/feed-codec/src/encoder.rs
//! Encoding the unified model back into wire documents
//!
//! The encoders are the inverse projection of the decoders. Field values,
//! the `N/A` marker included, are written through as they are; only Atom
//! timestamps are rewritten, from the canonical layout to RFC 3339.

use crate::date;
use crate::error::{FeedError, FeedResult};
use crate::feed::{is_not_available, Feed, FeedItem};
use crate::options::{EncodeOptions, XML_DECLARATION};
use crate::schema::atom::{Atom, Entry, Link, Person, ATOM_NAMESPACE};
use crate::schema::{text, Text};
use crate::schema::rss::{
    Channel, Item, Rdf, RdfChannel, Rss, RDF_NAMESPACE, RSS1_NAMESPACE, RSS_VERSION,
};
use serde::Serialize;

/// Encodes a feed as RSS 2.0 with default options
pub fn encode_rss(feed: &Feed) -> FeedResult<Vec<u8>> {
    encode_rss_with(feed, &EncodeOptions::default())
}

/// Encodes a feed as RSS 2.0
pub fn encode_rss_with(feed: &Feed, options: &EncodeOptions) -> FeedResult<Vec<u8>> {
    let doc = Rss {
        version: RSS_VERSION.to_string(),
        channel: Channel {
            title: text(&feed.title),
            links: text(&feed.hyperlink),
            description: text(&feed.description),
            published: text(&feed.published),
            updated: text(&feed.updated),
            items: feed.items.iter().map(item_schema).collect(),
        },
    };

    write_document(&doc, options)
}

/// Encodes a feed as RDF (RSS 1.0) with default options
pub fn encode_rdf(feed: &Feed) -> FeedResult<Vec<u8>> {
    encode_rdf_with(feed, &EncodeOptions::default())
}

/// Encodes a feed as RDF (RSS 1.0)
pub fn encode_rdf_with(feed: &Feed, options: &EncodeOptions) -> FeedResult<Vec<u8>> {
    let doc = Rdf {
        rdf_namespace: RDF_NAMESPACE.to_string(),
        namespace: RSS1_NAMESPACE.to_string(),
        channel: RdfChannel {
            title: text(&feed.title),
            links: text(&feed.hyperlink),
            description: text(&feed.description),
        },
        items: feed.items.iter().map(item_schema).collect(),
    };

    write_document(&doc, options)
}

/// Encodes a feed as Atom with default options
pub fn encode_atom(feed: &Feed) -> FeedResult<Vec<u8>> {
    encode_atom_with(feed, &EncodeOptions::default())
}

/// Encodes a feed as Atom
pub fn encode_atom_with(feed: &Feed, options: &EncodeOptions) -> FeedResult<Vec<u8>> {
    let doc = Atom {
        namespace: ATOM_NAMESPACE.to_string(),
        title: text(&feed.title),
        links: vec![Link::new(feed.hyperlink.as_str())],
        authors: vec![Person {
            name: feed.author.clone(),
        }],
        published: atom_timestamp(&feed.published),
        updated: atom_timestamp(&feed.updated),
        entries: feed.items.iter().map(entry_schema).collect(),
    };

    write_document(&doc, options)
}

fn item_schema(item: &FeedItem) -> Item {
    Item {
        title: text(&item.title),
        links: text(&item.hyperlink),
        published: text(&item.published),
    }
}

fn entry_schema(item: &FeedItem) -> Entry {
    Entry {
        title: text(&item.title),
        links: vec![Link::new(item.hyperlink.as_str())],
        published: atom_timestamp(&item.published),
        updated: atom_timestamp(&item.updated),
    }
}

/// Canonical to RFC 3339; the `N/A` marker is kept as is
fn atom_timestamp(value: &str) -> Vec<Text> {
    if is_not_available(value) {
        text(value)
    } else {
        text(&date::canonical_to_zoned_lossy(value))
    }
}

fn write_document<T: Serialize>(doc: &T, options: &EncodeOptions) -> FeedResult<Vec<u8>> {
    let mut xml = String::new();
    if options.xml_declaration {
        xml.push_str(XML_DECLARATION);
        if options.indent.is_some() {
            xml.push('\n');
        }
    }

    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    if let Some(spaces) = options.indent {
        serializer.indent(' ', spaces);
    }
    doc.serialize(serializer)
        .map_err(|err| FeedError::Serialize(err.to_string()))?;

    Ok(xml.into_bytes())
}
