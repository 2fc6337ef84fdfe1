// crates/feed-codec/src/decoder.rs
//! Decoding wire documents into the unified model
//!
//! Each decoder reads its format's schema structure with quick-xml and then
//! projects it onto [`Feed`]. Every projected string goes through the
//! presence policy: empty becomes `N/A`, anything else is trimmed. Atom
//! timestamps are then converted to the canonical layout; one that does not
//! parse becomes the epoch instead of failing the decode.

use crate::date;
use crate::error::FeedResult;
use crate::feed::{is_not_available, present, Feed, FeedItem, Format, NOT_AVAILABLE};
use crate::schema::atom::{preferred_href, Atom, Entry};
use crate::schema::{first_text, Text};
use crate::schema::rss::{Item, Rdf, Rss};
use serde::de::DeserializeOwned;

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes an RSS 2.0 document
pub fn decode_rss(bytes: &[u8]) -> FeedResult<Feed> {
    let doc: Rss = read_document(bytes)?;
    let channel = doc.channel;

    let feed = Feed {
        format: Some(Format::Rss),
        hyperlink: present(first_text(&channel.links)),
        title: present(first_text(&channel.title)),
        description: present(first_text(&channel.description)),
        published: present(first_text(&channel.published)),
        updated: present(first_text(&channel.updated)),
        author: NOT_AVAILABLE.to_string(),
        items: channel.items.into_iter().map(project_item).collect(),
    };

    log::debug!("Decoded RSS feed with {} items", feed.item_count());
    Ok(feed)
}

/// Decodes an RDF (RSS 1.0) document
pub fn decode_rdf(bytes: &[u8]) -> FeedResult<Feed> {
    let doc: Rdf = read_document(bytes)?;
    let channel = doc.channel;

    let feed = Feed {
        format: Some(Format::Rdf),
        hyperlink: present(first_text(&channel.links)),
        title: present(first_text(&channel.title)),
        description: present(first_text(&channel.description)),
        published: NOT_AVAILABLE.to_string(),
        updated: NOT_AVAILABLE.to_string(),
        author: NOT_AVAILABLE.to_string(),
        items: doc.items.into_iter().map(project_item).collect(),
    };

    log::debug!("Decoded RDF feed with {} items", feed.item_count());
    Ok(feed)
}

/// Decodes an Atom document
pub fn decode_atom(bytes: &[u8]) -> FeedResult<Feed> {
    let doc: Atom = read_document(bytes)?;
    let author = doc
        .authors
        .into_iter()
        .next()
        .map(|person| person.name)
        .unwrap_or_default();

    let feed = Feed {
        format: Some(Format::Atom),
        hyperlink: present(preferred_href(&doc.links)),
        title: present(first_text(&doc.title)),
        description: NOT_AVAILABLE.to_string(),
        published: atom_timestamp(&doc.published),
        updated: atom_timestamp(&doc.updated),
        author: present(author),
        items: doc.entries.into_iter().map(project_entry).collect(),
    };

    log::debug!("Decoded Atom feed with {} entries", feed.item_count());
    Ok(feed)
}

fn project_item(item: Item) -> FeedItem {
    FeedItem {
        hyperlink: present(first_text(&item.links)),
        title: present(first_text(&item.title)),
        published: present(first_text(&item.published)),
        updated: NOT_AVAILABLE.to_string(),
    }
}

fn project_entry(entry: Entry) -> FeedItem {
    FeedItem {
        hyperlink: present(preferred_href(&entry.links)),
        title: present(first_text(&entry.title)),
        published: atom_timestamp(&entry.published),
        updated: atom_timestamp(&entry.updated),
    }
}

/// Presence policy followed by RFC 3339 to canonical conversion
fn atom_timestamp(raw: &[Text]) -> String {
    let value = present(first_text(raw));
    if is_not_available(&value) {
        value
    } else {
        date::zoned_to_canonical_lossy(&value)
    }
}

fn read_document<T: DeserializeOwned>(bytes: &[u8]) -> FeedResult<T> {
    let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
    let text = std::str::from_utf8(bytes)?;
    Ok(quick_xml::de::from_str(text)?)
}
