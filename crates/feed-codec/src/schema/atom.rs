// crates/feed-codec/src/schema/atom.rs
//! Atom 1.0 element tree

use super::{skip, Element, Text};
use serde::de::MapAccess;
use serde::{Deserialize, Serialize};

pub(crate) const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// `<feed>` document
#[derive(Debug, Default, Serialize)]
#[serde(rename = "feed")]
pub(crate) struct Atom {
    #[serde(rename = "@xmlns")]
    pub namespace: String,
    pub title: Vec<Text>,
    #[serde(rename = "link")]
    pub links: Vec<Link>,
    #[serde(rename = "author")]
    pub authors: Vec<Person>,
    pub published: Vec<Text>,
    pub updated: Vec<Text>,
    #[serde(rename = "entry")]
    pub entries: Vec<Entry>,
}

impl Element for Atom {
    const TAG: &'static str = "feed";

    fn read_child<'de, A: MapAccess<'de>>(
        &mut self,
        name: &str,
        map: &mut A,
    ) -> Result<(), A::Error> {
        match name {
            "title" => self.title.push(map.next_value()?),
            "link" => self.links.push(map.next_value()?),
            "author" => self.authors.push(map.next_value()?),
            "published" => self.published.push(map.next_value()?),
            "updated" => self.updated.push(map.next_value()?),
            "entry" => self.entries.push(map.next_value()?),
            _ => skip(map)?,
        }
        Ok(())
    }
}

/// `<entry>`
#[derive(Debug, Default, Serialize)]
pub(crate) struct Entry {
    pub title: Vec<Text>,
    #[serde(rename = "link")]
    pub links: Vec<Link>,
    pub published: Vec<Text>,
    pub updated: Vec<Text>,
}

impl Element for Entry {
    const TAG: &'static str = "entry";

    fn read_child<'de, A: MapAccess<'de>>(
        &mut self,
        name: &str,
        map: &mut A,
    ) -> Result<(), A::Error> {
        match name {
            "title" => self.title.push(map.next_value()?),
            "link" => self.links.push(map.next_value()?),
            "published" => self.published.push(map.next_value()?),
            "updated" => self.updated.push(map.next_value()?),
            _ => skip(map)?,
        }
        Ok(())
    }
}

deserialize_element!(Atom, Entry);

/// `<link href="…" rel="…"/>`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Link {
    #[serde(rename = "@href")]
    pub href: String,
    #[serde(rename = "@rel", skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: None,
        }
    }
}

/// `<author>`; only the name is modelled
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Person {
    pub name: String,
}

/// Picks the document's own link: the first `alternate` (or rel-less) link,
/// falling back to the first link of any kind.
pub(crate) fn preferred_href(links: &[Link]) -> String {
    links
        .iter()
        .find(|link| matches!(link.rel.as_deref(), None | Some("alternate")))
        .or_else(|| links.first())
        .map(|link| link.href.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{first_text, text};

    #[test]
    fn test_atom_reads_feed() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
            <title type="text">Example</title>
            <link href="http://x"/>
            <author><name>Jane</name><email>jane@x</email></author>
            <updated>2024-01-02T03:04:05Z</updated>
            <entry>
                <title>A</title>
                <link href="http://x/a"/>
                <id>urn:a</id>
                <published>2024-01-01T00:00:00Z</published>
            </entry>
        </feed>"#;

        let doc: Atom = quick_xml::de::from_str(xml).expect("Should deserialize Atom");
        assert_eq!(first_text(&doc.title), "Example");
        assert_eq!(preferred_href(&doc.links), "http://x");
        assert_eq!(doc.authors[0].name, "Jane");
        assert_eq!(first_text(&doc.updated), "2024-01-02T03:04:05Z");
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(first_text(&doc.entries[0].published), "2024-01-01T00:00:00Z");
        assert!(doc.entries[0].updated.is_empty());
    }

    #[test]
    fn test_atom_entry_tolerates_media_title_and_xhtml() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:media="http://search.yahoo.com/mrss/">
            <title type="xhtml"><div xmlns="http://www.w3.org/1999/xhtml">Hi</div></title>
            <entry>
                <title>A</title>
                <media:title>A (media)</media:title>
                <author><name>Jane</name></author>
            </entry>
        </feed>"#;

        let doc: Atom = quick_xml::de::from_str(xml).expect("Should deserialize Atom");
        assert_eq!(first_text(&doc.title), "Hi");
        assert_eq!(doc.entries[0].title.len(), 2);
        assert_eq!(first_text(&doc.entries[0].title), "A");
    }

    #[test]
    fn test_preferred_href_skips_self_link() {
        let links = vec![
            Link {
                href: "http://x/feed.xml".to_string(),
                rel: Some("self".to_string()),
            },
            Link {
                href: "http://x".to_string(),
                rel: Some("alternate".to_string()),
            },
        ];
        assert_eq!(preferred_href(&links), "http://x");
    }

    #[test]
    fn test_preferred_href_falls_back_to_first() {
        let links = vec![Link {
            href: "http://x/feed.xml".to_string(),
            rel: Some("self".to_string()),
        }];
        assert_eq!(preferred_href(&links), "http://x/feed.xml");
        assert_eq!(preferred_href(&[]), "");
    }

    #[test]
    fn test_atom_serializes_with_feed_root() {
        let doc = Atom {
            namespace: ATOM_NAMESPACE.to_string(),
            title: text("Example"),
            links: vec![Link::new("http://x")],
            ..Atom::default()
        };

        let xml = quick_xml::se::to_string(&doc).expect("Should serialize Atom");
        assert!(xml.starts_with(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#));
        assert!(xml.contains(r#"<link href="http://x""#));
        assert!(!xml.contains("rel="));
        assert!(xml.ends_with("</feed>"));
    }
}
