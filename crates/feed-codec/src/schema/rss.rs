// crates/feed-codec/src/schema/rss.rs
//! RSS 2.0 and RDF (RSS 1.0) element trees

use super::{skip, Element, Text};
use serde::de::MapAccess;
use serde::{Deserialize, Serialize};

pub(crate) const RSS_VERSION: &str = "2.0";
pub(crate) const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub(crate) const RSS1_NAMESPACE: &str = "http://purl.org/rss/1.0/";

/// `<rss>` document
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "rss", default)]
pub(crate) struct Rss {
    #[serde(rename = "@version")]
    pub version: String,
    pub channel: Channel,
}

/// RSS 2.0 `<channel>`
#[derive(Debug, Default, Serialize)]
pub(crate) struct Channel {
    pub title: Vec<Text>,
    #[serde(rename = "link")]
    pub links: Vec<Text>,
    pub description: Vec<Text>,
    #[serde(rename = "pubDate")]
    pub published: Vec<Text>,
    #[serde(rename = "lastBuildDate")]
    pub updated: Vec<Text>,
    #[serde(rename = "item")]
    pub items: Vec<Item>,
}

impl Element for Channel {
    const TAG: &'static str = "channel";

    fn read_child<'de, A: MapAccess<'de>>(
        &mut self,
        name: &str,
        map: &mut A,
    ) -> Result<(), A::Error> {
        match name {
            "title" => self.title.push(map.next_value()?),
            "link" => self.links.push(map.next_value()?),
            "description" => self.description.push(map.next_value()?),
            "pubDate" => self.published.push(map.next_value()?),
            "lastBuildDate" => self.updated.push(map.next_value()?),
            "item" => self.items.push(map.next_value()?),
            _ => skip(map)?,
        }
        Ok(())
    }
}

/// `<rdf:RDF>` document; items are siblings of the channel
#[derive(Debug, Default, Serialize)]
#[serde(rename = "rdf:RDF")]
pub(crate) struct Rdf {
    #[serde(rename = "@xmlns:rdf")]
    pub rdf_namespace: String,
    #[serde(rename = "@xmlns")]
    pub namespace: String,
    pub channel: RdfChannel,
    #[serde(rename = "item")]
    pub items: Vec<Item>,
}

impl Element for Rdf {
    const TAG: &'static str = "rdf:RDF";

    fn read_child<'de, A: MapAccess<'de>>(
        &mut self,
        name: &str,
        map: &mut A,
    ) -> Result<(), A::Error> {
        match name {
            "channel" => self.channel = map.next_value()?,
            "item" => self.items.push(map.next_value()?),
            _ => skip(map)?,
        }
        Ok(())
    }
}

/// RDF `<channel>`
#[derive(Debug, Default, Serialize)]
pub(crate) struct RdfChannel {
    pub title: Vec<Text>,
    #[serde(rename = "link")]
    pub links: Vec<Text>,
    pub description: Vec<Text>,
}

impl Element for RdfChannel {
    const TAG: &'static str = "channel";

    fn read_child<'de, A: MapAccess<'de>>(
        &mut self,
        name: &str,
        map: &mut A,
    ) -> Result<(), A::Error> {
        match name {
            "title" => self.title.push(map.next_value()?),
            "link" => self.links.push(map.next_value()?),
            "description" => self.description.push(map.next_value()?),
            _ => skip(map)?,
        }
        Ok(())
    }
}

/// `<item>`, shared by both formats
#[derive(Debug, Default, Serialize)]
pub(crate) struct Item {
    pub title: Vec<Text>,
    #[serde(rename = "link")]
    pub links: Vec<Text>,
    #[serde(rename = "pubDate")]
    pub published: Vec<Text>,
}

impl Element for Item {
    const TAG: &'static str = "item";

    fn read_child<'de, A: MapAccess<'de>>(
        &mut self,
        name: &str,
        map: &mut A,
    ) -> Result<(), A::Error> {
        match name {
            "title" => self.title.push(map.next_value()?),
            "link" => self.links.push(map.next_value()?),
            "pubDate" => self.published.push(map.next_value()?),
            _ => skip(map)?,
        }
        Ok(())
    }
}

deserialize_element!(Channel, Rdf, RdfChannel, Item);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{first_text, text};

    #[test]
    fn test_rss_reads_channel_and_items() {
        let xml = r#"<rss version="2.0"><channel>
            <title>Example</title>
            <link>http://x</link>
            <item><title>A</title><link>http://x/a</link></item>
            <item><title>B</title></item>
        </channel></rss>"#;

        let doc: Rss = quick_xml::de::from_str(xml).expect("Should deserialize RSS");
        assert_eq!(doc.version, "2.0");
        assert_eq!(first_text(&doc.channel.title), "Example");
        assert_eq!(doc.channel.links, text("http://x"));
        assert_eq!(doc.channel.items.len(), 2);
        assert_eq!(first_text(&doc.channel.items[1].title), "B");
        assert!(doc.channel.items[1].links.is_empty());
    }

    #[test]
    fn test_rss_tolerates_atom_self_link() {
        let xml = r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom"><channel>
            <atom:link href="http://x/feed" rel="self" type="application/rss+xml"/>
            <title>Example</title>
            <link>http://x</link>
        </channel></rss>"#;

        let doc: Rss = quick_xml::de::from_str(xml).expect("Should deserialize RSS");
        assert_eq!(doc.channel.links.len(), 2);
        assert_eq!(first_text(&doc.channel.links), "http://x");
    }

    #[test]
    fn test_rss_keeps_prefixed_repeats_in_document_order() {
        let xml = r#"<rss version="2.0" xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd"><channel>
            <title>Show</title>
            <itunes:title>Show (iTunes)</itunes:title>
            <item>
                <itunes:title>Episode (iTunes)</itunes:title>
                <title>Episode</title>
            </item>
        </channel></rss>"#;

        let doc: Rss = quick_xml::de::from_str(xml).expect("Should deserialize RSS");
        assert_eq!(doc.channel.title.len(), 2);
        assert_eq!(first_text(&doc.channel.title), "Show");
        assert_eq!(first_text(&doc.channel.items[0].title), "Episode (iTunes)");
    }

    #[test]
    fn test_rss_accepts_items_between_other_elements() {
        let xml = r#"<rss><channel>
            <item><title>A</title></item>
            <title>Example</title>
            <item><title>B</title></item>
        </channel></rss>"#;

        let doc: Rss = quick_xml::de::from_str(xml).expect("Should deserialize RSS");
        assert_eq!(doc.channel.items.len(), 2);
    }

    #[test]
    fn test_rdf_items_are_siblings_of_channel() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns="http://purl.org/rss/1.0/">
            <channel rdf:about="http://x">
                <title>Example</title>
                <link>http://x</link>
                <description>Desc</description>
            </channel>
            <item rdf:about="http://x/a"><title>A</title><link>http://x/a</link></item>
        </rdf:RDF>"#;

        let doc: Rdf = quick_xml::de::from_str(xml).expect("Should deserialize RDF");
        assert_eq!(first_text(&doc.channel.description), "Desc");
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.items[0].links, text("http://x/a"));
    }

    #[test]
    fn test_rss_serializes_with_rss_root() {
        let doc = Rss {
            version: RSS_VERSION.to_string(),
            channel: Channel {
                title: text("Example"),
                ..Channel::default()
            },
        };

        let xml = quick_xml::se::to_string(&doc).expect("Should serialize RSS");
        assert!(xml.starts_with(r#"<rss version="2.0">"#));
        assert!(xml.ends_with("</rss>"));
        assert!(xml.contains("<title>Example</title>"));
    }

    #[test]
    fn test_rdf_serializes_with_prefixed_root() {
        let doc = Rdf {
            rdf_namespace: RDF_NAMESPACE.to_string(),
            namespace: RSS1_NAMESPACE.to_string(),
            ..Rdf::default()
        };

        let xml = quick_xml::se::to_string(&doc).expect("Should serialize RDF");
        assert!(xml.starts_with("<rdf:RDF "));
        assert!(xml.ends_with("</rdf:RDF>"));
    }
}
