// crates/feed-codec/examples/convert_feed.rs
//! Decodes one feed of each format and re-encodes it as the others

use unifeed_feed_codec::{marshal_with, parse_or_default, EncodeOptions, Feed, Format};

fn main() {
    env_logger::init();

    println!("=== Unifeed Feed Codec Demo ===\n");

    let samples: [(&str, &[u8]); 3] = [
        ("RSS 2.0", RSS_SAMPLE.as_bytes()),
        ("RDF / RSS 1.0", RDF_SAMPLE.as_bytes()),
        ("Atom", ATOM_SAMPLE.as_bytes()),
    ];

    for (label, bytes) in samples {
        println!("{}", label);
        println!("{}", "=".repeat(60));

        let feed = parse_or_default(bytes);
        print_feed(&feed);

        for target in Format::ALL {
            if Some(target) == feed.format {
                continue;
            }
            convert(&feed, target);
        }
        println!();
    }

    println!("Malformed input");
    println!("{}", "=".repeat(60));
    let broken = parse_or_default(b"<rss><channel><title>cut off");
    println!("format tag: {:?}, items: {}", broken.format_tag(), broken.item_count());
}

fn print_feed(feed: &Feed) {
    println!("Format:      {}", feed.format_tag());
    println!("Title:       {}", feed.title);
    println!("Link:        {}", feed.hyperlink);
    println!("Description: {}", feed.description);
    println!("Published:   {}", feed.published);
    println!("Updated:     {}", feed.updated);
    println!("Author:      {}", feed.author);
    println!("Items:       {}", feed.item_count());

    for (i, item) in feed.items.iter().enumerate() {
        println!("  {}. {} <{}>", i + 1, item.title, item.hyperlink);
        println!("     published {} / updated {}", item.published, item.updated);
    }
}

fn convert(feed: &Feed, target: Format) {
    let options = EncodeOptions::default().with_indent(2);
    match marshal_with(&feed.clone().convert_to(target), &options) {
        Ok(bytes) => {
            println!("\n--- as {} ---", target);
            println!("{}", String::from_utf8_lossy(&bytes));
        }
        Err(e) => eprintln!("Failed to encode as {}: {}", target, e),
    }
}

const RSS_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Classic Audiobooks</title>
    <link>https://example.com/audiobooks</link>
    <description>Public domain audiobooks read by volunteers</description>
    <pubDate>2024-01-01 12:00:00</pubDate>
    <item>
      <title>Pride and Prejudice - Chapter 1</title>
      <link>https://example.com/pride-ch1</link>
      <pubDate>2024-01-01 12:00:00</pubDate>
    </item>
    <item>
      <title>Pride and Prejudice - Chapter 2</title>
      <link>https://example.com/pride-ch2</link>
      <pubDate>2024-01-02 12:00:00</pubDate>
    </item>
  </channel>
</rss>"#;

const RDF_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns="http://purl.org/rss/1.0/">
  <channel rdf:about="https://example.org/">
    <title>Example RDF Channel</title>
    <link>https://example.org/</link>
    <description>An RSS 1.0 channel</description>
  </channel>
  <item rdf:about="https://example.org/story-1">
    <title>First story</title>
    <link>https://example.org/story-1</link>
  </item>
</rdf:RDF>"#;

const ATOM_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Moby Dick Serial</title>
  <link href="https://example.com/moby"/>
  <author><name>Herman Melville</name></author>
  <updated>2024-01-02T12:00:00Z</updated>
  <entry>
    <title>Chapter 1: Loomings</title>
    <link href="https://example.com/moby/1"/>
    <published>2024-01-01T12:00:00Z</published>
    <updated>2024-01-01T12:00:00Z</updated>
  </entry>
</feed>"#;
