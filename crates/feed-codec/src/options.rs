// crates/feed-codec/src/options.rs
//! Output settings for the encoders

/// Declaration written ahead of the root element
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// How an encoded document is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Prefix the document with [`XML_DECLARATION`]
    pub xml_declaration: bool,
    /// Pretty-print with this many spaces per level; `None` writes one line
    pub indent: Option<usize>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            indent: None,
        }
    }
}

impl EncodeOptions {
    /// Options producing a bare single-line document
    pub fn compact() -> Self {
        Self {
            xml_declaration: false,
            indent: None,
        }
    }

    /// Sets whether the XML declaration is written
    pub fn with_declaration(mut self, xml_declaration: bool) -> Self {
        self.xml_declaration = xml_declaration;
        self
    }

    /// Enables pretty-printing with `spaces` per nesting level
    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.indent = Some(spaces);
        self
    }
}
