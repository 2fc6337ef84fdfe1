// crates/feed-codec/src/schema/mod.rs
//! Serde mirrors of the three wire formats
//!
//! Each structure follows one format's element tree closely enough for
//! quick-xml to read and write it. The root element name is set with
//! `#[serde(rename)]` on the root struct, so serialized documents come out
//! with the conventional `rss`, `rdf:RDF` or `feed` root.
//!
//! Prefixed elements are matched by local name when reading, so an RSS
//! `<atom:link href="…"/>` lands in the same list as the plain `<link>`, and
//! an `<itunes:title>` next to `<title>`. Elements holding such children are
//! read child by child through [`Element`], so repeats accumulate in a
//! `Vec<Text>` instead of clashing, and are read back with [`first_text`].
//! Writing goes through the derived `Serialize` impls.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Implements `Deserialize` for types that implement [`Element`]
macro_rules! deserialize_element {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    deserializer.deserialize_map($crate::schema::ElementVisitor::<$ty>::new())
                }
            }
        )+
    };
}

pub(crate) mod atom;
pub(crate) mod rss;

/// Key quick-xml reports for character data inside an element
const TEXT_KEY: &str = "$text";

/// Text content of one element.
///
/// Reading collects the character data of the element and of any nested
/// elements (Atom `type="xhtml"` constructs) and skips attributes. Writing
/// emits the plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct Text(pub String);

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text(value.to_string())
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TextVisitor)
    }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = Text;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an element with text content")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Text, E> {
        Ok(Text::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Text, E> {
        Ok(Text(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Text, E> {
        Ok(Text::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Text, A::Error> {
        let mut parts = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key == TEXT_KEY {
                parts.push(map.next_value::<String>()?);
            } else if key.starts_with('@') {
                map.next_value::<IgnoredAny>()?;
            } else {
                parts.push(map.next_value::<Text>()?.0);
            }
        }

        let parts: Vec<&str> = parts
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect();
        Ok(Text(parts.join(" ")))
    }
}

/// An element read one child at a time.
///
/// `name` is the local name of a child element, or `@name` for an
/// attribute. Children the element does not model must be passed to
/// [`skip`].
pub(crate) trait Element: Default {
    const TAG: &'static str;

    fn read_child<'de, A: MapAccess<'de>>(
        &mut self,
        name: &str,
        map: &mut A,
    ) -> Result<(), A::Error>;
}

pub(crate) struct ElementVisitor<T>(PhantomData<T>);

impl<T> ElementVisitor<T> {
    pub(crate) fn new() -> Self {
        ElementVisitor(PhantomData)
    }
}

impl<'de, T: Element> Visitor<'de> for ElementVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a <{}> element", T::TAG)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<T, A::Error> {
        let mut element = T::default();
        while let Some(name) = map.next_key::<String>()? {
            element.read_child(&name, &mut map)?;
        }
        Ok(element)
    }
}

/// Consumes the value of a child nobody models
pub(crate) fn skip<'de, A: MapAccess<'de>>(map: &mut A) -> Result<(), A::Error> {
    map.next_value::<IgnoredAny>()?;
    Ok(())
}

/// A single-element list, the shape every text field is written with
pub(crate) fn text(value: &str) -> Vec<Text> {
    vec![Text::from(value)]
}

/// First non-blank text among repeated elements, or `""` when there is none
pub(crate) fn first_text(values: &[Text]) -> String {
    values
        .iter()
        .find(|value| !value.0.trim().is_empty())
        .map(|value| value.0.clone())
        .unwrap_or_default()
}
