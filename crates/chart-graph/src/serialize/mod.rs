//! Text encodings of a [`GraphDocument`].
//!
//! Every encoder walks the document's ordered triple set and applies the fixed
//! [`NAMESPACE_BINDINGS`], so equal documents always produce equal text.

mod ntriples;
mod rdf_xml;
mod turtle;

use std::fmt;
use std::str::FromStr;

use chart_model::{GraphDocument, NAMESPACE_BINDINGS, Namespace};

use crate::error::{GraphError, Result};

pub use ntriples::write_ntriples;
pub use rdf_xml::write_rdf_xml;
pub use turtle::write_turtle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SerializationFormat {
    #[default]
    RdfXml,
    Turtle,
    NTriples,
}

impl SerializationFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SerializationFormat::RdfXml => "xml",
            SerializationFormat::Turtle => "turtle",
            SerializationFormat::NTriples => "nt",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            SerializationFormat::RdfXml => "xml",
            SerializationFormat::Turtle => "ttl",
            SerializationFormat::NTriples => "nt",
        }
    }
}

impl fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SerializationFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xml" | "rdf/xml" | "rdfxml" => Ok(SerializationFormat::RdfXml),
            "turtle" | "ttl" => Ok(SerializationFormat::Turtle),
            "nt" | "ntriples" | "n-triples" => Ok(SerializationFormat::NTriples),
            _ => Err(GraphError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Encodes `doc` in `format`.
pub fn serialize(doc: &GraphDocument, format: SerializationFormat) -> Result<String> {
    match format {
        SerializationFormat::RdfXml => write_rdf_xml(doc),
        SerializationFormat::Turtle => Ok(write_turtle(doc)),
        SerializationFormat::NTriples => Ok(write_ntriples(doc)),
    }
}

/// Finds a fixed binding whose base prefixes `iri` with a usable local name.
fn bound_namespace(iri: &str, valid_local: fn(&str) -> bool) -> Option<(&'static Namespace, &str)> {
    NAMESPACE_BINDINGS.iter().find_map(|namespace| {
        namespace
            .local_name(iri)
            .filter(|local| valid_local(local))
            .map(|local| (namespace, local))
    })
}

/// Splits `iri` after its last `#` or `/` when the remainder is an XML name.
fn split_iri(iri: &str) -> Option<(&str, &str)> {
    let index = iri.rfind(['#', '/'])?;
    let (base, local) = iri.split_at(index + 1);
    is_xml_name(local).then_some((base, local))
}

/// Accepts non-colonized XML names.
fn is_xml_name(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Accepts local names that need no escaping in a Turtle prefixed name.
fn is_turtle_local(value: &str) -> bool {
    is_xml_name(value) && !value.ends_with('.')
}

/// Writes `<iri>`, with characters an `IRIREF` excludes as `\u` escapes.
fn escape_iri(iri: &str) -> String {
    let mut escaped = String::with_capacity(iri.len() + 2);
    escaped.push('<');
    for c in iri.chars() {
        if c <= ' ' || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\') {
            escaped.push_str(&format!("\\u{:04X}", u32::from(c)));
        } else {
            escaped.push(c);
        }
    }
    escaped.push('>');
    escaped
}

fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped.push('"');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn format_names_parse() {
        for (name, format) in [
            ("xml", SerializationFormat::RdfXml),
            ("RDF/XML", SerializationFormat::RdfXml),
            ("ttl", SerializationFormat::Turtle),
            ("n-triples", SerializationFormat::NTriples),
        ] {
            assert_eq!(name.parse::<SerializationFormat>().unwrap(), format);
        }
        assert!(matches!(
            "json-ld".parse::<SerializationFormat>(),
            Err(GraphError::UnsupportedFormat(name)) if name == "json-ld"
        ));
    }

    #[test]
    fn iri_splitting() {
        assert_eq!(
            split_iri("http://example.org/terms#hasThing"),
            Some(("http://example.org/terms#", "hasThing"))
        );
        assert_eq!(split_iri("http://example.org/terms/8302-2"), None);
        assert!(is_xml_name("family-name"));
        assert!(!is_turtle_local("name."));
    }

    #[test]
    fn iri_delimiters_are_escaped() {
        assert_eq!(
            escape_iri("http://x.org/vaccines asp?rpt=cvx#1>2"),
            "<http://x.org/vaccines\\u0020asp?rpt=cvx#1\\u003E2>"
        );
        assert_eq!(
            escape_iri("http://purl.bioontology.org/ontology/LNC/8302-2"),
            "<http://purl.bioontology.org/ontology/LNC/8302-2>"
        );
    }

    fn unescape(value: &str) -> String {
        let inner = &value[1..value.len() - 1];
        let mut out = String::new();
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some(other) => out.push(other),
                    None => {}
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    proptest! {
        #[test]
        fn escaped_literals_round_trip(value in "[a-z\"\\\\\n\r\t ]{0,16}") {
            let escaped = escape_literal(&value);
            prop_assert!(!escaped[1..escaped.len() - 1].contains('\n'));
            prop_assert_eq!(unescape(&escaped), value);
        }
    }
}
